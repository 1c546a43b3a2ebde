use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};

use crate::config::GraphQlConfig;
use crate::model::{Project, Repository};
use crate::seed::Faker;

pub type MockSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/*
  type RootQuery {
    project: Project!
    projects: [Project!]!
    repositories: [Repository!]!
  }
*/
pub struct QueryRoot;

#[Object(name = "RootQuery")]
impl QueryRoot {
    /// A freshly generated project.
    async fn project(&self, ctx: &Context<'_>) -> Result<Project> {
        Ok(ctx.data::<Faker>()?.project())
    }

    /// Between 4 and 11 freshly generated projects.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        Ok(ctx.data::<Faker>()?.projects())
    }

    /// Between 4 and 11 freshly generated repositories.
    async fn repositories(&self, ctx: &Context<'_>) -> Result<Vec<Repository>> {
        Ok(ctx.data::<Faker>()?.repositories())
    }
}

/// Assemble the schema once at startup.
pub fn build_schema(faker: Faker, config: &GraphQlConfig) -> MockSchema {
    let builder = Schema::build(QueryRoot, EmptyMutation, EmptySubscription).data(faker);
    if config.introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}

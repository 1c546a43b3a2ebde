//! Print the SDL of the mock schema, for client code generators.

use mock_project_graphql::config::AppConfig;
use mock_project_graphql::{build_schema, Faker};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let schema = build_schema(Faker::from_entropy(), &config.graphql);
    print!("{}", schema.sdl());

    Ok(())
}

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::model::{Hash, Repository};

/// Shallow view of a project, used for the `parent` link.
///
/// Carries identifying fields only, so a parent never expands into its own
/// repositories or parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "ProjectParent")]
pub struct ProjectSummary {
    pub hash: Hash,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Project {
    pub hash: Hash,
    pub title: String,
    pub description: String,
    pub parent: ProjectSummary,
    pub repositories: Vec<Repository>,
}

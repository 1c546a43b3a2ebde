use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::model::Hash;

/// A markdown file owned by a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Markdown {
    pub hash: Hash,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Repository {
    pub hash: Hash,
    pub title: String,
    pub description: String,
    pub markdowns: Vec<Markdown>,
}

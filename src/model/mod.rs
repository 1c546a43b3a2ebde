pub mod hash;
pub mod project;
pub mod repository;

pub use hash::*;
pub use project::*;
pub use repository::*;

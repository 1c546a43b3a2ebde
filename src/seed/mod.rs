pub mod fake;
pub mod words;

pub use fake::*;

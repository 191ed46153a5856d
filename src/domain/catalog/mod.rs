//! Catalog module - projects, categories and the queries that find them.

mod category;
mod discovery_query;
mod project;

pub use category::Category;
pub use discovery_query::{BackedFilter, DiscoveryQuery};
pub use project::{Project, ProjectPage};

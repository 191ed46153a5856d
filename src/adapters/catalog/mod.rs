//! Catalog Adapters
//!
//! Implementations of the ProjectCatalogClient port.
//!
//! - **InMemoryProjectCatalog** - Evaluates queries over seeded projects
//! - **CatalogFixture** - JSON seed data for the in-memory catalog

mod fixture;
mod in_memory;

pub use fixture::{CatalogFixture, FixtureError};
pub use in_memory::InMemoryProjectCatalog;

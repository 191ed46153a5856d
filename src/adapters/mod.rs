//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the thank-you screen to concrete infrastructure:
//! - `catalog` - In-memory project catalog and JSON fixtures
//! - `preferences` - File and in-memory flag stores
//! - `session` - Watch-channel current user session
//! - `analytics` - Log and in-memory analytics sinks

pub mod analytics;
pub mod catalog;
pub mod preferences;
pub mod session;

pub use analytics::{InMemoryAnalytics, TracingAnalytics};
pub use catalog::{CatalogFixture, FixtureError, InMemoryProjectCatalog};
pub use preferences::{FilePreferenceStore, InMemoryPreferenceStore};
pub use session::WatchCurrentUserSession;

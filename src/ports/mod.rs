//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the thank-you screen and the outside world. Adapters implement these ports.
//!
//! - `ProjectCatalogClient` - Remote catalog and account settings API
//! - `PreferenceStore` - Persisted one-shot prompt flags
//! - `CurrentUserSession` - The signed-in account, read-only
//! - `AnalyticsTracker` - Fire-and-forget action tracking

mod analytics;
mod current_user;
mod preference_store;
mod project_catalog;

pub use analytics::{AnalyticsEvent, AnalyticsTracker, TrackedEvent};
pub use current_user::CurrentUserSession;
pub use preference_store::{PreferenceError, PreferenceKey, PreferenceStore};
pub use project_catalog::{CatalogError, ProjectCatalogClient};

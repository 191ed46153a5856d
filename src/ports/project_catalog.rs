//! ProjectCatalogClient port - Interface to the remote project catalog.
//!
//! The thank-you screen only relies on the contract: every call is async and
//! may fail. The HTTP client behind it lives outside this crate.

use async_trait::async_trait;

use crate::domain::account::User;
use crate::domain::catalog::{Category, DiscoveryQuery, ProjectPage};
use crate::domain::foundation::CategoryId;

/// Catalog call errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Network or server failure; the same call may succeed on retry.
    #[error("transport error: {0}")]
    Transport(String),

    /// The catalog has no such resource.
    #[error("not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogError::Transport(_))
    }
}

/// Port for the remote catalog and account settings API.
#[async_trait]
pub trait ProjectCatalogClient: Send + Sync {
    /// Fetch a category by id.
    async fn fetch_category(&self, id: CategoryId) -> Result<Category, CatalogError>;

    /// Run a discovery query and return one page of projects.
    async fn fetch_projects(&self, query: &DiscoveryQuery) -> Result<ProjectPage, CatalogError>;

    /// Persist new settings for a user, returning the stored user.
    async fn update_user_settings(&self, user: &User) -> Result<User, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ProjectCatalogClient) {}

    #[test]
    fn only_transport_errors_are_retryable() {
        assert!(CatalogError::transport("connection reset").is_retryable());
        assert!(!CatalogError::not_found("category 12").is_retryable());
    }

    #[test]
    fn errors_display_their_message() {
        assert_eq!(
            CatalogError::transport("timeout").to_string(),
            "transport error: timeout"
        );
        assert_eq!(CatalogError::not_found("project 9").to_string(), "not found: project 9");
    }
}

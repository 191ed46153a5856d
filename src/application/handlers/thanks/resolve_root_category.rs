//! ResolveRootCategoryHandler - Finds the top-level category of a project.

use std::sync::Arc;

use crate::domain::catalog::{Category, Project};
use crate::ports::ProjectCatalogClient;

/// Resolves a project's root category.
///
/// Best-effort enrichment: a missing category or a failed lookup yields
/// `None`, never an error.
pub struct ResolveRootCategoryHandler {
    catalog: Arc<dyn ProjectCatalogClient>,
}

impl ResolveRootCategoryHandler {
    pub fn new(catalog: Arc<dyn ProjectCatalogClient>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, project: &Project) -> Option<Category> {
        let category = project.category.as_ref()?;

        if let Some(parent) = category.parent() {
            return Some(parent.clone());
        }

        match self.catalog.fetch_category(category.root_id()).await {
            Ok(root) => Some(root),
            Err(e) => {
                tracing::warn!(
                    project_id = %project.id,
                    root_id = %category.root_id(),
                    error = %e,
                    "Root category lookup failed"
                );
                None
            }
        }
    }
}

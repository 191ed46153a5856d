//! JSON catalog fixtures for the demo binary and local runs.

use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use super::InMemoryProjectCatalog;
use crate::domain::account::User;
use crate::domain::catalog::{Category, Project};
use crate::domain::foundation::ProjectId;

/// Errors that can occur loading a fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error reading fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Pledged project {0} is not in the fixture")]
    UnknownPledgedProject(ProjectId),
}

/// Seed data for an [`InMemoryProjectCatalog`] plus the visit to replay.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFixture {
    /// Root categories reachable through `fetch_category`.
    #[serde(default)]
    pub categories: Vec<Category>,
    pub projects: Vec<Project>,
    /// Ids personally recommended to the signed-in user.
    #[serde(default)]
    pub recommended: Vec<ProjectId>,
    #[serde(default)]
    pub current_user: Option<User>,
    /// The project the user just pledged to.
    pub pledged_project: ProjectId,
}

impl CatalogFixture {
    /// Parse a fixture from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture file.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let json = fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// The project the thank-you screen opens for.
    pub fn pledged_project(&self) -> Result<Project, FixtureError> {
        self.projects
            .iter()
            .find(|p| p.id == self.pledged_project)
            .cloned()
            .ok_or(FixtureError::UnknownPledgedProject(self.pledged_project))
    }

    /// Build a catalog seeded with this fixture's data.
    pub fn to_catalog(&self) -> InMemoryProjectCatalog {
        let mut catalog = InMemoryProjectCatalog::new();
        for category in &self.categories {
            catalog = catalog.with_category(category.clone());
        }
        for project in &self.projects {
            catalog = catalog.with_project(project.clone());
        }
        for id in &self.recommended {
            catalog = catalog.with_recommended(*id);
        }
        if let Some(user) = &self.current_user {
            catalog = catalog.with_user(user.clone());
        }
        catalog
    }
}

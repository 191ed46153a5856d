//! Category taxonomy node.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, ValidationError};

/// A node in the project category taxonomy.
///
/// Categories arrive embedded in projects. A sub-category may carry its
/// parent inline; when it does not, only `root_id` points at the top of
/// the tree and the root must be fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    slug: String,
    #[serde(default)]
    parent: Option<Box<Category>>,
    root_id: CategoryId,
}

impl Category {
    /// Creates a top-level category. Its root is itself.
    pub fn root(
        id: CategoryId,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::build(id, name.into(), slug.into(), None, id)
    }

    /// Creates a sub-category whose parent is embedded.
    pub fn child_of(
        parent: Category,
        id: CategoryId,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let root_id = parent.root_id;
        Self::build(id, name.into(), slug.into(), Some(Box::new(parent)), root_id)
    }

    /// Creates a sub-category that only knows its root by id.
    pub fn detached(
        id: CategoryId,
        name: impl Into<String>,
        slug: impl Into<String>,
        root_id: CategoryId,
    ) -> Result<Self, ValidationError> {
        Self::build(id, name.into(), slug.into(), None, root_id)
    }

    fn build(
        id: CategoryId,
        name: String,
        slug: String,
        parent: Option<Box<Category>>,
        root_id: CategoryId,
    ) -> Result<Self, ValidationError> {
        if slug.trim().is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        Ok(Self {
            id,
            name,
            slug,
            parent,
            root_id,
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn parent(&self) -> Option<&Category> {
        self.parent.as_deref()
    }

    pub fn root_id(&self) -> CategoryId {
        self.root_id
    }

    /// True for a top-level node.
    pub fn is_root(&self) -> bool {
        self.parent.is_none() && self.root_id == self.id
    }
}

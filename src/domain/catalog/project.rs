//! Project as received from the catalog.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::Category;
use crate::domain::foundation::{CategoryId, ProjectId};

/// A crowdfunding project.
///
/// Two fetches of the same project are separate values, so equality and
/// hashing look at the identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    /// Featured by curators.
    #[serde(default)]
    pub staff_pick: bool,
    /// The requesting user already backs this project.
    #[serde(default)]
    pub is_backing: bool,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            staff_pick: false,
            is_backing: false,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_staff_pick(mut self, staff_pick: bool) -> Self {
        self.staff_pick = staff_pick;
        self
    }

    pub fn with_backing(mut self, is_backing: bool) -> Self {
        self.is_backing = is_backing;
        self
    }

    /// Root of the embedded category, by id.
    pub fn root_category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(Category::root_id)
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One page of catalog query results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPage {
    pub projects: Vec<Project>,
}

impl ProjectPage {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

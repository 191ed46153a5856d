//! Catalog query description.

use serde::{Deserialize, Serialize};

use super::{Category, Project};
use crate::domain::foundation::{CategoryId, ProjectId};

/// Filter on whether the requesting user backs a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackedFilter {
    #[default]
    Any,
    /// Never return projects the user already funds.
    Excluded,
    Only,
}

impl BackedFilter {
    /// Whether a project with the given backing state passes the filter.
    pub fn admits(&self, is_backing: bool) -> bool {
        match self {
            BackedFilter::Any => true,
            BackedFilter::Excluded => !is_backing,
            BackedFilter::Only => is_backing,
        }
    }
}

/// Immutable description of a catalog query.
///
/// Built through the `with_*` methods, which consume and return the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryQuery {
    pub category: Option<CategoryId>,
    pub backed: BackedFilter,
    pub recommended: bool,
    pub similar_to: Option<ProjectId>,
    pub staff_picks: bool,
    pub per_page: Option<u32>,
}

impl DiscoveryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation target for a tapped category.
    pub fn for_category(category: &Category) -> Self {
        Self::new().with_category(Some(category.id()))
    }

    pub fn with_category(mut self, category: Option<CategoryId>) -> Self {
        self.category = category;
        self
    }

    pub fn with_backed(mut self, backed: BackedFilter) -> Self {
        self.backed = backed;
        self
    }

    pub fn with_recommended(mut self, recommended: bool) -> Self {
        self.recommended = recommended;
        self
    }

    pub fn with_similar_to(mut self, project: &Project) -> Self {
        self.similar_to = Some(project.id);
        self
    }

    pub fn with_staff_picks(mut self, staff_picks: bool) -> Self {
        self.staff_picks = staff_picks;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_filter_drops_backed_projects() {
        assert!(BackedFilter::Excluded.admits(false));
        assert!(!BackedFilter::Excluded.admits(true));
        assert!(BackedFilter::Any.admits(true));
        assert!(!BackedFilter::Only.admits(false));
    }

    #[test]
    fn category_query_filters_on_tapped_category() {
        let art = Category::root(CategoryId::new(1), "Art", "art").unwrap();
        let query = DiscoveryQuery::for_category(&art);

        assert_eq!(query.category, Some(CategoryId::new(1)));
        assert_eq!(query.backed, BackedFilter::Any);
        assert!(!query.staff_picks);
        assert_eq!(query.per_page, None);
    }

    #[test]
    fn builder_methods_compose() {
        let project = Project::new(ProjectId::new(9), "Synth");
        let query = DiscoveryQuery::new()
            .with_backed(BackedFilter::Excluded)
            .with_similar_to(&project)
            .with_per_page(3);

        assert_eq!(query.similar_to, Some(ProjectId::new(9)));
        assert_eq!(query.per_page, Some(3));
        assert!(!query.recommended);
    }
}

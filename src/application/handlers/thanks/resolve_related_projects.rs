//! ResolveRelatedProjectsHandler - Builds the "more like this" shelf.
//!
//! Three sources are queried concurrently and merged in fixed priority:
//!
//! ```text
//! recommended (shuffled, first N) -> similar -> staff picks
//! ```
//!
//! Personal recommendations are sparse for new users and niche projects,
//! so the later sources backfill the shelf. Each query is retried on
//! transport failure; a source that keeps failing contributes nothing.

use rand::seq::SliceRandom;
use std::fmt;
use std::sync::Arc;

use crate::config::RecommendationConfig;
use crate::domain::catalog::{BackedFilter, DiscoveryQuery, Project};
use crate::domain::thanks::merge_unique;
use crate::ports::ProjectCatalogClient;

/// Where a shelf entry came from, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    Recommended,
    Similar,
    StaffPicks,
}

impl fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecommendationSource::Recommended => "recommended",
            RecommendationSource::Similar => "similar",
            RecommendationSource::StaffPicks => "staff_picks",
        };
        f.write_str(s)
    }
}

/// Resolves up to `max_results` unique related projects. Never fails.
pub struct ResolveRelatedProjectsHandler {
    catalog: Arc<dyn ProjectCatalogClient>,
    config: RecommendationConfig,
}

impl ResolveRelatedProjectsHandler {
    pub fn new(catalog: Arc<dyn ProjectCatalogClient>, config: RecommendationConfig) -> Self {
        Self { catalog, config }
    }

    pub fn recommended_query(&self) -> DiscoveryQuery {
        DiscoveryQuery::new()
            .with_backed(BackedFilter::Excluded)
            .with_recommended(true)
            .with_per_page(self.config.recommended_page_size)
    }

    pub fn similar_query(&self, project: &Project) -> DiscoveryQuery {
        DiscoveryQuery::new()
            .with_backed(BackedFilter::Excluded)
            .with_similar_to(project)
            .with_per_page(self.config.similar_page_size)
    }

    pub fn staff_pick_query(&self, project: &Project) -> DiscoveryQuery {
        DiscoveryQuery::new()
            .with_category(project.root_category_id())
            .with_backed(BackedFilter::Excluded)
            .with_staff_picks(true)
            .with_per_page(self.config.staff_pick_page_size)
    }

    pub async fn handle(&self, project: &Project) -> Vec<Project> {
        let limit = self.config.max_results as usize;

        let recommended_query = self.recommended_query();
        let similar_query = self.similar_query(project);
        let staff_pick_query = self.staff_pick_query(project);

        // Run concurrently; order is restored by the merge below.
        let (mut recommended, similar, staff_picks) = futures::join!(
            self.fetch_with_retry(RecommendationSource::Recommended, &recommended_query),
            self.fetch_with_retry(RecommendationSource::Similar, &similar_query),
            self.fetch_with_retry(RecommendationSource::StaffPicks, &staff_pick_query),
        );

        recommended.shuffle(&mut rand::rng());
        recommended.truncate(limit);

        let shelf = merge_unique([recommended, similar, staff_picks], limit);
        tracing::debug!(
            project_id = %project.id,
            shelf_size = shelf.len(),
            "Related projects resolved"
        );
        shelf
    }

    async fn fetch_with_retry(
        &self,
        source: RecommendationSource,
        query: &DiscoveryQuery,
    ) -> Vec<Project> {
        let attempts = self.config.attempts();

        for attempt in 1..=attempts {
            match self.catalog.fetch_projects(query).await {
                Ok(page) => return page.projects,
                Err(e) if e.is_retryable() && attempt < attempts => {
                    tracing::debug!(%source, attempt, error = %e, "Retrying related projects query");
                }
                Err(e) => {
                    tracing::warn!(%source, attempt, error = %e, "Related projects source unavailable");
                    break;
                }
            }
        }

        Vec::new()
    }
}

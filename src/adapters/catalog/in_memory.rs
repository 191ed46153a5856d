//! In-memory project catalog.
//!
//! Evaluates discovery queries against a seeded project list, so the whole
//! thank-you flow can run without the remote API. Transport failures can
//! be injected to exercise retry and degradation paths.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::account::User;
use crate::domain::catalog::{Category, DiscoveryQuery, Project, ProjectPage};
use crate::domain::foundation::{CategoryId, ProjectId, UserId};
use crate::ports::{CatalogError, ProjectCatalogClient};

/// In-memory catalog for tests, demos and local development.
#[derive(Debug, Default)]
pub struct InMemoryProjectCatalog {
    categories: RwLock<HashMap<CategoryId, Category>>,
    projects: RwLock<Vec<Project>>,
    recommended: RwLock<HashSet<ProjectId>>,
    users: RwLock<HashMap<UserId, User>>,
    failing_queries: AtomicUsize,
    fail_category_fetches: AtomicBool,
    fail_user_updates: AtomicBool,
    category_fetches: AtomicUsize,
    query_log: RwLock<Vec<DiscoveryQuery>>,
}

impl InMemoryProjectCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.get_mut().insert(category.id(), category);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.get_mut().push(project);
        self
    }

    /// Mark a project as personally recommended for the requesting user.
    pub fn with_recommended(mut self, id: ProjectId) -> Self {
        self.recommended.get_mut().insert(id);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.get_mut().insert(user.id, user);
        self
    }

    // === Failure injection ===

    /// Fail the next `count` project queries with a transport error.
    pub fn fail_next_queries(&self, count: usize) {
        self.failing_queries.store(count, Ordering::SeqCst);
    }

    pub fn set_category_fetch_failure(&self, fail: bool) {
        self.fail_category_fetches.store(fail, Ordering::SeqCst);
    }

    pub fn set_user_update_failure(&self, fail: bool) {
        self.fail_user_updates.store(fail, Ordering::SeqCst);
    }

    // === Inspection ===

    /// Number of `fetch_category` calls received.
    pub fn category_fetch_count(&self) -> usize {
        self.category_fetches.load(Ordering::SeqCst)
    }

    /// Every query received, in arrival order.
    pub async fn queries(&self) -> Vec<DiscoveryQuery> {
        self.query_log.read().await.clone()
    }

    pub async fn stored_user(&self, id: UserId) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    fn take_query_failure(&self) -> bool {
        self.failing_queries
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |remaining| {
                remaining.checked_sub(1)
            })
            .is_ok()
    }

    fn matches(
        project: &Project,
        query: &DiscoveryQuery,
        recommended: &HashSet<ProjectId>,
        similar_category: Option<CategoryId>,
    ) -> bool {
        if !query.backed.admits(project.is_backing) {
            return false;
        }
        if query.recommended && !recommended.contains(&project.id) {
            return false;
        }
        if query.staff_picks && !project.staff_pick {
            return false;
        }
        if let Some(category) = query.category {
            let in_category = project
                .category
                .as_ref()
                .is_some_and(|c| c.id() == category || c.root_id() == category);
            if !in_category {
                return false;
            }
        }
        if let Some(reference) = query.similar_to {
            let same_category = project.category.as_ref().map(Category::id) == similar_category;
            if project.id == reference || similar_category.is_none() || !same_category {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ProjectCatalogClient for InMemoryProjectCatalog {
    async fn fetch_category(&self, id: CategoryId) -> Result<Category, CatalogError> {
        self.category_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_category_fetches.load(Ordering::SeqCst) {
            return Err(CatalogError::transport("simulated category fetch failure"));
        }
        self.categories
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(format!("category {}", id)))
    }

    async fn fetch_projects(&self, query: &DiscoveryQuery) -> Result<ProjectPage, CatalogError> {
        self.query_log.write().await.push(query.clone());
        if self.take_query_failure() {
            return Err(CatalogError::transport("simulated query failure"));
        }

        let projects = self.projects.read().await;
        let recommended = self.recommended.read().await;
        let similar_category = query.similar_to.and_then(|reference| {
            projects
                .iter()
                .find(|p| p.id == reference)
                .and_then(|p| p.category.as_ref().map(Category::id))
        });

        let limit = query.per_page.map(|n| n as usize).unwrap_or(usize::MAX);
        let page = projects
            .iter()
            .filter(|p| Self::matches(p, query, &recommended, similar_category))
            .take(limit)
            .cloned()
            .collect();

        Ok(ProjectPage::new(page))
    }

    async fn update_user_settings(&self, user: &User) -> Result<User, CatalogError> {
        if self.fail_user_updates.load(Ordering::SeqCst) {
            return Err(CatalogError::transport("simulated settings update failure"));
        }
        self.users.write().await.insert(user.id, user.clone());
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::BackedFilter;

    fn games() -> Category {
        Category::root(CategoryId::new(12), "Games", "games").unwrap()
    }

    fn tabletop() -> Category {
        Category::child_of(games(), CategoryId::new(34), "Tabletop Games", "games/tabletop").unwrap()
    }

    fn art() -> Category {
        Category::root(CategoryId::new(1), "Art", "art").unwrap()
    }

    fn catalog() -> InMemoryProjectCatalog {
        InMemoryProjectCatalog::new()
            .with_category(games())
            .with_project(Project::new(ProjectId::new(1), "Dice").with_category(tabletop()))
            .with_project(
                Project::new(ProjectId::new(2), "Cards")
                    .with_category(tabletop())
                    .with_staff_pick(true),
            )
            .with_project(
                Project::new(ProjectId::new(3), "Meeples")
                    .with_category(tabletop())
                    .with_backing(true),
            )
            .with_project(
                Project::new(ProjectId::new(4), "Mural")
                    .with_category(art())
                    .with_staff_pick(true),
            )
            .with_recommended(ProjectId::new(3))
            .with_recommended(ProjectId::new(4))
    }

    fn ids(page: &ProjectPage) -> Vec<u64> {
        page.projects.iter().map(|p| p.id.value()).collect()
    }

    #[tokio::test]
    async fn backed_exclusion_hides_funded_projects() {
        let query = DiscoveryQuery::new()
            .with_backed(BackedFilter::Excluded)
            .with_recommended(true);
        let page = catalog().fetch_projects(&query).await.unwrap();
        assert_eq!(ids(&page), vec![4]);
    }

    #[tokio::test]
    async fn similar_projects_share_category_and_exclude_reference() {
        let reference = Project::new(ProjectId::new(1), "Dice");
        let query = DiscoveryQuery::new().with_similar_to(&reference);
        let page = catalog().fetch_projects(&query).await.unwrap();
        assert_eq!(ids(&page), vec![2, 3]);
    }

    #[tokio::test]
    async fn staff_picks_filter_by_root_category() {
        let query = DiscoveryQuery::new()
            .with_staff_picks(true)
            .with_category(Some(CategoryId::new(12)));
        let page = catalog().fetch_projects(&query).await.unwrap();
        assert_eq!(ids(&page), vec![2]);
    }

    #[tokio::test]
    async fn per_page_truncates_results() {
        let page = catalog()
            .fetch_projects(&DiscoveryQuery::new().with_per_page(2))
            .await
            .unwrap();
        assert_eq!(ids(&page), vec![1, 2]);
    }

    #[tokio::test]
    async fn injected_failures_are_consumed_one_per_query() {
        let catalog = catalog();
        catalog.fail_next_queries(2);
        let query = DiscoveryQuery::new();

        assert!(catalog.fetch_projects(&query).await.is_err());
        assert!(catalog.fetch_projects(&query).await.is_err());
        assert!(catalog.fetch_projects(&query).await.is_ok());
        assert_eq!(catalog.queries().await.len(), 3);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let catalog = catalog();
        let result = catalog.fetch_category(CategoryId::new(99)).await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(catalog.category_fetch_count(), 1);
    }

    #[tokio::test]
    async fn user_updates_are_stored() {
        let catalog = catalog();
        let user = User::new(UserId::new(5), "Grace").with_games_newsletter(true);
        let stored = catalog.update_user_settings(&user).await.unwrap();

        assert_eq!(stored, user);
        assert_eq!(catalog.stored_user(UserId::new(5)).await, Some(user));
    }

    #[tokio::test]
    async fn user_update_failure_is_a_transport_error() {
        let catalog = catalog();
        catalog.set_user_update_failure(true);
        let result = catalog
            .update_user_settings(&User::new(UserId::new(5), "Grace"))
            .await;
        assert!(matches!(result, Err(CatalogError::Transport(_))));
    }
}

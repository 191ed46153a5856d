//! Priority merge of recommendation sources.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Category, Project};

/// The "more like this" shelf: recommended projects and the root
/// category they are shown under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub projects: Vec<Project>,
    pub root_category: Category,
}

/// Concatenates sources in the order given, keeping the first occurrence
/// of each project id, and stops once `limit` projects are collected.
pub fn merge_unique<I>(sources: I, limit: usize) -> Vec<Project>
where
    I: IntoIterator<Item = Vec<Project>>,
{
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .flatten()
        .filter(|project| seen.insert(project.id))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProjectId;
    use proptest::prelude::*;

    fn projects(ids: &[u64]) -> Vec<Project> {
        ids.iter()
            .map(|id| Project::new(ProjectId::new(*id), format!("Project {}", id)))
            .collect()
    }

    fn ids(projects: &[Project]) -> Vec<u64> {
        projects.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn earlier_sources_win() {
        let merged = merge_unique(vec![projects(&[1, 2]), projects(&[2, 3]), projects(&[4])], 3);
        assert_eq!(ids(&merged), vec![1, 2, 3]);
    }

    #[test]
    fn later_sources_backfill_when_earlier_are_sparse() {
        let merged = merge_unique(vec![projects(&[]), projects(&[]), projects(&[7, 8, 9, 10])], 3);
        assert_eq!(ids(&merged), vec![7, 8, 9]);
    }

    #[test]
    fn duplicates_within_a_source_collapse() {
        let merged = merge_unique(vec![projects(&[5, 5, 5]), projects(&[6])], 3);
        assert_eq!(ids(&merged), vec![5, 6]);
    }

    #[test]
    fn empty_sources_give_empty_shelf() {
        let merged = merge_unique(Vec::<Vec<Project>>::new(), 3);
        assert!(merged.is_empty());
    }

    proptest! {
        #[test]
        fn merged_list_is_bounded_and_unique(
            sources in prop::collection::vec(prop::collection::vec(0u64..20, 0..8), 0..4),
            limit in 0usize..6,
        ) {
            let sources: Vec<Vec<Project>> = sources.iter().map(|ids| projects(ids)).collect();
            let merged = merge_unique(sources.clone(), limit);

            prop_assert!(merged.len() <= limit);
            let unique: HashSet<ProjectId> = merged.iter().map(|p| p.id).collect();
            prop_assert_eq!(unique.len(), merged.len());

            let expected: Vec<ProjectId> = {
                let mut seen = HashSet::new();
                sources.iter().flatten().map(|p| p.id).filter(|id| seen.insert(*id)).take(limit).collect()
            };
            prop_assert_eq!(merged.iter().map(|p| p.id).collect::<Vec<_>>(), expected);
        }
    }
}

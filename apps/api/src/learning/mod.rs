//! Learning paths, the resource catalog, and resource popularity.

pub mod handlers;

use std::collections::HashMap;

use serde::Serialize;

use crate::fixtures::models::{LearningPath, LearningResource};
use crate::fixtures::{compare_ids, contains_term, search_term};

pub const DEFAULT_TOP_RESOURCES: usize = 3;

/// A resource and the number of learning paths that include it.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceUsage {
    pub resource: LearningResource,
    pub path_count: usize,
}

/// `search` matches a resource title, a skill a resource addresses, or a
/// target skill of the path.
pub fn filter_learning_paths<'a>(
    paths: &'a [LearningPath],
    employee_id: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a LearningPath> {
    let term = search_term(search);
    let employee_id = employee_id.map(str::trim).filter(|id| !id.is_empty());

    paths
        .iter()
        .filter(|p| employee_id.map_or(true, |id| p.employee_id == id))
        .filter(|p| match &term {
            None => true,
            Some(t) => {
                p.resources.iter().any(|r| {
                    contains_term(&r.title, t)
                        || r.skills_addressed.iter().any(|s| contains_term(s, t))
                }) || p.target_skills.iter().any(|s| contains_term(s, t))
            }
        })
        .collect()
}

/// Catalog filter. `skill` matches a skill the resource addresses exactly
/// (case-insensitive); `search` matches title, provider or any addressed skill.
pub fn filter_resources<'a>(
    resources: &'a [LearningResource],
    skill: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a LearningResource> {
    let term = search_term(search);
    let skill = skill.map(str::trim).filter(|s| !s.is_empty());

    resources
        .iter()
        .filter(|r| {
            skill.map_or(true, |skill| {
                r.skills_addressed.iter().any(|s| s.eq_ignore_ascii_case(skill))
            })
        })
        .filter(|r| match &term {
            None => true,
            Some(t) => {
                contains_term(&r.title, t)
                    || contains_term(&r.provider, t)
                    || r.skills_addressed.iter().any(|s| contains_term(s, t))
            }
        })
        .collect()
}

/// Resources ranked by how many paths include them; ties go to the lower id.
/// The resource record is taken from the first path that lists it.
pub fn top_resources(paths: &[LearningPath], limit: usize) -> Vec<ResourceUsage> {
    let mut usage: HashMap<&str, ResourceUsage> = HashMap::new();
    for path in paths {
        for resource in &path.resources {
            usage
                .entry(resource.id.as_str())
                .or_insert_with(|| ResourceUsage {
                    resource: resource.clone(),
                    path_count: 0,
                })
                .path_count += 1;
        }
    }

    let mut ranked: Vec<ResourceUsage> = usage.into_values().collect();
    ranked.sort_by(|a, b| {
        b.path_count
            .cmp(&a.path_count)
            .then_with(|| compare_ids(&a.resource.id, &b.resource.id))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::store::FixtureStore;

    #[test]
    fn test_filter_by_employee() {
        let store = FixtureStore::builtin().unwrap();
        let paths = filter_learning_paths(store.learning_paths(), Some("2"), None);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].employee_id, "2");
    }

    #[test]
    fn test_search_matches_target_skill_and_resource_title() {
        let store = FixtureStore::builtin().unwrap();

        let by_skill = filter_learning_paths(store.learning_paths(), None, Some("accessib"));
        assert_eq!(by_skill.len(), 1);
        assert_eq!(by_skill[0].employee_id, "2");

        let by_title = filter_learning_paths(store.learning_paths(), None, Some("complete developer"));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].employee_id, "1");

        let none = filter_learning_paths(store.learning_paths(), None, Some("kubernetes"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_blank_search_keeps_all() {
        let store = FixtureStore::builtin().unwrap();
        let all = filter_learning_paths(store.learning_paths(), Some(""), Some(" "));
        assert_eq!(all.len(), store.learning_paths().len());

        let padded = filter_learning_paths(store.learning_paths(), Some(" "), None);
        assert_eq!(padded.len(), store.learning_paths().len());
    }

    #[test]
    fn test_filter_resources_by_skill_and_search() {
        let store = FixtureStore::builtin().unwrap();
        let catalog = store.learning_resources();

        let python = filter_resources(catalog, Some("python"), None);
        assert!(!python.is_empty());
        assert!(python
            .iter()
            .all(|r| r.skills_addressed.iter().any(|s| s == "Python")));

        let by_provider = filter_resources(catalog, None, Some("frontend masters"));
        assert_eq!(by_provider.len(), 1);
        assert_eq!(by_provider[0].title, "Advanced React Patterns");

        assert_eq!(filter_resources(catalog, Some(" "), Some("")).len(), catalog.len());
        assert!(filter_resources(catalog, Some("Cobol"), None).is_empty());
    }

    #[test]
    fn test_top_resources_counts_and_ties() {
        let store = FixtureStore::builtin().unwrap();
        let mut paths = store.learning_paths().to_vec();
        // A third path reusing resource 8 makes it the most used.
        let mut extra = paths[1].clone();
        extra.id = "3".to_string();
        extra.resources.truncate(1);
        paths.push(extra);

        let top = top_resources(&paths, DEFAULT_TOP_RESOURCES);
        let ids: Vec<(&str, usize)> = top
            .iter()
            .map(|u| (u.resource.id.as_str(), u.path_count))
            .collect();
        assert_eq!(ids, vec![("8", 2), ("6", 1), ("7", 1)]);
    }

    #[test]
    fn test_top_resources_limit_zero() {
        let store = FixtureStore::builtin().unwrap();
        assert!(top_resources(store.learning_paths(), 0).is_empty());
    }
}

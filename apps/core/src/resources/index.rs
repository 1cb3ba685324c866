//! Resource Index - Read-only directory of support organisations.
//!
//! Loaded once (from the embedded JSON or a configured file) and then only
//! queried. Searches are plain filters: results keep directory order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};
use url::Url;

use super::model::{CategoryFilter, Resource};
use crate::config::TriageConfig;
use crate::error::AppError;

const EMBEDDED_RESOURCES: &str = include_str!("../../data/resources.json");

// NOTE: expect() is acceptable here: the embedded file is covered by tests
static STANDARD_INDEX: LazyLock<ResourceIndex> = LazyLock::new(|| {
    ResourceIndex::from_json(EMBEDDED_RESOURCES).expect("Invalid embedded resource directory")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIndex {
    resources: Vec<Resource>,
}

impl ResourceIndex {
    /// The built-in Kenyan resource directory.
    pub fn standard() -> &'static ResourceIndex {
        &STANDARD_INDEX
    }

    /// Builds an index from a list, checking ids and website URLs.
    pub fn new(resources: Vec<Resource>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for resource in &resources {
            if resource.id.trim().is_empty() {
                return Err(AppError::ResourceData("Resource with empty id".to_string()));
            }
            if !seen.insert(resource.id.as_str()) {
                return Err(AppError::ResourceData(format!(
                    "Duplicate resource id: {}",
                    resource.id
                )));
            }
            if let Some(website) = &resource.contact.website {
                Url::parse(website)?;
            }
        }

        Ok(Self { resources })
    }

    /// Parses a JSON array of resources.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let resources: Vec<Resource> = serde_json::from_str(json)?;
        Self::new(resources)
    }

    /// Reads a JSON resource file.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        let index = Self::from_json(&json)?;
        info!(path = %path.display(), count = index.len(), "Loaded resource directory");
        Ok(index)
    }

    /// The configured directory file, or the built-in one when none is set.
    pub fn load(config: &TriageConfig) -> Result<Self, AppError> {
        match &config.resources_path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::standard().clone()),
        }
    }

    pub fn all(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Resources flagged as emergency services, in directory order.
    pub fn emergency(&self) -> Vec<&Resource> {
        self.resources.iter().filter(|r| r.is_emergency).collect()
    }

    /// Resources whose name or description (either language) contains `query`,
    /// ignoring case, and whose category passes `filter`. A blank query matches
    /// every resource. Never fails; no match gives an empty list.
    pub fn search(&self, query: &str, filter: CategoryFilter) -> Vec<&Resource> {
        let needle = if query.trim().is_empty() {
            String::new()
        } else {
            query.to_lowercase()
        };
        let results: Vec<&Resource> = self
            .resources
            .iter()
            .filter(|r| filter.admits(r.category))
            .filter(|r| r.matches_lowercase(&needle))
            .collect();

        debug!(
            query_chars = needle.chars().count(),
            filter = ?filter,
            results = results.len(),
            "Resource search"
        );
        results
    }

    /// Same as [`search`](Self::search) with the category given as UI text.
    pub fn search_str(&self, query: &str, category: &str) -> Vec<&Resource> {
        self.search(query, CategoryFilter::parse(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::model::Category;

    #[test]
    fn test_embedded_directory_loads() {
        let index = ResourceIndex::standard();
        assert_eq!(index.len(), 6);
        assert_eq!(index.get("2").unwrap().name.primary, "Befrienders Kenya");
    }

    #[test]
    fn test_empty_query_all_categories_is_full_set() {
        let index = ResourceIndex::standard();
        let ids: Vec<&str> = index.search("", CategoryFilter::All).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_crisis_filter() {
        let index = ResourceIndex::standard();
        let ids: Vec<&str> = index
            .search("", Category::Crisis.into())
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_alternate_language_match() {
        let index = ResourceIndex::standard();
        let results = index.search("USHAURI", CategoryFilter::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "4");
    }

    #[test]
    fn test_no_match_is_empty() {
        let index = ResourceIndex::standard();
        assert!(index.search("zzzz-no-such-text", CategoryFilter::All).is_empty());
        assert!(index.search("", Category::Legal.into()).is_empty());
    }

    #[test]
    fn test_unknown_category_text_means_all() {
        let index = ResourceIndex::standard();
        assert_eq!(index.search_str("", "spa-days").len(), 6);
    }

    #[test]
    fn test_emergency() {
        let index = ResourceIndex::standard();
        let ids: Vec<&str> = index.emergency().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut resources = ResourceIndex::standard().all().to_vec();
        resources.push(resources[0].clone());
        assert!(matches!(ResourceIndex::new(resources), Err(AppError::ResourceData(_))));
    }

    #[test]
    fn test_bad_website_rejected() {
        let mut resources = ResourceIndex::standard().all().to_vec();
        resources[0].contact.website = Some("not a url".to_string());
        assert!(matches!(ResourceIndex::new(resources), Err(AppError::ResourceData(_))));
    }
}

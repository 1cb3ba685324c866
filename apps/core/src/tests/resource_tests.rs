//! Resource Module Tests
//!
//! Directory search semantics and loading directories from disk.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::config::TriageConfig;
use crate::error::AppError;
use crate::resources::{Category, CategoryFilter, ResourceIndex};

fn ids(results: &[&crate::resources::Resource]) -> Vec<String> {
    results.iter().map(|r| r.id.clone()).collect()
}

const CUSTOM_DIRECTORY: &str = r#"[
  {
    "id": "a",
    "name": {"primary": "Campus Peer Line", "alternate": "Simu ya Wenzako"},
    "description": {"primary": "Students listening to students", "alternate": "Wanafunzi wanasikilizana"},
    "category": "community",
    "contact": {"phone": "0700 000 000"},
    "isFree": true,
    "languages": ["English", "Kiswahili"],
    "targetGroup": ["Students"]
  }
]"#;

#[cfg(test)]
mod search_tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_full_set_in_order() {
        let index = ResourceIndex::standard();
        let results = index.search("", CategoryFilter::All);
        assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(results.len(), index.all().len());
    }

    #[test]
    fn test_crisis_category_scenario() {
        let index = ResourceIndex::standard();
        let results = index.search_str("", "crisis");
        assert_eq!(ids(&results), vec!["1", "2"]);
        assert!(results.iter().all(|r| r.category == Category::Crisis));
    }

    #[test]
    fn test_unmatched_query_is_empty_not_error() {
        let index = ResourceIndex::standard();
        let queries = vec!["xyzzy", "no such organisation", "🙂"];
        for query in queries {
            assert!(
                index.search(query, CategoryFilter::All).is_empty(),
                "Expected no results for '{}'",
                query
            );
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let index = ResourceIndex::standard();
        let lower = ids(&index.search("befrienders", CategoryFilter::All));
        let upper = ids(&index.search("BEFRIENDERS", CategoryFilter::All));
        assert_eq!(lower, vec!["2"]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_query_whitespace_is_part_of_the_substring() {
        let index = ResourceIndex::standard();
        assert_eq!(ids(&index.search("befrienders kenya", CategoryFilter::All)), vec!["2"]);
        assert!(
            index.search("befrienders kenya ", CategoryFilter::All).is_empty(),
            "Trailing space must stay part of the query"
        );
    }

    #[test]
    fn test_whitespace_query_behaves_as_empty() {
        let index = ResourceIndex::standard();
        assert_eq!(index.search("   ", CategoryFilter::All).len(), 6);
    }

    #[test]
    fn test_query_and_category_combine() {
        let index = ResourceIndex::standard();
        let results = index.search("kenya", Category::Crisis.into());
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.category == Category::Crisis));
    }

    #[test]
    fn test_search_is_read_only() {
        let index = ResourceIndex::standard();
        let before = index.clone();
        let _ = index.search("ushauri", CategoryFilter::All);
        let _ = index.search("", Category::Education.into());
        assert_eq!(index, &before);
    }
}

#[cfg(test)]
mod loading_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CUSTOM_DIRECTORY.as_bytes()).unwrap();

        let index = ResourceIndex::from_path(file.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(ids(&index.search("wenzako", CategoryFilter::All)), vec!["a"]);
        assert!(index.emergency().is_empty());
    }

    #[test]
    fn test_load_uses_configured_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CUSTOM_DIRECTORY.as_bytes()).unwrap();

        let config = TriageConfig {
            resources_path: Some(file.path().to_path_buf()),
            ..TriageConfig::default()
        };
        assert_eq!(ResourceIndex::load(&config).unwrap().len(), 1);
        assert_eq!(ResourceIndex::load(&TriageConfig::default()).unwrap().len(), 6);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResourceIndex::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_resource_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": \"1\"}]").unwrap();

        let err = ResourceIndex::from_path(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ResourceData(_)));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::AppError;
use crate::models::Bilingual;

/// Kind of support a resource offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Crisis,
    Counseling,
    Community,
    Education,
    Legal,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Crisis,
        Category::Counseling,
        Category::Community,
        Category::Education,
        Category::Legal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Crisis => "crisis",
            Category::Counseling => "counseling",
            Category::Community => "community",
            Category::Education => "education",
            Category::Legal => "legal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::Validation(format!("Unknown resource category: {}", s)))
    }
}

/// Category restriction applied to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses a filter value from the UI. Unknown values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("all") {
            return CategoryFilter::All;
        }
        match value.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => {
                debug!(value, "Unknown category filter, using all");
                CategoryFilter::All
            }
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

/// A support organisation listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: Bilingual,
    pub description: Bilingual,
    pub category: Category,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub target_group: Vec<String>,
}

impl Resource {
    /// Every searchable text field, both languages.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        self.name.texts().into_iter().chain(self.description.texts())
    }

    /// Whether `needle` (already lowercased) occurs in any text field.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .text_fields()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

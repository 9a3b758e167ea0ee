use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, SelectionError};
use crate::filters::FilterSpec;
use crate::models::InterviewRecord;
use crate::utils::safe_open_file;

/// One job family with its ordered subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category: String,
    pub subcategories: Vec<String>,
}

impl CategoryEntry {
    pub fn new(category: &str, subcategories: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered category → subcategory mapping
///
/// Serialized as a JSON array so the display order of categories survives a
/// round trip through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    entries: Vec<CategoryEntry>,
}

impl Taxonomy {
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        Self { entries }
    }

    /// The four job families the catalog ships with
    pub fn builtin() -> Self {
        Self::new(vec![
            CategoryEntry::new("开发", &["前端", "后端", "算法"]),
            CategoryEntry::new("产品", &["策划", "运营"]),
            CategoryEntry::new("设计", &["交互", "UI"]),
            CategoryEntry::new("测试", &["测试"]),
        ])
    }

    /// Load a taxonomy from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = safe_open_file(path)?;
        let taxonomy: Taxonomy = serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse taxonomy file: {}", path.display()))?;
        log::debug!(
            "Loaded taxonomy with {} categories from {}",
            taxonomy.entries.len(),
            path.display()
        );
        Ok(taxonomy)
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    /// Children of `category`, or `None` for an unknown category
    pub fn subcategories(&self, category: &str) -> Option<&[String]> {
        self.entries.iter().find(|e| e.category == category).map(|e| e.subcategories.as_slice())
    }

    pub fn contains(&self, category: &str, subcategory: &str) -> bool {
        self.subcategories(category).is_some_and(|subs| subs.iter().any(|s| s == subcategory))
    }

    /// Check that a record's subcategory belongs to its category
    pub fn check_record(&self, record: &InterviewRecord) -> Result<(), CatalogError> {
        match self.subcategories(&record.category) {
            None => Err(CatalogError::UnknownCategory {
                id: record.id.clone(),
                category: record.category.clone(),
            }),
            Some(subs) if !subs.contains(&record.subcategory) => {
                Err(CatalogError::SubcategoryMismatch {
                    id: record.id.clone(),
                    category: record.category.clone(),
                    subcategory: record.subcategory.clone(),
                })
            }
            Some(_) => Ok(()),
        }
    }

    /// Check the category/subcategory pairing of a filter selection
    ///
    /// The filter engine applies a lone subcategory literally; this is the check a
    /// front-end runs before submitting one.
    pub fn validate_selection(&self, spec: &FilterSpec) -> Result<(), SelectionError> {
        match (&spec.category, &spec.subcategory) {
            (None, None) => Ok(()),
            (None, Some(subcategory)) => {
                Err(SelectionError::SubcategoryWithoutCategory(subcategory.clone()))
            }
            (Some(category), subcategory) => {
                let subs = self
                    .subcategories(category)
                    .ok_or_else(|| SelectionError::UnknownCategory(category.clone()))?;
                match subcategory {
                    Some(sub) if !subs.contains(sub) => Err(SelectionError::SubcategoryMismatch {
                        category: category.clone(),
                        subcategory: sub.clone(),
                    }),
                    _ => Ok(()),
                }
            }
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

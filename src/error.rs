//! Typed errors for catalog ingestion and filter-selection validation.
//!
//! The engine itself (filtering, aggregation) cannot fail. These errors are raised
//! at the edges: when records enter a [`Catalog`](crate::catalog::Catalog), when
//! the presentation layer checks a category/subcategory selection against the
//! configured [`Taxonomy`](crate::catalog::Taxonomy), or when the coordinator is
//! asked about a record it does not hold. Application code wraps them in
//! `anyhow::Error` with context.

use thiserror::Error;

/// Data-integrity violations detected while ingesting records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("difficulty {0} is outside the range 1-9")]
    DifficultyOutOfRange(i64),

    #[error("difficulty {0} is not a whole number in the range 1-9")]
    InvalidDifficulty(String),

    #[error("record '{id}' has no sources")]
    EmptySources { id: String },

    #[error("record '{id}' has an empty '{field}' field")]
    EmptyField { id: String, field: &'static str },

    #[error("duplicate record id '{0}'")]
    DuplicateId(String),

    #[error("record '{id}' uses unknown category '{category}'")]
    UnknownCategory { id: String, category: String },

    #[error("record '{id}': subcategory '{subcategory}' does not belong to category '{category}'")]
    SubcategoryMismatch { id: String, category: String, subcategory: String },
}

/// Category/subcategory selections the presentation layer should not submit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("subcategory '{0}' is selected without a category")]
    SubcategoryWithoutCategory(String),

    #[error("subcategory '{subcategory}' does not belong to category '{category}'")]
    SubcategoryMismatch { category: String, subcategory: String },
}

/// Rejected coordinator actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("no record with id '{0}'")]
    UnknownRecord(String),
}

//! Interview Catalog - filter, chart and browse a catalog of interview questions
//!
//! This library provides the engine behind a question browser:
//!
//! - Loading and validating a JSONL question catalog
//! - A multi-field filter predicate with stable ordering
//! - A fixed nine-bucket difficulty histogram
//! - Filter-state transitions (toggle-off, category cascade, clear-all)
//! - A session coordinator and a stubbed analysis provider
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use chrono::Utc;
//! use interview_catalog::{FilterSpec, aggregate, apply_filters, load_catalog, parse_query};
//!
//! let catalog = load_catalog(Path::new("catalog.jsonl"), None)?;
//! let spec: FilterSpec = parse_query("type:campus time:one_month")?;
//! let matches = apply_filters(catalog.into_records(), &spec, Utc::now());
//! let buckets = aggregate(&matches);
//! println!("{} matches, {} at difficulty 5", matches.len(), buckets[4].count);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod browser;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use catalog::{Catalog, Taxonomy, load_catalog};
pub use filters::{FilterAction, FilterSpec, apply_filters, parse_query};
pub use models::{Difficulty, InterviewRecord};
pub use stats::{HistogramScope, aggregate};
pub use utils::format_path_with_tilde;

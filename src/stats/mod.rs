//! Derived statistics over records: the difficulty histogram and catalog totals.

pub mod histogram;
pub mod summary;

pub use histogram::{Histogram, HistogramScope, aggregate};
pub use summary::CatalogSummary;

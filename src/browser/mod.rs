//! Browsing session state.
//!
//! [`Browser`] is the one place mutable UI state lives: the active
//! [`FilterSpec`](crate::filters::FilterSpec), the histogram scope, the selected
//! record, and whether its analysis is open. Every change goes through
//! [`Browser::dispatch`]; everything a front-end renders is derived on demand from
//! the shared, read-only [`Catalog`](crate::catalog::Catalog).
//!
//! # Example
//!
//! ```rust
//! # use std::sync::Arc;
//! # use chrono::Utc;
//! # use interview_catalog::browser::{Action, Browser};
//! # use interview_catalog::catalog::Catalog;
//! # use interview_catalog::filters::FilterAction;
//! # use interview_catalog::models::JobType;
//! let mut browser = Browser::new(Arc::new(Catalog::default()));
//! browser.dispatch(Action::Filter(FilterAction::SelectJobType(JobType::Campus)))?;
//! assert_eq!(browser.result_count(Utc::now()), 0);
//! assert_eq!(browser.histogram(Utc::now()).buckets.len(), 9);
//! # Ok::<(), interview_catalog::error::BrowserError>(())
//! ```

pub mod state;

pub use state::{Action, Browser};

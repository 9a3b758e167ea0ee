//! JSONL parsing for catalog files
//!
//! # Error Handling Strategy
//!
//! - **Malformed lines**: Lines that are not valid JSON records are logged through
//!   `log::warn!` and skipped, so one bad line does not discard the catalog.
//!
//! - **Catastrophic failure detection**: If >50% of lines fail to parse, or if >100
//!   consecutive errors occur, the parser returns an error.
//!
//! - **Integrity violations**: A line that parses but breaks a record invariant
//!   (difficulty outside 1-9, empty sources, blank text) fails the load immediately
//!   with a [`CatalogError`](crate::error::CatalogError) in the error chain.

pub mod catalog_file;
pub mod deserializers;
pub mod record_line;

pub use catalog_file::parse_catalog_file;
pub use record_line::RecordLine;

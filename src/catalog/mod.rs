//! The record store: an immutable, validated, ordered collection of interview
//! records, plus the category taxonomy it is checked against.

pub mod loader;
pub mod store;
pub mod taxonomy;

pub use loader::load_catalog;
pub use store::Catalog;
pub use taxonomy::{CategoryEntry, Taxonomy};

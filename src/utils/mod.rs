pub mod environment;
pub mod files;
pub mod timestamps;

pub use environment::{resolve_catalog_path, resolve_taxonomy_path};
pub use files::{format_path_with_tilde, safe_open_file, validate_file_size};
pub use timestamps::format_timestamp;

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

/// Environment variable naming the catalog file or directory
pub const CATALOG_ENV_VAR: &str = "INTERVIEW_CATALOG";

/// Environment variable naming the taxonomy JSON file
pub const TAXONOMY_ENV_VAR: &str = "INTERVIEW_TAXONOMY";

const APP_DIR_NAME: &str = "interview-catalog";
const DEFAULT_CATALOG_FILE: &str = "catalog.jsonl";

/// Resolve the catalog location
///
/// Precedence: explicit path, then `$INTERVIEW_CATALOG`, then
/// `<data dir>/interview-catalog/catalog.jsonl`.
pub fn resolve_catalog_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(path) = env::var_os(CATALOG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow!("No catalog given: pass --catalog or set {}", CATALOG_ENV_VAR)
    })?;
    Ok(data_dir.join(APP_DIR_NAME).join(DEFAULT_CATALOG_FILE))
}

/// Resolve the taxonomy file, if one is configured
pub fn resolve_taxonomy_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| env::var_os(TAXONOMY_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from))
}

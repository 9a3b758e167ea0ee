//! Catalog loading from a JSONL file or a directory of JSONL files.
//!
//! # Error Handling Strategy
//!
//! - **Line-level errors**: handled by [`parse_catalog_file`], which skips malformed
//!   lines and applies its own failure thresholds
//! - **Integrity errors**: a record breaking an invariant aborts the load, whichever
//!   file it is in
//! - **File-level errors** (directory mode): an unreadable file is logged and
//!   skipped; the load fails if more than half of the files fail
//! - **Summary**: record and file counts are logged at `info`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use super::store::Catalog;
use super::taxonomy::Taxonomy;
use crate::error::CatalogError;
use crate::models::InterviewRecord;
use crate::parsers::parse_catalog_file;

/// Maximum number of catalog files read from one directory
const MAX_CATALOG_FILES: usize = 1000;

const CATALOG_EXTENSION: &str = "jsonl";

/// Load a catalog from `path`
///
/// `path` may be a single JSONL file or a directory whose `*.jsonl` files are read
/// in file-name order and concatenated. When `taxonomy` is given, every record's
/// subcategory must belong to its category.
///
/// # Errors
///
/// Returns an error if:
/// - `path` does not exist
/// - A file exceeds the size limit or its parse-failure thresholds
/// - Any record violates an invariant, including duplicate ids across files
/// - More than 50% of the files in a directory fail to load
pub fn load_catalog(path: &Path, taxonomy: Option<&Taxonomy>) -> Result<Catalog> {
    if !path.exists() {
        bail!("Catalog not found at {}", path.display());
    }

    let records = if path.is_dir() {
        load_directory(path)?
    } else {
        parse_catalog_file(path)?
    };

    let catalog = match taxonomy {
        Some(taxonomy) => Catalog::with_taxonomy(records, taxonomy),
        None => Catalog::new(records),
    }
    .with_context(|| format!("Invalid catalog at {}", path.display()))?;

    log::info!("Loaded {} records from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Sorted `*.jsonl` files directly inside `dir`
fn discover_catalog_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to read catalog directory: {}", dir.display()))?;
        let is_catalog = entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == CATALOG_EXTENSION);
        if !is_catalog {
            continue;
        }

        if files.len() >= MAX_CATALOG_FILES {
            bail!(
                "Too many catalog files in {} (limit {})",
                dir.display(),
                MAX_CATALOG_FILES
            );
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

fn load_directory(dir: &Path) -> Result<Vec<InterviewRecord>> {
    let files = discover_catalog_files(dir)?;
    let mut records = Vec::new();
    let mut files_loaded = 0;
    let mut files_failed = 0;

    for file in &files {
        match parse_catalog_file(file) {
            Ok(mut parsed) => {
                files_loaded += 1;
                records.append(&mut parsed);
            }
            Err(e) if e.downcast_ref::<CatalogError>().is_some() => return Err(e),
            Err(e) => {
                files_failed += 1;
                log::warn!("Failed to load catalog file {}: {:#}", file.display(), e);
            }
        }
    }

    let total_files = files_loaded + files_failed;
    if total_files > 0 {
        let failure_rate = files_failed as f64 / total_files as f64;
        if failure_rate > 0.5 {
            bail!(
                "Catalog loading failed: {}/{} files failed to load ({}% failure rate)",
                files_failed,
                total_files,
                (failure_rate * 100.0) as u32
            );
        }
    } else {
        log::warn!("No .{} files found in {}", CATALOG_EXTENSION, dir.display());
    }

    log::info!(
        "Read {} records from {} ({} files loaded, {} failed)",
        records.len(),
        dir.display(),
        files_loaded,
        files_failed
    );

    Ok(records)
}

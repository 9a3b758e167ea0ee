use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::record_line::RecordLine;
use crate::models::InterviewRecord;
use crate::utils::safe_open_file;

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Parse a catalog JSONL file (one record per line)
///
/// Lines that are not valid JSON records are logged and skipped. Lines that parse
/// but break a record invariant (difficulty outside 1-9, no sources, blank fields)
/// abort the whole load: the catalog must not silently lose records the
/// histogram would otherwise count.
///
/// Returns an error if more than 50% of lines fail to parse or >100 consecutive errors
pub fn parse_catalog_file(path: &Path) -> Result<Vec<InterviewRecord>> {
    let file = safe_open_file(path)?;

    let reader = BufReader::new(file);
    let mut records = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from catalog file")?;

        if line.trim().is_empty() {
            continue;
        }

        total_lines += 1;

        match serde_json::from_str::<RecordLine>(&line) {
            Ok(raw) => {
                let record = InterviewRecord::try_from(raw).with_context(|| {
                    format!("Invalid record on line {} of {}", line_num + 1, path.display())
                })?;
                records.push(record);
                consecutive_errors = 0;
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse line {} in {}: {}",
                    line_num + 1,
                    path.display(),
                    e
                );
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in {} - file may be corrupted",
                        consecutive_errors,
                        path.display()
                    );
                }
            }
        }
    }

    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in {}: {} of {} lines failed ({:.1}%)",
                path.display(),
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        log::info!(
            "Parsed {}: {} records ({} skipped)",
            path.display(),
            records.len(),
            skipped_count
        );
    }

    Ok(records)
}

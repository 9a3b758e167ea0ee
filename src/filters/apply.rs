use chrono::{DateTime, Utc};

use super::spec::{FilterSpec, TimeRange};
use crate::models::InterviewRecord;

/// Apply a filter spec to records, keeping the input order
///
/// A record is kept when every set clause matches (AND across clauses). Within the
/// companies clause a record matches any selected company (OR). Unset clauses are
/// vacuously true, so an empty spec returns the input unchanged.
///
/// `now` anchors the time-range clause; pass the same value across a render so the
/// list and the histogram agree.
pub fn apply_filters(
    records: Vec<InterviewRecord>,
    spec: &FilterSpec,
    now: DateTime<Utc>,
) -> Vec<InterviewRecord> {
    if spec.is_empty() {
        return records;
    }

    let search = spec.active_search_term().map(str::to_lowercase);
    records.into_iter().filter(|record| evaluate(record, spec, search.as_deref(), now)).collect()
}

/// Borrowing variant of [`apply_filters`] for callers that keep the store
pub fn filter_refs<'a>(
    records: &'a [InterviewRecord],
    spec: &FilterSpec,
    now: DateTime<Utc>,
) -> Vec<&'a InterviewRecord> {
    let search = spec.active_search_term().map(str::to_lowercase);
    records.iter().filter(|record| evaluate(record, spec, search.as_deref(), now)).collect()
}

/// Evaluate a spec against a single record
pub fn matches(record: &InterviewRecord, spec: &FilterSpec, now: DateTime<Utc>) -> bool {
    let search = spec.active_search_term().map(str::to_lowercase);
    evaluate(record, spec, search.as_deref(), now)
}

/// Clause conjunction; `search` is the lowercased term, untrimmed
fn evaluate(
    record: &InterviewRecord,
    spec: &FilterSpec,
    search: Option<&str>,
    now: DateTime<Utc>,
) -> bool {
    if let Some(term) = search
        && !match_search(record, term)
    {
        return false;
    }

    if let Some(job_type) = spec.job_type
        && record.job_type != job_type
    {
        return false;
    }

    if let Some(ref category) = spec.category
        && record.category != *category
    {
        return false;
    }

    if let Some(ref subcategory) = spec.subcategory
        && record.subcategory != *subcategory
    {
        return false;
    }

    if !spec.companies.is_empty() && !spec.companies.contains(&record.company) {
        return false;
    }

    if let Some(range) = spec.time_range
        && !match_time_range(record, range, now)
    {
        return false;
    }

    if let Some(difficulty) = spec.difficulty
        && record.difficulty != difficulty
    {
        return false;
    }

    true
}

/// Case-insensitive substring match against question, company or subcategory
fn match_search(record: &InterviewRecord, lower_term: &str) -> bool {
    [&record.question, &record.company, &record.subcategory]
        .iter()
        .any(|field| field.to_lowercase().contains(lower_term))
}

/// Record date within the lookback window, boundary inclusive
fn match_time_range(record: &InterviewRecord, range: TimeRange, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(record.date) <= range.lookback()
}

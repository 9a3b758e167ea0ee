//! Integration tests for filter functionality
mod common;

use std::collections::BTreeSet;

use common::{RecordBuilder, reference_now};
use interview_catalog::filters::{FilterSpec, TimeRange, apply_filters, filter_refs, parse_query};
use interview_catalog::models::{Difficulty, InterviewRecord, JobType};

fn sample_catalog() -> Vec<InterviewRecord> {
    [
        RecordBuilder::new("1").company("ByteDance").difficulty(3).age_days(3),
        RecordBuilder::new("2")
            .company("Alibaba")
            .category("开发", "后端")
            .job_type("social")
            .difficulty(7)
            .age_days(40),
        RecordBuilder::new("3")
            .company("Tencent")
            .category("产品", "运营")
            .difficulty(3)
            .age_days(200),
        RecordBuilder::new("4")
            .company("ByteDance")
            .category("开发", "算法")
            .job_type("social")
            .difficulty(9)
            .age_days(10),
        RecordBuilder::new("5")
            .company("Meituan")
            .question("Explain the event loop")
            .difficulty(4)
            .age_days(800),
    ]
    .iter()
    .map(RecordBuilder::build)
    .collect()
}

fn ids(records: &[InterviewRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

/// Keep only records satisfying `pred`, the reference result for a single clause
fn expected(records: &[InterviewRecord], pred: impl Fn(&InterviewRecord) -> bool) -> Vec<&str> {
    records.iter().filter(|&r| pred(r)).map(|r| r.id.as_str()).collect()
}

#[test]
fn test_filter_integration_identity() {
    let records = sample_catalog();
    let result = apply_filters(records.clone(), &FilterSpec::default(), reference_now());
    assert_eq!(result, records);
}

#[test]
fn test_filter_integration_single_clauses_are_ordered_subsets() {
    let records = sample_catalog();
    let now = reference_now();

    let spec = FilterSpec { job_type: Some(JobType::Social), ..FilterSpec::default() };
    assert_eq!(
        ids(&apply_filters(records.clone(), &spec, now)),
        expected(&records, |r| r.job_type == JobType::Social)
    );

    let spec = FilterSpec { category: Some("开发".to_string()), ..FilterSpec::default() };
    assert_eq!(
        ids(&apply_filters(records.clone(), &spec, now)),
        expected(&records, |r| r.category == "开发")
    );

    let spec = FilterSpec { subcategory: Some("运营".to_string()), ..FilterSpec::default() };
    assert_eq!(ids(&apply_filters(records.clone(), &spec, now)), vec!["3"]);

    let three = Difficulty::new(3).unwrap();
    let spec = FilterSpec { difficulty: Some(three), ..FilterSpec::default() };
    assert_eq!(ids(&apply_filters(records.clone(), &spec, now)), vec!["1", "3"]);

    let spec = FilterSpec { time_range: Some(TimeRange::OneMonth), ..FilterSpec::default() };
    assert_eq!(ids(&apply_filters(records.clone(), &spec, now)), vec!["1", "4"]);

    let spec = FilterSpec { search_term: Some("EVENT".to_string()), ..FilterSpec::default() };
    assert_eq!(ids(&apply_filters(records, &spec, now)), vec!["5"]);
}

#[test]
fn test_filter_integration_time_ranges_widen() {
    let records = sample_catalog();
    let counts: Vec<usize> = TimeRange::ALL
        .iter()
        .map(|range| {
            let spec = FilterSpec { time_range: Some(*range), ..FilterSpec::default() };
            apply_filters(records.clone(), &spec, reference_now()).len()
        })
        .collect();

    assert_eq!(counts, vec![2, 2, 3, 4, 4]);
}

#[test]
fn test_filter_integration_companies_scenario() {
    let records: Vec<InterviewRecord> = [
        RecordBuilder::new("1").company("B"),
        RecordBuilder::new("2").company("C"),
        RecordBuilder::new("3").company("A"),
    ]
    .iter()
    .map(RecordBuilder::build)
    .collect();

    let spec = FilterSpec {
        companies: BTreeSet::from(["A".to_string(), "B".to_string()]),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&apply_filters(records, &spec, reference_now())), vec!["1", "3"]);
}

#[test]
fn test_filter_integration_one_month_boundary_scenario() {
    let records: Vec<InterviewRecord> = [
        RecordBuilder::new("old").age_days(31),
        RecordBuilder::new("recent").age_days(29),
    ]
    .iter()
    .map(RecordBuilder::build)
    .collect();

    let spec = FilterSpec { time_range: Some(TimeRange::OneMonth), ..FilterSpec::default() };
    assert_eq!(ids(&apply_filters(records, &spec, reference_now())), vec!["recent"]);
}

#[test]
fn test_filter_integration_query_string() {
    let records = sample_catalog();
    let spec = parse_query("type:social company:ByteDance company:Alibaba time:one_year").unwrap();
    assert_eq!(ids(&apply_filters(records, &spec, reference_now())), vec!["2", "4"]);
}

#[test]
fn test_filter_integration_query_with_search_phrase() {
    let records = sample_catalog();
    let spec = parse_query("\"event loop\" difficulty:medium-1").unwrap();
    assert_eq!(ids(&apply_filters(records, &spec, reference_now())), vec!["5"]);
}

#[test]
fn test_filter_integration_no_matches() {
    let records = sample_catalog();
    let spec = parse_query("company:Nobody").unwrap();
    assert!(apply_filters(records, &spec, reference_now()).is_empty());
}

#[test]
fn test_filter_integration_borrowed_and_owned_agree() {
    let records = sample_catalog();
    let spec = parse_query("category:开发 time:two_years").unwrap();

    let borrowed: Vec<&str> =
        filter_refs(&records, &spec, reference_now()).iter().map(|r| r.id.as_str()).collect();
    let owned = apply_filters(records.clone(), &spec, reference_now());
    assert_eq!(borrowed, ids(&owned));
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{InterviewRecord, JobType, Tier};

/// Catalog-wide totals for the `stats` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub by_job_type: BTreeMap<JobType, usize>,
    /// Per category, then per subcategory
    pub by_category: BTreeMap<String, BTreeMap<String, usize>>,
    pub by_tier: BTreeMap<Tier, usize>,
    pub companies: usize,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

impl CatalogSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a InterviewRecord>,
    {
        let mut summary = CatalogSummary::default();
        let mut companies = std::collections::BTreeSet::new();

        for record in records {
            summary.total += 1;
            *summary.by_job_type.entry(record.job_type).or_default() += 1;
            *summary
                .by_category
                .entry(record.category.clone())
                .or_default()
                .entry(record.subcategory.clone())
                .or_default() += 1;
            *summary.by_tier.entry(record.difficulty.tier()).or_default() += 1;
            companies.insert(record.company.as_str());

            summary.oldest = Some(summary.oldest.map_or(record.date, |d| d.min(record.date)));
            summary.newest = Some(summary.newest.map_or(record.date, |d| d.max(record.date)));
        }

        summary.companies = companies.len();
        summary
    }

    pub fn category_total(&self, category: &str) -> usize {
        self.by_category.get(category).map(|subs| subs.values().sum()).unwrap_or(0)
    }
}

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, JobType};

/// Lookback window relative to the reference time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    TwoWeeks,
    OneMonth,
    HalfYear,
    OneYear,
    TwoYears,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::TwoWeeks,
        TimeRange::OneMonth,
        TimeRange::HalfYear,
        TimeRange::OneYear,
        TimeRange::TwoYears,
    ];

    pub fn days(self) -> i64 {
        match self {
            TimeRange::TwoWeeks => 14,
            TimeRange::OneMonth => 30,
            TimeRange::HalfYear => 182,
            TimeRange::OneYear => 365,
            TimeRange::TwoYears => 730,
        }
    }

    pub fn lookback(self) -> Duration {
        Duration::days(self.days())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::TwoWeeks => "two_weeks",
            TimeRange::OneMonth => "one_month",
            TimeRange::HalfYear => "half_year",
            TimeRange::OneYear => "one_year",
            TimeRange::TwoYears => "two_years",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        TimeRange::ALL.into_iter().find(|r| r.as_str() == normalized).ok_or_else(|| {
            format!(
                "Invalid time range: '{}' (valid: two_weeks, one_month, half_year, one_year, two_years)",
                s
            )
        })
    }
}

/// Individually removable parts of a [`FilterSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    JobType,
    Category,
    Subcategory,
    Companies,
    TimeRange,
    Difficulty,
    Search,
}

/// The user's current constraints on the record list
///
/// Every clause is optional; an all-default spec matches everything. The engine
/// only reads a spec. Changes go through [`FilterSpec::apply`] so the transition
/// rules (toggle-off, category cascade) hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub job_type: Option<JobType>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub companies: BTreeSet<String>,
    pub time_range: Option<TimeRange>,
    pub difficulty: Option<Difficulty>,
    pub search_term: Option<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no clause would constrain the result
    pub fn is_empty(&self) -> bool {
        !self.has_active_filters() && self.active_search_term().is_none()
    }

    /// True when any selectable filter is set
    ///
    /// The free-text search is not counted: it lives in its own input and is not
    /// shown among the removable filter chips.
    pub fn has_active_filters(&self) -> bool {
        self.job_type.is_some()
            || self.category.is_some()
            || self.subcategory.is_some()
            || !self.companies.is_empty()
            || self.time_range.is_some()
            || self.difficulty.is_some()
    }

    /// The search term as typed, if set and not blank
    ///
    /// Trimming only decides whether the clause is active; surrounding spaces are
    /// part of the matched text.
    pub fn active_search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.trim().is_empty())
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, DifficultyBucket, InterviewRecord};

/// Which record set the difficulty histogram is computed over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistogramScope {
    /// The whole catalog, ignoring filters: the graph always shows total shape
    Catalog,
    /// The currently matching records: the graph follows the active query
    #[default]
    Matches,
}

impl HistogramScope {
    pub fn as_str(self) -> &'static str {
        match self {
            HistogramScope::Catalog => "catalog",
            HistogramScope::Matches => "matches",
        }
    }
}

impl fmt::Display for HistogramScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistogramScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "catalog" | "all" => Ok(HistogramScope::Catalog),
            "matches" | "filtered" => Ok(HistogramScope::Matches),
            _ => Err(format!("Invalid histogram scope: '{}' (must be 'catalog' or 'matches')", s)),
        }
    }
}

/// Count records per difficulty level
///
/// Always returns nine buckets ordered 1..=9, zero counts included, so renderers
/// can rely on a fixed-length layout.
pub fn aggregate<'a, I>(records: I) -> [DifficultyBucket; Difficulty::LEVELS]
where
    I: IntoIterator<Item = &'a InterviewRecord>,
{
    let mut counts = [0usize; Difficulty::LEVELS];
    for record in records {
        counts[record.difficulty.index()] += 1;
    }

    std::array::from_fn(|i| DifficultyBucket::new(Difficulty::from_index(i), counts[i]))
}

/// Aggregated difficulty distribution with helpers for bar rendering
///
/// Bucket `i` always holds difficulty `i + 1`; deserialization rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistogramRepr")]
pub struct Histogram {
    pub scope: HistogramScope,
    pub buckets: [DifficultyBucket; Difficulty::LEVELS],
}

#[derive(Deserialize)]
struct HistogramRepr {
    scope: HistogramScope,
    buckets: [DifficultyBucket; Difficulty::LEVELS],
}

impl TryFrom<HistogramRepr> for Histogram {
    type Error = String;

    fn try_from(repr: HistogramRepr) -> Result<Self, Self::Error> {
        if let Some((position, bucket)) =
            repr.buckets.iter().enumerate().find(|(i, b)| b.difficulty.index() != *i)
        {
            return Err(format!(
                "bucket {} holds difficulty {}, expected {}",
                position,
                bucket.difficulty,
                position + 1
            ));
        }
        Ok(Histogram { scope: repr.scope, buckets: repr.buckets })
    }
}

impl Histogram {
    pub fn from_records<'a, I>(records: I, scope: HistogramScope) -> Self
    where
        I: IntoIterator<Item = &'a InterviewRecord>,
    {
        Self { scope, buckets: aggregate(records) }
    }

    pub fn count_for(&self, difficulty: Difficulty) -> usize {
        self.buckets[difficulty.index()].count
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Bar height relative to the tallest bucket, in `0.0..=1.0`
    pub fn bar_fraction(&self, difficulty: Difficulty) -> f64 {
        let max = self.max_count();
        if max == 0 { 0.0 } else { self.count_for(difficulty) as f64 / max as f64 }
    }
}

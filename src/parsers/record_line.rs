use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Number;

use crate::error::CatalogError;
use crate::models::{Difficulty, InterviewRecord, JobType, Platform, Source};

/// One line of a catalog JSONL file, before integrity checks
///
/// Looser than [`InterviewRecord`]: difficulty is kept as a raw JSON number, `type` is
/// accepted for `jobType`, and a bare `source` platform may stand in for `sources`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLine {
    pub id: String,
    pub question: String,
    pub company: String,
    #[serde(default)]
    pub post: Option<String>,
    pub category: String,
    pub subcategory: String,
    #[serde(alias = "type")]
    pub job_type: JobType,
    #[serde(deserialize_with = "super::deserializers::deserialize_raw_difficulty")]
    pub difficulty: Number,
    #[serde(default)]
    pub asked_count: u32,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub source: Option<Platform>,
    #[serde(deserialize_with = "super::deserializers::deserialize_timestamp")]
    pub date: DateTime<Utc>,
}

/// Whole numbers (`12`, `12.0`) go through the range check; anything else is rejected
fn difficulty_from_number(raw: &Number) -> Result<Difficulty, CatalogError> {
    if let Some(value) = raw.as_i64() {
        return Difficulty::new(value);
    }
    match raw.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            Difficulty::new(value as i64)
        }
        _ => Err(CatalogError::InvalidDifficulty(raw.to_string())),
    }
}

impl TryFrom<RecordLine> for InterviewRecord {
    type Error = CatalogError;

    fn try_from(line: RecordLine) -> Result<Self, Self::Error> {
        let difficulty = difficulty_from_number(&line.difficulty)?;

        let mut sources = line.sources;
        if let Some(platform) = line.source
            && !sources.iter().any(|s| s.platform == platform)
        {
            sources.push(Source::new(platform, String::new()));
        }

        let record = InterviewRecord {
            id: line.id,
            question: line.question,
            company: line.company,
            post: line.post,
            category: line.category,
            subcategory: line.subcategory,
            job_type: line.job_type,
            difficulty,
            asked_count: line.asked_count,
            sources,
            date: line.date,
        };
        record.validate()?;
        Ok(record)
    }
}

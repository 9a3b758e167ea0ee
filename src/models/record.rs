use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use crate::error::CatalogError;

/// Recruiting channel a question was reported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    /// New-graduate recruiting
    Campus,
    /// Experienced-hire recruiting
    Social,
}

impl JobType {
    pub const ALL: [JobType; 2] = [JobType::Campus, JobType::Social];

    pub fn as_str(self) -> &'static str {
        match self {
            JobType::Campus => "campus",
            JobType::Social => "social",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "campus" => Ok(JobType::Campus),
            "social" => Ok(JobType::Social),
            _ => Err(format!("Invalid job type: '{}' (must be 'campus' or 'social')", s)),
        }
    }
}

/// Site a question report was collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Xiaohongshu,
    Zhihu,
    Niuke,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Zhihu => "zhihu",
            Platform::Niuke => "niuke",
        }
    }

    /// Display name of the site
    pub fn label(self) -> &'static str {
        match self {
            Platform::Xiaohongshu => "小红书",
            Platform::Zhihu => "知乎",
            Platform::Niuke => "牛客",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub platform: Platform,
    #[serde(default)]
    pub url: String,
}

impl Source {
    pub fn new(platform: Platform, url: impl Into<String>) -> Self {
        Self { platform, url: url.into() }
    }
}

/// One interview question with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub id: String,
    pub question: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub job_type: JobType,
    pub difficulty: Difficulty,
    pub asked_count: u32,
    pub sources: Vec<Source>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub date: DateTime<Utc>,
}

impl InterviewRecord {
    /// Check the per-record invariants: non-empty text fields and at least one source
    ///
    /// Difficulty needs no check here since [`Difficulty`] cannot hold an
    /// out-of-range value.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let text_fields = [
            ("id", &self.id),
            ("question", &self.question),
            ("company", &self.company),
            ("category", &self.category),
            ("subcategory", &self.subcategory),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField { id: self.id.clone(), field });
            }
        }

        if self.sources.is_empty() {
            return Err(CatalogError::EmptySources { id: self.id.clone() });
        }

        Ok(())
    }
}

//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, TimeZone, Utc};
use interview_catalog::models::InterviewRecord;
use serde_json::json;
use tempfile::TempDir;

/// Fixed reference time used across integration tests
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub const REFERENCE_NOW: &str = "2025-06-15T12:00:00Z";

/// Builder for catalog records, rendered as JSONL lines or parsed records
#[derive(Clone)]
pub struct RecordBuilder {
    id: String,
    question: String,
    company: String,
    category: String,
    subcategory: String,
    job_type: String,
    difficulty: i64,
    asked_count: u32,
    platform: String,
    date: DateTime<Utc>,
}

impl RecordBuilder {
    /// Create a record with default values, dated one day before [`reference_now`]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            question: format!("Question {}", id),
            company: "Acme".to_string(),
            category: "开发".to_string(),
            subcategory: "前端".to_string(),
            job_type: "campus".to_string(),
            difficulty: 5,
            asked_count: 1,
            platform: "niuke".to_string(),
            date: reference_now() - Duration::days(1),
        }
    }

    pub fn question(mut self, question: &str) -> Self {
        self.question = question.to_string();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.company = company.to_string();
        self
    }

    pub fn category(mut self, category: &str, subcategory: &str) -> Self {
        self.category = category.to_string();
        self.subcategory = subcategory.to_string();
        self
    }

    pub fn job_type(mut self, job_type: &str) -> Self {
        self.job_type = job_type.to_string();
        self
    }

    pub fn difficulty(mut self, difficulty: i64) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn asked(mut self, asked_count: u32) -> Self {
        self.asked_count = asked_count;
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.platform = platform.to_string();
        self
    }

    /// Date the record `days` before [`reference_now`]
    pub fn age_days(mut self, days: i64) -> Self {
        self.date = reference_now() - Duration::days(days);
        self
    }

    pub fn to_json(&self) -> String {
        json!({
            "id": self.id,
            "question": self.question,
            "company": self.company,
            "category": self.category,
            "subcategory": self.subcategory,
            "jobType": self.job_type,
            "difficulty": self.difficulty,
            "askedCount": self.asked_count,
            "sources": [{"platform": self.platform, "url": ""}],
            "date": self.date.to_rfc3339(),
        })
        .to_string()
    }

    /// Parse through the same path the loader uses
    pub fn build(&self) -> InterviewRecord {
        let line: interview_catalog::parsers::RecordLine =
            serde_json::from_str(&self.to_json()).expect("Failed to parse record line");
        InterviewRecord::try_from(line).expect("Invalid test record")
    }
}

pub fn to_jsonl(records: &[RecordBuilder]) -> String {
    records.iter().map(RecordBuilder::to_json).collect::<Vec<_>>().join("\n")
}

/// Builder for a temporary directory holding catalog and taxonomy files
pub struct CatalogDirBuilder {
    temp_dir: TempDir,
}

impl CatalogDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` verbatim to `name`
    pub fn with_raw(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Write records as a JSONL file
    pub fn with_records(self, name: &str, records: &[RecordBuilder]) -> Self {
        let content = to_jsonl(records);
        self.with_raw(name, &content)
    }

    /// Write a taxonomy file as `taxonomy.json`
    pub fn with_taxonomy(self, entries: &[(&str, &[&str])]) -> Self {
        let value: Vec<_> = entries
            .iter()
            .map(|(category, subs)| json!({"category": category, "subcategories": subs}))
            .collect();
        let content = serde_json::to_string(&value).expect("Failed to serialize taxonomy");
        self.with_raw("taxonomy.json", &content)
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for CatalogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt;
use std::str::FromStr;

use crate::models::InterviewRecord;

/// Display order for a filtered list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Most frequently asked first
    Asked,
    /// Newest first
    Date,
    /// Catalog order
    #[default]
    None,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asked => "asked",
            SortOrder::Date => "date",
            SortOrder::None => "none",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asked" | "popular" => Ok(SortOrder::Asked),
            "date" | "newest" => Ok(SortOrder::Date),
            "none" => Ok(SortOrder::None),
            _ => Err(format!("Invalid sort order: '{}' (must be 'asked', 'date' or 'none')", s)),
        }
    }
}

/// Reorder filtered records; ties keep their catalog order
pub fn sort_records(records: &mut [&InterviewRecord], order: SortOrder) {
    match order {
        SortOrder::Asked => records.sort_by(|a, b| b.asked_count.cmp(&a.asked_count)),
        SortOrder::Date => records.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::None => {}
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::models::{Difficulty, JobType, Platform, Source};

    fn record(id: &str, asked_count: u32, age_days: i64) -> InterviewRecord {
        InterviewRecord {
            id: id.to_string(),
            question: "q".to_string(),
            company: "Acme".to_string(),
            post: None,
            category: "c".to_string(),
            subcategory: "s".to_string(),
            job_type: JobType::Campus,
            difficulty: Difficulty::new(2).unwrap(),
            asked_count,
            sources: vec![Source::new(Platform::Zhihu, "")],
            date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() - Duration::days(age_days),
        }
    }

    fn sorted(records: &[InterviewRecord], order: SortOrder) -> Vec<&str> {
        let mut refs: Vec<&InterviewRecord> = records.iter().collect();
        sort_records(&mut refs, order);
        refs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_asked_is_stable() {
        let records =
            vec![record("a", 3, 0), record("b", 9, 0), record("c", 3, 0), record("d", 1, 0)];
        assert_eq!(sorted(&records, SortOrder::Asked), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let records = vec![record("a", 0, 30), record("b", 0, 1), record("c", 0, 400)];
        assert_eq!(sorted(&records, SortOrder::Date), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_none_keeps_order() {
        let records = vec![record("a", 1, 30), record("b", 5, 1)];
        assert_eq!(sorted(&records, SortOrder::None), vec!["a", "b"]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Asked".parse::<SortOrder>().unwrap(), SortOrder::Asked);
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Date);
        assert!("random".parse::<SortOrder>().is_err());
    }
}

//! Plain-text rendering for the CLI.
//!
//! Everything writes to a caller-supplied [`Write`] so the layout can be tested
//! without capturing stdout.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::analysis::{Analysis, AnalysisBlock};
use crate::catalog::Taxonomy;
use crate::filters::FilterSpec;
use crate::models::{Difficulty, InterviewRecord, JobType, Tier};
use crate::stats::{CatalogSummary, Histogram};
use crate::utils::format_timestamp;

/// Width of a full histogram bar, in cells
const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Human-readable summary of the active filters, one chip per field
pub fn filter_chips(spec: &FilterSpec) -> Vec<String> {
    let mut chips = Vec::new();
    if let Some(term) = spec.active_search_term() {
        chips.push(format!("search \"{}\"", term));
    }
    if let Some(job_type) = spec.job_type {
        chips.push(format!("type {}", job_type));
    }
    if let Some(ref category) = spec.category {
        chips.push(format!("category {}", category));
    }
    if let Some(ref subcategory) = spec.subcategory {
        chips.push(format!("subcategory {}", subcategory));
    }
    if !spec.companies.is_empty() {
        let companies: Vec<&str> = spec.companies.iter().map(String::as_str).collect();
        chips.push(format!("company {}", companies.join(" | ")));
    }
    if let Some(range) = spec.time_range {
        chips.push(format!("within {}", range));
    }
    if let Some(difficulty) = spec.difficulty {
        chips.push(format!("difficulty {} ({})", difficulty, difficulty.label()));
    }
    chips
}

pub fn write_records(
    out: &mut impl Write,
    records: &[&InterviewRecord],
    spec: &FilterSpec,
    now: &DateTime<Utc>,
) -> io::Result<()> {
    let chips = filter_chips(spec);
    if !chips.is_empty() {
        writeln!(out, "Filters: {}", chips.join(", "))?;
    }
    writeln!(out, "Questions ({})", records.len())?;

    if records.is_empty() {
        writeln!(out)?;
        writeln!(out, "No matching questions.")?;
        if spec.active_search_term().is_some() {
            writeln!(out, "Try a different search term.")?;
        } else {
            writeln!(out, "Try loosening the filters.")?;
        }
        return Ok(());
    }

    for record in records {
        writeln!(out)?;
        write_record(out, record, now)?;
    }
    Ok(())
}

fn write_record(
    out: &mut impl Write,
    record: &InterviewRecord,
    now: &DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "[{}] {}", record.id, record.question)?;

    let mut meta = vec![record.company.clone()];
    if let Some(ref post) = record.post {
        meta.push(post.clone());
    }
    meta.push(format!("{} / {}", record.category, record.subcategory));
    meta.push(job_type_label(record.job_type).to_string());
    writeln!(out, "    {}", meta.join(" · "))?;

    let sources: Vec<&str> = record.sources.iter().map(|s| s.platform.label()).collect();
    writeln!(
        out,
        "    difficulty {} ({}) · asked {} times · {} · {}",
        record.difficulty,
        record.difficulty.label(),
        record.asked_count,
        sources.join(", "),
        format_timestamp(&record.date, now)
    )
}

fn job_type_label(job_type: JobType) -> &'static str {
    match job_type {
        JobType::Campus => "campus hire",
        JobType::Social => "experienced hire",
    }
}

/// Nine bar lines; `selected` is marked with `>`
pub fn write_histogram(
    out: &mut impl Write,
    histogram: &Histogram,
    selected: Option<Difficulty>,
) -> io::Result<()> {
    writeln!(
        out,
        "Difficulty distribution ({}, {} questions)",
        histogram.scope,
        histogram.total()
    )?;

    for bucket in &histogram.buckets {
        let marker = if selected == Some(bucket.difficulty) { '>' } else { ' ' };
        let width = (histogram.bar_fraction(bucket.difficulty) * BAR_WIDTH as f64).round() as usize;
        // Non-empty buckets always get at least one cell
        let width = if bucket.count > 0 { width.max(1) } else { 0 };
        let bar: String = std::iter::repeat_n(BAR_CHAR, width).collect();
        writeln!(
            out,
            "{}{} {:<8} {:<width$} {}",
            marker,
            bucket.difficulty,
            bucket.label,
            bar,
            bucket.count,
            width = BAR_WIDTH
        )?;
    }
    Ok(())
}

pub fn write_summary(
    out: &mut impl Write,
    summary: &CatalogSummary,
    catalog_location: &str,
) -> io::Result<()> {
    writeln!(out, "Interview Catalog Statistics")?;
    writeln!(out, "============================")?;
    writeln!(out, "Total questions: {}", summary.total)?;
    writeln!(out, "Companies: {}", summary.companies)?;

    writeln!(out)?;
    writeln!(out, "By job type:")?;
    for job_type in JobType::ALL {
        let count = summary.by_job_type.get(&job_type).copied().unwrap_or(0);
        writeln!(out, "  {}: {}", job_type, count)?;
    }

    writeln!(out)?;
    writeln!(out, "By difficulty tier:")?;
    for tier in Tier::ALL {
        let count = summary.by_tier.get(&tier).copied().unwrap_or(0);
        writeln!(out, "  {}: {}", tier, count)?;
    }

    if !summary.by_category.is_empty() {
        writeln!(out)?;
        writeln!(out, "By category:")?;
        for (category, subcategories) in &summary.by_category {
            writeln!(out, "  {}: {}", category, summary.category_total(category))?;
            for (subcategory, count) in subcategories {
                writeln!(out, "    {}: {}", subcategory, count)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Catalog: {}", catalog_location)?;
    if let Some(oldest) = summary.oldest {
        writeln!(out, "Oldest question: {}", oldest.format("%Y-%m-%d"))?;
    }
    if let Some(newest) = summary.newest {
        writeln!(out, "Newest question: {}", newest.format("%Y-%m-%d"))?;
    }
    Ok(())
}

pub fn write_analysis(
    out: &mut impl Write,
    record: &InterviewRecord,
    analysis: &Analysis,
) -> io::Result<()> {
    writeln!(out, "{}", record.question)?;
    writeln!(
        out,
        "{} · {} / {} · asked {} times",
        record.company, record.category, record.subcategory, record.asked_count
    )?;
    writeln!(out)?;

    for block in analysis.blocks() {
        match block {
            AnalysisBlock::Heading { text } => writeln!(out, "{}", text.to_uppercase())?,
            AnalysisBlock::Bullet { text } => writeln!(out, "  ✓ {}", text)?,
            AnalysisBlock::Step { number, text } => writeln!(out, "  ({}) {}", number, text)?,
            AnalysisBlock::Paragraph { text } => writeln!(out, "{}", text)?,
            AnalysisBlock::Blank => writeln!(out)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "Generated at {}", analysis.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))
}

pub fn write_taxonomy(out: &mut impl Write, taxonomy: &Taxonomy) -> io::Result<()> {
    for entry in taxonomy.entries() {
        writeln!(out, "{}", entry.category)?;
        for subcategory in &entry.subcategories {
            writeln!(out, "  {}", subcategory)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::filters::TimeRange;
    use crate::models::{Platform, Source};
    use crate::stats::HistogramScope;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn record(id: &str, difficulty: i64) -> InterviewRecord {
        InterviewRecord {
            id: id.to_string(),
            question: "Explain HTTP keep-alive".to_string(),
            company: "Kuaishou".to_string(),
            post: Some("Web engineer".to_string()),
            category: "开发".to_string(),
            subcategory: "前端".to_string(),
            job_type: JobType::Campus,
            difficulty: Difficulty::new(difficulty).unwrap(),
            asked_count: 5,
            sources: vec![Source::new(Platform::Xiaohongshu, ""), Source::new(Platform::Niuke, "")],
            date: Utc.with_ymd_and_hms(2025, 2, 3, 0, 0, 0).unwrap(),
        }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_filter_chips() {
        let spec = FilterSpec {
            job_type: Some(JobType::Social),
            companies: ["B".to_string(), "A".to_string()].into(),
            time_range: Some(TimeRange::OneMonth),
            search_term: Some("cache".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(
            filter_chips(&spec),
            vec!["search \"cache\"", "type social", "company A | B", "within one_month"]
        );
        assert!(filter_chips(&FilterSpec::default()).is_empty());
    }

    #[test]
    fn test_write_records() {
        let record = record("q-1", 5);
        let text = render(|out| write_records(out, &[&record], &FilterSpec::default(), &now()));

        assert!(text.contains("Questions (1)"));
        assert!(text.contains("[q-1] Explain HTTP keep-alive"));
        assert!(text.contains("Kuaishou · Web engineer · 开发 / 前端 · campus hire"));
        assert!(
            text.contains("difficulty 5 (medium-2) · asked 5 times · 小红书, 牛客 · Feb 3")
        );
    }

    #[test]
    fn test_write_records_empty_state() {
        let searching =
            FilterSpec { search_term: Some("zzz".to_string()), ..FilterSpec::default() };
        let text = render(|out| write_records(out, &[], &searching, &now()));
        assert!(text.contains("No matching questions."));
        assert!(text.contains("different search term"));

        let text = render(|out| write_records(out, &[], &FilterSpec::default(), &now()));
        assert!(text.contains("loosening the filters"));
    }

    #[test]
    fn test_write_histogram() {
        let records = vec![record("1", 3), record("2", 3), record("3", 7)];
        let histogram = Histogram::from_records(&records, HistogramScope::Matches);
        let text = render(|out| write_histogram(out, &histogram, Difficulty::new(7).ok()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains("matches, 3 questions"));
        assert!(lines[3].starts_with(" 3 easy-3"));
        assert!(lines[3].ends_with(" 2"));
        assert!(lines[7].starts_with(">7 hard-1"));
        assert_eq!(lines[3].matches(BAR_CHAR).count(), BAR_WIDTH);
        assert_eq!(lines[7].matches(BAR_CHAR).count(), BAR_WIDTH / 2);
        assert_eq!(lines[1].matches(BAR_CHAR).count(), 0);
    }

    #[test]
    fn test_write_summary() {
        let records = vec![record("1", 1), record("2", 9)];
        let summary = CatalogSummary::from_records(&records);
        let text = render(|out| write_summary(out, &summary, "~/catalog.jsonl"));

        assert!(text.contains("Total questions: 2"));
        assert!(text.contains("  campus: 2"));
        assert!(text.contains("  social: 0"));
        assert!(text.contains("  hard: 1"));
        assert!(text.contains("    前端: 2"));
        assert!(text.contains("Oldest question: 2025-02-03"));
    }

    #[test]
    fn test_write_taxonomy() {
        let text = render(|out| write_taxonomy(out, &Taxonomy::builtin()));
        assert!(text.starts_with("开发\n  前端\n  后端\n  算法\n产品\n"));
    }
}

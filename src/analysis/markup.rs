//! Line-oriented markup used by analysis templates.
//!
//! - `**Heading**` on a line of its own
//! - `• bullet`
//! - `1. numbered step`
//! - anything else non-blank is a paragraph; blank lines are kept as spacing

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnalysisBlock {
    Heading { text: String },
    Bullet { text: String },
    Step { number: u32, text: String },
    Paragraph { text: String },
    Blank,
}

const BULLET: char = '•';

/// Split analysis text into renderable blocks, one per line
pub fn parse_analysis(text: &str) -> Vec<AnalysisBlock> {
    text.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> AnalysisBlock {
    if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
        return AnalysisBlock::Heading { text: line.replace("**", "") };
    }

    if let Some(rest) = line.strip_prefix(BULLET) {
        return AnalysisBlock::Bullet { text: rest.trim_start().to_string() };
    }

    if let Some((number, rest)) = split_step(line) {
        return AnalysisBlock::Step { number, text: rest.trim_start().to_string() };
    }

    if line.trim().is_empty() {
        AnalysisBlock::Blank
    } else {
        AnalysisBlock::Paragraph { text: line.to_string() }
    }
}

/// `"12. text"` → `(12, " text")`
fn split_step(line: &str) -> Option<(u32, &str)> {
    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let rest = line[digits_end..].strip_prefix('.')?;
    let number = line[..digits_end].parse().ok()?;
    Some((number, rest))
}

//! Query-string parser producing a [`FilterSpec`].
//!
//! Lets a single line of text express everything the filter controls can, for the
//! CLI `--query` flag.
//!
//! # Syntax
//!
//! ```text
//! query        := term*
//! term         := field_filter | word | "quoted phrase"
//! field_filter := field_name:value | field_name:"quoted value"
//! field_name   := type | category | subcategory | company | time | difficulty
//! ```
//!
//! Bare words and quoted phrases are joined with single spaces into the free-text
//! search term.
//!
//! # Supported Fields
//!
//! - `type:campus|social` - Job type
//! - `category:name` - Category, exact match
//! - `subcategory:name` (alias `sub`) - Subcategory, exact match
//! - `company:name` - Company; repeat the field to allow several companies (OR)
//! - `time:two_weeks|one_month|half_year|one_year|two_years` - Lookback window
//! - `difficulty:1-9` (alias `level`) - Exact difficulty, number or label like `hard-2`
//!
//! # Examples
//!
//! ```rust
//! # use interview_catalog::filters::parser::parse_query;
//! let spec = parse_query("type:campus company:Acme company:Globex closure").unwrap();
//! assert_eq!(spec.companies.len(), 2);
//! assert_eq!(spec.search_term.as_deref(), Some("closure"));
//!
//! let spec = parse_query("category:development subcategory:\"front end\"").unwrap();
//! assert_eq!(spec.subcategory.as_deref(), Some("front end"));
//! ```
//!
//! # Validation
//!
//! - Unknown field names are rejected
//! - `type`, `time` and `difficulty` values are validated
//! - A single-choice field given twice is rejected; `company` may repeat

use anyhow::{Context, Result, anyhow, bail};

use super::spec::{FilterSpec, TimeRange};
use crate::models::{Difficulty, JobType};

/// One lexical unit of a query
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// `field:value` or `field:"quoted value"`
    FieldValue { field: String, value: String },
    /// A bare word or a quoted phrase
    Text(String),
}

/// Supported query fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryField {
    Type,
    Category,
    Subcategory,
    Company,
    Time,
    Difficulty,
}

/// Byte-offset scanner over the query text
struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume up to the next whitespace or a `"`, whichever comes first
    fn bare(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find(|c: char| c.is_whitespace() || c == '"').unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Consume a `"..."` span, the cursor sitting on the opening quote
    fn quoted(&mut self) -> Result<&'a str> {
        let body = &self.rest()[1..];
        let close = body.find('"').ok_or_else(|| anyhow!("Unterminated quoted string"))?;
        self.pos += close + 2;
        Ok(&body[..close])
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            return Ok(None);
        }

        if self.rest().starts_with('"') {
            return Ok(Some(Token::Text(self.quoted()?.to_string())));
        }

        let head = self.bare();
        let Some((field, inline)) = head.split_once(':') else {
            return Ok(Some(Token::Text(head.to_string())));
        };

        let value = if inline.is_empty() && self.rest().starts_with('"') {
            self.quoted()?
        } else {
            inline
        };
        if field.is_empty() || value.is_empty() {
            bail!("Invalid field:value format: {}", head);
        }

        Ok(Some(Token::FieldValue { field: field.to_string(), value: value.to_string() }))
    }
}

/// Split query input into tokens; blank quoted phrases are dropped
fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        if matches!(&token, Token::Text(text) if text.trim().is_empty()) {
            continue;
        }
        tokens.push(token);
    }
    Ok(tokens)
}

fn parse_field(field: &str) -> Result<QueryField> {
    match field.to_lowercase().as_str() {
        "type" => Ok(QueryField::Type),
        "category" => Ok(QueryField::Category),
        "subcategory" | "sub" => Ok(QueryField::Subcategory),
        "company" => Ok(QueryField::Company),
        "time" => Ok(QueryField::Time),
        "difficulty" | "level" => Ok(QueryField::Difficulty),
        _ => Err(anyhow!(
            "Unknown field: '{}' (valid fields: type, category, subcategory, company, time, difficulty)",
            field
        )),
    }
}

/// Store `value` in a single-choice slot, rejecting a second occurrence
fn set_once<T>(slot: &mut Option<T>, value: T, field: &str) -> Result<()> {
    if slot.is_some() {
        bail!("Field '{}' given more than once", field);
    }
    *slot = Some(value);
    Ok(())
}

/// Parse a query string into a [`FilterSpec`]
///
/// Examples:
/// - "type:social" → job type only
/// - "company:A company:B" → either company
/// - "time:one_month difficulty:medium-1" → recent, difficulty 4
/// - "event loop" → search term "event loop"
pub fn parse_query(input: &str) -> Result<FilterSpec> {
    let mut spec = FilterSpec::new();

    if input.trim().is_empty() {
        return Ok(spec);
    }

    let tokens = tokenize(input).context("Failed to tokenize query")?;
    let mut search_words: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => search_words.push(text),
            Token::FieldValue { field, value } => match parse_field(&field)? {
                QueryField::Type => {
                    let job_type = value.parse::<JobType>().map_err(|e| anyhow!(e))?;
                    set_once(&mut spec.job_type, job_type, "type")?;
                }
                QueryField::Category => set_once(&mut spec.category, value, "category")?,
                QueryField::Subcategory => set_once(&mut spec.subcategory, value, "subcategory")?,
                QueryField::Company => {
                    spec.companies.insert(value);
                }
                QueryField::Time => {
                    let range = value.parse::<TimeRange>().map_err(|e| anyhow!(e))?;
                    set_once(&mut spec.time_range, range, "time")?;
                }
                QueryField::Difficulty => {
                    let difficulty = value.parse::<Difficulty>().map_err(|e| anyhow!(e))?;
                    set_once(&mut spec.difficulty, difficulty, "difficulty")?;
                }
            },
        }
    }

    if !search_words.is_empty() {
        spec.search_term = Some(search_words.join(" "));
    }

    Ok(spec)
}

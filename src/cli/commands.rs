use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use super::output::{write_analysis, write_histogram, write_records, write_summary, write_taxonomy};
use crate::analysis::{AnalysisProvider, TemplateAnalysisProvider};
use crate::browser::{Action, Browser};
use crate::catalog::{Catalog, Taxonomy, load_catalog};
use crate::filters::{FilterSpec, SortOrder, TimeRange, parse_query, sort_records};
use crate::models::{Difficulty, JobType};
use crate::stats::{CatalogSummary, HistogramScope};
use crate::utils::{format_path_with_tilde, resolve_catalog_path, resolve_taxonomy_path};

#[derive(Parser)]
#[command(name = "interview-catalog")]
#[command(version)]
#[command(about = "Browse, filter and chart a catalog of interview questions", long_about = None)]
pub struct Cli {
    /// Catalog JSONL file or directory [default: $INTERVIEW_CATALOG, then the data dir]
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Taxonomy JSON file; enables category/subcategory checks [default: $INTERVIEW_TAXONOMY]
    #[arg(long, global = true, value_name = "PATH")]
    pub taxonomy: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the questions matching the filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Order of the results: asked, date or none
        #[arg(long, default_value = "none")]
        sort: SortOrder,

        /// Show at most this many questions
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show how many questions sit at each difficulty level
    Histogram {
        #[command(flatten)]
        filters: FilterArgs,

        /// Count the whole catalog or only the matching questions
        #[arg(long, default_value = "matches")]
        scope: HistogramScope,

        #[arg(long)]
        json: bool,
    },
    /// Show statistics about the catalog
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Show the analysis for one question
    Analyze {
        /// Question id
        id: String,

        /// Simulated analysis latency in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,

        #[arg(long)]
        json: bool,
    },
    /// Show the category taxonomy
    Taxonomy {
        #[arg(long)]
        json: bool,
    },
}

/// Filter flags shared by `list` and `histogram`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Job type: campus or social
    #[arg(long = "type", value_name = "TYPE")]
    pub job_type: Option<JobType>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub subcategory: Option<String>,

    /// Company to include; repeat for several
    #[arg(long = "company", value_name = "COMPANY")]
    pub companies: Vec<String>,

    /// Lookback window: two_weeks, one_month, half_year, one_year or two_years
    #[arg(long, value_name = "RANGE")]
    pub time_range: Option<TimeRange>,

    /// Exact difficulty, 1-9 or a label such as hard-2
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Case-insensitive text matched against question, company and subcategory
    #[arg(long)]
    pub search: Option<String>,

    /// Filter query, e.g. 'type:campus company:Acme "event loop"'
    #[arg(long, short)]
    pub query: Option<String>,

    /// Reference time for --time-range (RFC 3339) [default: now]
    #[arg(long, value_name = "RFC3339")]
    pub now: Option<DateTime<Utc>>,
}

impl FilterArgs {
    /// Combine `--query` with the individual flags
    ///
    /// A single-choice field set both ways is rejected; companies are merged.
    pub fn to_spec(&self) -> Result<FilterSpec> {
        let mut spec = match self.query {
            Some(ref query) => parse_query(query).context("Invalid --query")?,
            None => FilterSpec::new(),
        };

        merge(&mut spec.job_type, self.job_type, "type")?;
        merge(&mut spec.category, self.category.clone(), "category")?;
        merge(&mut spec.subcategory, self.subcategory.clone(), "subcategory")?;
        merge(&mut spec.time_range, self.time_range, "time range")?;
        merge(&mut spec.difficulty, self.difficulty, "difficulty")?;
        spec.companies.extend(self.companies.iter().cloned());

        if let Some(ref search) = self.search {
            spec.search_term = match spec.search_term.take() {
                Some(query_words) => Some(format!("{} {}", query_words, search)),
                None => Some(search.clone()),
            };
        }

        Ok(spec)
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

fn merge<T>(slot: &mut Option<T>, flag: Option<T>, name: &str) -> Result<()> {
    if let Some(value) = flag {
        if slot.is_some() {
            bail!("The {} filter is given both in --query and as a flag", name);
        }
        *slot = Some(value);
    }
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::List { filters, sort, limit, json }) => {
            list(&cli, filters, *sort, *limit, *json)?;
        }
        Some(Commands::Histogram { filters, scope, json }) => {
            histogram(&cli, filters, *scope, *json)?;
        }
        Some(Commands::Stats { json }) => {
            stats(&cli, *json)?;
        }
        Some(Commands::Analyze { id, delay_ms, json }) => {
            analyze(&cli, id, *delay_ms, *json)?;
        }
        Some(Commands::Taxonomy { json }) => {
            show_taxonomy(&cli, *json)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Configured taxonomy, if any
fn load_taxonomy(cli: &Cli) -> Result<Option<Taxonomy>> {
    resolve_taxonomy_path(cli.taxonomy.clone())
        .map(|path| Taxonomy::load(&path))
        .transpose()
}

fn open_catalog(cli: &Cli, taxonomy: Option<&Taxonomy>) -> Result<(Catalog, PathBuf)> {
    let path = resolve_catalog_path(cli.catalog.clone())?;
    let catalog = load_catalog(&path, taxonomy)?;
    Ok((catalog, path))
}

/// Build a browser seeded with the filter flags, checking the selection first
fn open_browser(cli: &Cli, filters: &FilterArgs, scope: HistogramScope) -> Result<Browser> {
    let spec = filters.to_spec()?;
    let taxonomy = load_taxonomy(cli)?;
    if let Some(ref taxonomy) = taxonomy {
        taxonomy.validate_selection(&spec).context("Invalid category selection")?;
    }

    let (catalog, _) = open_catalog(cli, taxonomy.as_ref())?;
    Ok(Browser::with_scope(Arc::new(catalog), scope).with_spec(spec))
}

fn list(
    cli: &Cli,
    filters: &FilterArgs,
    sort: SortOrder,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let browser = open_browser(cli, filters, HistogramScope::default())?;
    let now = filters.reference_time();

    let mut records = browser.visible(now);
    sort_records(&mut records, sort);
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
    } else {
        write_records(&mut out, &records, browser.spec(), &now)?;
    }
    Ok(())
}

fn histogram(cli: &Cli, filters: &FilterArgs, scope: HistogramScope, json: bool) -> Result<()> {
    let browser = open_browser(cli, filters, scope)?;
    let histogram = browser.histogram(filters.reference_time());

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &histogram)?;
        writeln!(out)?;
    } else {
        write_histogram(&mut out, &histogram, browser.spec().difficulty)?;
    }
    Ok(())
}

fn stats(cli: &Cli, json: bool) -> Result<()> {
    let taxonomy = load_taxonomy(cli)?;
    let (catalog, path) = open_catalog(cli, taxonomy.as_ref())?;
    let summary = CatalogSummary::from_records(&catalog);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        write_summary(&mut out, &summary, &format_path_with_tilde(&path))?;
    }
    Ok(())
}

fn analyze(cli: &Cli, id: &str, delay_ms: u64, json: bool) -> Result<()> {
    let taxonomy = load_taxonomy(cli)?;
    let (catalog, _) = open_catalog(cli, taxonomy.as_ref())?;
    let mut browser = Browser::new(Arc::new(catalog));
    browser.dispatch(Action::OpenAnalysis(id.to_string()))?;

    let Some(record) = browser.selected() else {
        bail!("No question selected");
    };

    let provider =
        TemplateAnalysisProvider::new().with_latency(Duration::from_millis(delay_ms));
    let analysis = provider
        .analyze(record)
        .with_context(|| format!("Failed to analyze question '{}'", id))?;

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &analysis)?;
        writeln!(out)?;
    } else {
        write_analysis(&mut out, record, &analysis)?;
    }
    Ok(())
}

fn show_taxonomy(cli: &Cli, json: bool) -> Result<()> {
    let taxonomy = load_taxonomy(cli)?.unwrap_or_default();

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &taxonomy)?;
        writeln!(out)?;
    } else {
        write_taxonomy(&mut out, &taxonomy)?;
    }
    Ok(())
}

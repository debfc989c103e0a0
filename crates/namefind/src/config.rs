//! Command-line and environment configuration
//!
//! Every flag can also be set through the environment:
//! - `NAMEFIND_DATA`: roster CSV path
//! - `NAMEFIND_LIMIT`: maximum similar names (default: 5)
//! - `NAMEFIND_MIN_SCORE`: minimum similarity 0-100 (default: 0)
//! - `NAMEFIND_LANG`: `en` or `es` (default: en)
//! - `RUST_LOG`: logging filter (default: warn)

use std::path::PathBuf;

use clap::Parser;
use namefind_core::fuzzy::{DEFAULT_LIMIT, MAX_SCORE};
use namefind_core::SearchOptions;

use crate::error::{Error, Result};
use crate::locale::Locale;

/// Look up provider names in a CSV roster: exact match first, similar names otherwise.
#[derive(Parser, Debug, Clone)]
#[command(name = "namefind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Roster CSV with Name, ID and optional Variation 1-5 columns
    #[arg(short, long, env = "NAMEFIND_DATA")]
    pub data: PathBuf,

    /// Maximum similar names to list
    #[arg(short, long, env = "NAMEFIND_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Hide similar names scoring below this (0-100)
    #[arg(short = 's', long, env = "NAMEFIND_MIN_SCORE", default_value_t = 0)]
    pub min_score: u8,

    /// Ignore case when looking for an exact match
    #[arg(long)]
    pub ignore_case: bool,

    /// Display language (en, es)
    #[arg(long, env = "NAMEFIND_LANG", default_value = "en")]
    pub lang: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the result of a one-shot query to this CSV file
    #[arg(short, long, requires = "query")]
    pub export: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Name to look up; starts an interactive session when omitted
    pub query: Option<String>,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub data: PathBuf,
    pub options: SearchOptions,
    pub locale: Locale,
    pub json: bool,
    pub export: Option<PathBuf>,
    pub query: Option<String>,
}

impl TryFrom<Cli> for LookupConfig {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        if cli.limit == 0 {
            return Err(Error::Config("limit must be at least 1".to_string()));
        }
        if cli.min_score > MAX_SCORE {
            return Err(Error::Config(format!(
                "min-score must be between 0 and {}, got {}",
                MAX_SCORE, cli.min_score
            )));
        }

        let locale: Locale = cli.lang.parse()?;

        let options = SearchOptions::new()
            .limit(cli.limit)
            .min_score(cli.min_score)
            .case_sensitive_exact(!cli.ignore_case);

        Ok(Self {
            data: cli.data,
            options,
            locale,
            json: cli.json,
            export: cli.export,
            query: cli.query,
        })
    }
}

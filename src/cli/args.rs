//! Command line argument parsing for the kwexpand CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::expansion::MatchType;

/// kwexpand - keyword expansion for search-ad campaigns
#[derive(Parser, Debug, Clone)]
#[command(name = "kwexpand")]
#[command(about = "Expand seed keywords into match-type and long-tail keyword candidates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KwexpandArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Modifier catalog file (JSON); the built-in catalog is used if omitted
    #[arg(long, env = "KWEXPAND_CATALOG", value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KwexpandArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Expand seed keywords
    Expand(ExpandArgs),

    /// Expand every request of a JSON-lines file in parallel
    Batch(BatchArgs),

    /// Show the modifier catalog
    Catalog(CatalogArgs),

    /// List industries and their default seed keywords
    Industries,
}

/// Arguments for expanding seeds
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Seed keywords; quote multi-word seeds
    #[arg(value_name = "SEED")]
    pub seeds: Vec<String>,

    /// Geographic scope (capital_region, regional, national)
    #[arg(short, long, default_value = "capital_region")]
    pub scope: String,

    /// Industry whose default seeds are used when no seed is given
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Only print candidates of this match type
    #[arg(long, value_name = "MATCH_TYPE")]
    pub only: Option<MatchTypeArg>,
}

/// Arguments for batch expansion
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSON-lines file, one request per line
    #[arg(value_name = "REQUEST_FILE")]
    pub input: PathBuf,

    /// Write results to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for showing the catalog
#[derive(Parser, Debug, Clone)]
pub struct CatalogArgs {
    /// Only show the locations of this scope
    #[arg(short, long)]
    pub scope: Option<String>,
}

/// Match types selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchTypeArg {
    Exact,
    Phrase,
    BroadModifier,
    LongTail,
}

impl From<MatchTypeArg> for MatchType {
    fn from(arg: MatchTypeArg) -> Self {
        match arg {
            MatchTypeArg::Exact => MatchType::Exact,
            MatchTypeArg::Phrase => MatchType::Phrase,
            MatchTypeArg::BroadModifier => MatchType::BroadModifier,
            MatchTypeArg::LongTail => MatchType::LongTail,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

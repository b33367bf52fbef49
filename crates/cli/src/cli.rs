//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::color::ColorMode;

/// Finds every offset where a text tiles into a fixed multiset of equal-length words
#[derive(Parser)]
#[command(name = "tessel")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TESSEL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a text for word-concatenation spans
    Scan(ScanArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// File to scan; stdin when absent or "-"
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Target word; repeat once per occurrence required
    #[arg(short = 'w', long = "word", value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Matching strategy (overrides config)
    #[arg(short, long, value_enum, value_name = "STRATEGY")]
    pub matcher: Option<MatcherChoice>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum matches to display, 0 for all (overrides config)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Bytes of context around each match in text output (overrides config)
    #[arg(long, value_name = "N")]
    pub context: Option<usize>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Matching strategy selection. Shared between the CLI and tessel.toml.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherChoice {
    /// Linear sliding-window scan.
    #[default]
    Window,
    /// Quadratic reference scan.
    Brute,
    /// Run both and fail on any disagreement.
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

//! CLI parse: clap types for contentmap. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// contentmap - evaluate JSON content tables against conditions
#[derive(Parser)]
#[command(name = "contentmap")]
#[command(about = "Evaluate JSON content tables against caller conditions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (holds contentmap.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a content document and print the selected records
    Eval {
        /// Content file path
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        content: Option<PathBuf>,
        /// Content name resolved under the configured root and package
        #[arg(long)]
        name: Option<String>,
        /// Attribute to extract (repeatable)
        #[arg(long = "attr", required = true)]
        attributes: Vec<String>,
        /// Condition as key=value (repeatable)
        #[arg(long = "cond", value_parser = parse_condition)]
        conditions: Vec<(String, String)>,
        /// Require every declared condition key to be supplied
        #[arg(long)]
        strict: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Summarize the sections of a content document
    Inspect {
        /// Content file path
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        content: Option<PathBuf>,
        /// Content name resolved under the configured root and package
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Parse `key=value`; the value may itself contain `=`.
pub fn parse_condition(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("condition key is empty in `{}`", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

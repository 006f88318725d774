//! CLI argument parsing for pabotscope

use crate::config::ScopeConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Printed to stdout when no log file is given
pub const USAGE: &str = "Usage: pabotscope <logfile>";

/// Output format for the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII chart and longest-test table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV of the raw concurrency series
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "pabotscope")]
#[command(version)]
#[command(about = "Plot test parallelism over time from a pabot log", long_about = None)]
pub struct Cli {
    /// Pabot log file to analyse
    #[arg(value_name = "LOGFILE")]
    pub log: Option<PathBuf>,

    /// Chart height in rows
    #[arg(long = "height", value_name = "ROWS", default_value = "10")]
    pub height: usize,

    /// Chart width in columns
    #[arg(long = "width", value_name = "COLUMNS", default_value = "80")]
    pub width: usize,

    /// Character used for chart bars
    #[arg(long = "block", value_name = "CHAR", default_value = "▓")]
    pub block: char,

    /// Number of longest-running tests to list
    #[arg(long = "top", value_name = "N", default_value = "10")]
    pub top: usize,

    /// Sampling interval in seconds
    #[arg(long = "interval", value_name = "SECONDS", default_value = "1.0")]
    pub interval: f64,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Analysis settings selected on the command line
    pub fn scope_config(&self) -> ScopeConfig {
        ScopeConfig {
            max_height: self.height,
            max_width: self.width,
            block: self.block,
            top: self.top,
            interval_secs: self.interval,
        }
    }
}

//! JSON output format for concurrency reports
//!
//! --format json implementation

use crate::concurrency::ConcurrencySample;
use crate::ranking::RankedDuration;
use serde::Serialize;

/// Chart settings echoed into the report
#[derive(Debug, Clone, Serialize)]
pub struct JsonChart {
    pub max_height: usize,
    pub max_width: usize,
    /// Downsampled, rescaled series as drawn
    pub series: Vec<usize>,
}

/// Complete analysis of one log
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub version: String,
    /// Number of tests with a start line
    pub tests: usize,
    /// Sampling resolution in seconds
    pub interval_secs: f64,
    /// Highest concurrency in the raw series
    pub peak: usize,
    /// Raw series, one sample per interval
    pub samples: Vec<ConcurrencySample>,
    pub chart: JsonChart,
    pub longest_tests: Vec<RankedDuration>,
}

impl JsonReport {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

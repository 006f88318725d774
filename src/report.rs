//! End-to-end analysis of one log
//!
//! raw lines -> events -> timeline -> concurrency series -> chart series,
//! plus the longest-test ranking, rendered in the selected output format.

use crate::chart::{render_chart, render_longest_tests, NO_DATA};
use crate::cli::OutputFormat;
use crate::concurrency::{self, ConcurrencySample};
use crate::config::ScopeConfig;
use crate::csv_output::CsvSamplesOutput;
use crate::downsample::downsample;
use crate::error::{Result, ScopeError};
use crate::extractor::EventExtractor;
use crate::json_output::{JsonChart, JsonReport};
use crate::ranking::{longest_tests, RankedDuration};
use crate::timeline::Timeline;
use std::path::Path;

/// Results of analysing one log
#[derive(Debug, Clone)]
pub struct Analysis {
    config: ScopeConfig,
    timeline: Timeline,
    samples: Vec<ConcurrencySample>,
    longest: Vec<RankedDuration>,
}

impl Analysis {
    /// Analyse log lines already in memory
    pub fn from_lines<I, S>(lines: I, config: ScopeConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;

        let events = EventExtractor::new().extract(lines)?;
        let timeline = Timeline::build(&events);
        let samples = concurrency::sample(&timeline, config.interval())?;
        let longest = longest_tests(&events, config.top);

        Ok(Self {
            config,
            timeline,
            samples,
            longest,
        })
    }

    /// Read and analyse a log file
    pub fn from_path(path: &Path, config: ScopeConfig) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScopeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read log file");
        Self::from_lines(content.lines(), config)
    }

    /// Raw concurrency series
    pub fn samples(&self) -> &[ConcurrencySample] {
        &self.samples
    }

    /// Longest tests, slowest first
    pub fn longest_tests(&self) -> &[RankedDuration] {
        &self.longest
    }

    /// Series as drawn: at most `max_width` values in `[0, max_height]`
    pub fn chart_series(&self) -> Vec<usize> {
        downsample(
            &concurrency::counts(&self.samples),
            self.config.max_height,
            self.config.max_width,
        )
    }

    /// Chart followed by the longest-test table, or the no-data notice
    pub fn render_text(&self) -> String {
        if self.samples.is_empty() {
            return format!("{NO_DATA}\n");
        }

        let mut output = render_chart(
            &self.chart_series(),
            self.config.max_height,
            self.config.block,
        );
        output.push_str(&render_longest_tests(&self.longest));
        output
    }

    pub fn json_report(&self) -> JsonReport {
        JsonReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            tests: self.timeline.intervals().len(),
            interval_secs: self.config.interval_secs,
            peak: concurrency::peak(&self.samples),
            samples: self.samples.clone(),
            chart: JsonChart {
                max_height: self.config.max_height,
                max_width: self.config.max_width,
                series: self.chart_series(),
            },
            longest_tests: self.longest.clone(),
        }
    }

    pub fn render_csv(&self) -> String {
        self.samples
            .iter()
            .copied()
            .collect::<CsvSamplesOutput>()
            .to_csv()
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => {
                let mut json = self.json_report().to_json()?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Csv => Ok(self.render_csv()),
        }
    }
}

//! Test start/pass event extraction from pabot log lines
//!
//! Each line is matched independently against two patterns:
//!
//! - start: `<timestamp> ... EXECUTING <test>`
//! - pass:  `<timestamp> ... PASSED <test> in <duration> seconds`
//!
//! The start pattern is tried first. Lines matching neither pattern (failures,
//! warnings, runner noise) produce no event. Once a line has matched, a
//! timestamp or duration that does not parse is a hard error.

use crate::error::{Result, ScopeError};
use crate::timestamp::{parse_timestamp, Timestamp, TIMESTAMP_PATTERN};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EXECUTING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<timestamp>{TIMESTAMP_PATTERN}).*?EXECUTING (?P<test>.+)"
    ))
    .expect("EXECUTING pattern is a valid regex")
});

static PASSED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<timestamp>{TIMESTAMP_PATTERN}).*?PASSED (?P<test>.+?) in (?P<duration>[\d.]+) seconds"
    ))
    .expect("PASSED pattern is a valid regex")
});

/// A single event recognised on one log line
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent {
    /// A test started executing
    Start { test: String, at: Timestamp },
    /// A test passed after `duration` seconds
    Pass {
        test: String,
        at: Timestamp,
        duration: f64,
    },
}

/// Per-test events gathered from a whole log
///
/// Maps keep first-insertion order; a repeated test name overwrites the
/// earlier value in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogEvents {
    /// Start timestamp per test
    pub starts: IndexMap<String, Timestamp>,
    /// Pass timestamp per test
    pub ends: IndexMap<String, Timestamp>,
    /// Reported duration in seconds per test
    pub durations: IndexMap<String, f64>,
}

impl LogEvents {
    /// Create an empty event set
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one line event into the per-test maps
    pub fn record(&mut self, event: LineEvent) {
        match event {
            LineEvent::Start { test, at } => {
                self.starts.insert(test, at);
            }
            LineEvent::Pass { test, at, duration } => {
                self.ends.insert(test.clone(), at);
                self.durations.insert(test, duration);
            }
        }
    }

    /// True when no start or pass line was recognised
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty() && self.ends.is_empty()
    }
}

/// Line matcher for the EXECUTING / PASSED grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct EventExtractor;

impl EventExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Match a single line
    ///
    /// `line_no` is 1-based and only used for error reporting.
    /// Returns `Ok(None)` for lines that are not start or pass events.
    pub fn match_line(&self, line_no: usize, line: &str) -> Result<Option<LineEvent>> {
        if let Some(caps) = EXECUTING_RE.captures(line) {
            let at = timestamp_at(line_no, &caps["timestamp"])?;
            let test = caps["test"].trim().to_string();
            return Ok(Some(LineEvent::Start { test, at }));
        }

        if let Some(caps) = PASSED_RE.captures(line) {
            let at = timestamp_at(line_no, &caps["timestamp"])?;
            let raw = &caps["duration"];
            let duration = raw.parse::<f64>().map_err(|_| ScopeError::Duration {
                line: line_no,
                value: raw.to_string(),
            })?;
            let test = caps["test"].trim().to_string();
            return Ok(Some(LineEvent::Pass { test, at, duration }));
        }

        Ok(None)
    }

    /// Extract start/end/duration maps from every line of a log
    pub fn extract<I, S>(&self, lines: I) -> Result<LogEvents>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut events = LogEvents::new();
        let mut scanned = 0usize;
        let mut matched = 0usize;

        for (idx, line) in lines.into_iter().enumerate() {
            scanned += 1;
            if let Some(event) = self.match_line(idx + 1, line.as_ref())? {
                tracing::trace!(line = idx + 1, ?event, "matched log line");
                matched += 1;
                events.record(event);
            }
        }

        tracing::debug!(
            scanned,
            matched,
            starts = events.starts.len(),
            ends = events.ends.len(),
            "extracted test events"
        );

        Ok(events)
    }
}

/// Extract events with a default extractor
pub fn extract<I, S>(lines: I) -> Result<LogEvents>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    EventExtractor::new().extract(lines)
}

fn timestamp_at(line_no: usize, value: &str) -> Result<Timestamp> {
    parse_timestamp(value).map_err(|source| ScopeError::Timestamp {
        line: line_no,
        value: value.to_string(),
        source,
    })
}

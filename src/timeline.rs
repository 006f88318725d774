//! Timeline reconstruction
//!
//! Turns per-test start/end/duration maps into a single time-ordered list of
//! start and end records. Tests without a start line are left out. A missing
//! end is synthesised as `start + duration`, or `start` when no duration was
//! reported either.

use crate::extractor::LogEvents;
use crate::timestamp::{seconds, Timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Kind of a timeline record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Start,
    End,
}

/// One start or end point on the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineRecord {
    pub timestamp: Timestamp,
    pub kind: EventKind,
    pub test: String,
}

/// Execution window of a single test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestInterval {
    pub test: String,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TestInterval {
    /// Whether the test is running at `t`
    ///
    /// Intervals are half-open, `[start, end)`. A zero-width interval is
    /// active only at exactly its start instant. An interval ending before it
    /// starts is never active.
    pub fn contains(&self, t: Timestamp) -> bool {
        if self.start == self.end {
            t == self.start
        } else {
            self.start <= t && t < self.end
        }
    }

    /// True for tests with no measurable duration
    pub fn is_zero_width(&self) -> bool {
        self.start == self.end
    }
}

/// Time-ordered start/end records for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timeline {
    records: Vec<TimelineRecord>,
    intervals: Vec<TestInterval>,
}

impl Timeline {
    /// Build the timeline from extracted events
    pub fn build(events: &LogEvents) -> Self {
        let mut records = Vec::with_capacity(events.starts.len() * 2);
        let mut intervals = Vec::with_capacity(events.starts.len());

        for (test, &start) in &events.starts {
            let end = match events.ends.get(test) {
                Some(&end) => end,
                None => {
                    let duration = events.durations.get(test).copied().unwrap_or(0.0);
                    start
                        .checked_add_signed(seconds(duration))
                        .unwrap_or(NaiveDateTime::MAX)
                }
            };

            records.push(TimelineRecord {
                timestamp: start,
                kind: EventKind::Start,
                test: test.clone(),
            });
            records.push(TimelineRecord {
                timestamp: end,
                kind: EventKind::End,
                test: test.clone(),
            });
            intervals.push(TestInterval {
                test: test.clone(),
                start,
                end,
            });
        }

        // Stable: ties keep insertion order
        records.sort_by_key(|record| record.timestamp);

        tracing::debug!(
            tests = intervals.len(),
            records = records.len(),
            "built timeline"
        );

        Self { records, intervals }
    }

    /// All records, ascending by timestamp
    pub fn records(&self) -> &[TimelineRecord] {
        &self.records
    }

    /// One interval per started test, in first-start order
    pub fn intervals(&self) -> &[TestInterval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Earliest timestamp on the timeline
    pub fn first(&self) -> Option<Timestamp> {
        self.records.first().map(|record| record.timestamp)
    }

    /// Latest timestamp on the timeline
    pub fn last(&self) -> Option<Timestamp> {
        self.records.last().map(|record| record.timestamp)
    }

    /// Number of tests running at `t`, by direct scan of every interval
    pub fn active_at(&self, t: Timestamp) -> usize {
        self.intervals
            .iter()
            .filter(|interval| interval.contains(t))
            .count()
    }
}

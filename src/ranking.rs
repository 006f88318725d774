//! Longest-running test ranking

use crate::extractor::LogEvents;
use serde::Serialize;

/// A test and its reported duration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDuration {
    pub test: String,
    pub duration_secs: f64,
}

/// The `count` slowest tests, longest first
///
/// Every test with a reported duration is ranked, whether or not its start
/// line was seen. Equal durations keep first-seen order.
pub fn longest_tests(events: &LogEvents, count: usize) -> Vec<RankedDuration> {
    let mut ranked: Vec<RankedDuration> = events
        .durations
        .iter()
        .map(|(test, &duration_secs)| RankedDuration {
            test: test.clone(),
            duration_secs,
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.duration_secs.total_cmp(&a.duration_secs));
    ranked.truncate(count);
    ranked
}

//! Per-interval concurrency sampling
//!
//! Walks a fixed grid from the first to the last timeline timestamp
//! (inclusive) and counts the tests running at each grid point. Each interval
//! is mapped onto the grid indices it covers and the counts are accumulated
//! with a difference array, so the cost is linear in tests plus grid points.
//! The result is identical to scanning every interval at every grid point
//! (`Timeline::active_at`).

use crate::error::{Result, ScopeError};
use crate::extractor::LogEvents;
use crate::timeline::{TestInterval, Timeline};
use crate::timestamp::Timestamp;
use chrono::TimeDelta;
use serde::Serialize;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Number of tests running at one grid point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConcurrencySample {
    pub timestamp: Timestamp,
    pub active: usize,
}

/// Sample the timeline every `interval`
///
/// An empty timeline produces no samples.
pub fn sample(timeline: &Timeline, interval: TimeDelta) -> Result<Vec<ConcurrencySample>> {
    let step = total_nanos(interval);
    if step <= 0 {
        return Err(ScopeError::InvalidConfig(format!(
            "sampling interval must be positive, got {}",
            interval
        )));
    }

    let (Some(first), Some(last)) = (timeline.first(), timeline.last()) else {
        return Ok(Vec::new());
    };

    let span = total_nanos(last - first);
    let points = usize::try_from(span / step + 1).map_err(|_| {
        ScopeError::InvalidConfig(format!(
            "timeline from {} to {} is too long to sample every {}",
            first, last, interval
        ))
    })?;

    // diff[i] holds the change in active count at grid point i
    let mut diff = vec![0i64; points + 1];
    for test in timeline.intervals() {
        if let Some((lo, hi)) = grid_range(test, first, step, points) {
            diff[lo] += 1;
            diff[hi] -= 1;
        }
    }

    let mut samples = Vec::with_capacity(points);
    let mut active = 0i64;
    for (idx, delta) in diff.iter().take(points).enumerate() {
        active += delta;
        let offset = TimeDelta::nanoseconds((idx as i128 * step) as i64);
        samples.push(ConcurrencySample {
            timestamp: first + offset,
            active: active.max(0) as usize,
        });
    }

    tracing::debug!(
        points,
        interval = %interval,
        peak = peak(&samples),
        "sampled concurrency"
    );

    Ok(samples)
}

/// Build the timeline for `events` and sample it
pub fn sample_events(events: &LogEvents, interval: TimeDelta) -> Result<Vec<ConcurrencySample>> {
    sample(&Timeline::build(events), interval)
}

/// Active counts without timestamps
pub fn counts(samples: &[ConcurrencySample]) -> Vec<usize> {
    samples.iter().map(|sample| sample.active).collect()
}

/// Highest concurrency seen in the series
pub fn peak(samples: &[ConcurrencySample]) -> usize {
    samples.iter().map(|sample| sample.active).max().unwrap_or(0)
}

/// Half-open range of grid indices at which `test` is active
fn grid_range(
    test: &TestInterval,
    first: Timestamp,
    step: i128,
    points: usize,
) -> Option<(usize, usize)> {
    let start = total_nanos(test.start - first);

    if test.is_zero_width() {
        if start % step != 0 {
            return None;
        }
        let idx = usize::try_from(start / step).ok()?;
        return (idx < points).then_some((idx, idx + 1));
    }

    if test.end < test.start {
        return None;
    }

    let end = total_nanos(test.end - first);
    let lo = ceil_index(start, step)?;
    let hi = ceil_index(end, step)?.min(points);
    (lo < hi).then_some((lo, hi))
}

/// Index of the first grid point at or after `offset`
fn ceil_index(offset: i128, step: i128) -> Option<usize> {
    usize::try_from((offset + step - 1).div_euclid(step)).ok()
}

fn total_nanos(delta: TimeDelta) -> i128 {
    delta.num_seconds() as i128 * NANOS_PER_SEC + delta.subsec_nanos() as i128
}

//! Log timestamp parsing
//!
//! Pabot and Robot Framework stamp every line with local wall-clock time in
//! the form `YYYY-MM-DD HH:MM:SS.ffffff`. No timezone is recorded, so
//! timestamps are kept naive.

use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

/// A wall-clock instant from the log
pub type Timestamp = NaiveDateTime;

/// `strftime` form of the log timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Regex fragment matching a log timestamp
pub const TIMESTAMP_PATTERN: &str = r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d+";

/// Most fractional-second digits the log format carries
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Reasons a captured timestamp is rejected
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("{0}")]
    Parse(#[from] chrono::ParseError),

    #[error("second must be in 0..59")]
    LeapSecond,

    #[error("fraction has {0} digits, at most 6 are allowed")]
    ExcessPrecision(usize),
}

/// Parse a timestamp captured from a log line
///
/// Fractions are limited to microseconds and leap seconds (`:60`) are
/// rejected.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, TimestampError> {
    if let Some((_, fraction)) = value.rsplit_once('.') {
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(TimestampError::ExcessPrecision(fraction.len()));
        }
    }

    let ts = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?;
    // chrono encodes a leap second as nanosecond >= 1e9
    if ts.nanosecond() >= 1_000_000_000 {
        return Err(TimestampError::LeapSecond);
    }
    Ok(ts)
}

/// Convert fractional seconds into a chrono duration
///
/// Negative and non-finite values collapse to zero.
pub fn seconds(secs: f64) -> chrono::TimeDelta {
    if !secs.is_finite() || secs <= 0.0 {
        return chrono::TimeDelta::zero();
    }
    // float-to-int casts saturate, so huge durations clamp instead of wrapping
    chrono::TimeDelta::microseconds((secs * 1_000_000.0).round() as i64)
}

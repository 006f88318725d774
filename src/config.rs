//! Analysis and display configuration

use crate::error::{Result, ScopeError};
use crate::timestamp::seconds;
use chrono::TimeDelta;

/// Settings for one analysis run
///
/// # Example
/// ```
/// use pabotscope::config::ScopeConfig;
///
/// let config = ScopeConfig::default();
/// assert_eq!(config.max_height, 10);
/// assert_eq!(config.max_width, 80);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeConfig {
    /// Chart height in rows
    pub max_height: usize,

    /// Chart width in columns
    pub max_width: usize,

    /// Glyph drawn for each filled cell
    pub block: char,

    /// How many of the longest tests to list
    pub top: usize,

    /// Sampling resolution in seconds
    pub interval_secs: f64,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            max_height: 10,
            max_width: 80,
            block: '▓',
            top: 10,
            interval_secs: 1.0,
        }
    }
}

impl ScopeConfig {
    /// Sampling interval as a duration
    pub fn interval(&self) -> TimeDelta {
        seconds(self.interval_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_height == 0 {
            return Err(ScopeError::InvalidConfig(
                "chart height must be at least 1 row".to_string(),
            ));
        }

        if self.max_width == 0 {
            return Err(ScopeError::InvalidConfig(
                "chart width must be at least 1 column".to_string(),
            ));
        }

        if !self.interval_secs.is_finite() || self.interval() <= TimeDelta::zero() {
            return Err(ScopeError::InvalidConfig(format!(
                "sampling interval must be a positive number of seconds, got {}",
                self.interval_secs
            )));
        }

        Ok(())
    }
}

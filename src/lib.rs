//! Pabotscope - test parallelism timelines from pabot logs
//!
//! This library reconstructs which tests ran concurrently from the
//! `EXECUTING` / `PASSED` lines of a parallel test runner log, samples the
//! number of running tests over time, and renders it as a compact ASCII
//! chart next to a table of the slowest tests.

pub mod chart;
pub mod cli;
pub mod concurrency;
pub mod config;
pub mod csv_output;
pub mod downsample;
pub mod error;
pub mod extractor;
pub mod json_output;
pub mod ranking;
pub mod report;
pub mod timeline;
pub mod timestamp;

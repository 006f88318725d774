//! CSV output format for the concurrency series
//!
//! One row per sample: `timestamp,parallel_tests`

use crate::concurrency::ConcurrencySample;

// Same shape as the log's own timestamps
const ROW_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// CSV formatter for a sampled series
#[derive(Debug, Default)]
pub struct CsvSamplesOutput {
    samples: Vec<ConcurrencySample>,
}

impl CsvSamplesOutput {
    /// Create a new CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample to the output
    pub fn add_sample(&mut self, sample: ConcurrencySample) {
        self.samples.push(sample);
    }

    fn header() -> &'static str {
        "timestamp,parallel_tests"
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for sample in &self.samples {
            output.push_str(&format!(
                "{},{}\n",
                sample.timestamp.format(ROW_TIMESTAMP_FORMAT),
                sample.active
            ));
        }

        output
    }
}

impl FromIterator<ConcurrencySample> for CsvSamplesOutput {
    fn from_iter<I: IntoIterator<Item = ConcurrencySample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::parse_timestamp;

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(CsvSamplesOutput::new().to_csv(), "timestamp,parallel_tests\n");
    }

    #[test]
    fn test_rows() {
        let mut csv = CsvSamplesOutput::new();
        csv.add_sample(ConcurrencySample {
            timestamp: parse_timestamp("2024-01-01 10:00:00.000000").unwrap(),
            active: 3,
        });
        csv.add_sample(ConcurrencySample {
            timestamp: parse_timestamp("2024-01-01 10:00:01.250000").unwrap(),
            active: 0,
        });

        let output = csv.to_csv();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-01-01 10:00:00.000000,3");
        assert_eq!(lines[2], "2024-01-01 10:00:01.250000,0");
    }
}

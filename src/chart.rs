//! Text output: ASCII concurrency chart and longest-test table

use crate::ranking::RankedDuration;

/// Printed in place of the chart when the log held no timeline data
pub const NO_DATA: &str = "No data.";

const TABLE_RULE_WIDTH: usize = 50;
const NAME_WIDTH: usize = 35;
const DURATION_WIDTH: usize = 12;

/// Draw a downsampled series as horizontal bar rows
///
/// Produces `max_height` rows from the top down. Row `level` has `block` in
/// every column whose value is at least `level`. Trailing blanks are trimmed.
pub fn render_chart(scaled: &[usize], max_height: usize, block: char) -> String {
    let mut output = String::new();

    for level in (1..=max_height).rev() {
        let row: String = scaled
            .iter()
            .map(|&height| if height >= level { block } else { ' ' })
            .collect();
        output.push_str(row.trim_end());
        output.push('\n');
    }

    output
}

/// Format the longest-running tests as a fixed-width table
pub fn render_longest_tests(ranked: &[RankedDuration]) -> String {
    let rule = "-".repeat(TABLE_RULE_WIDTH);
    let mut output = String::new();

    output.push_str("\nTop Longest Running Tests:\n");
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "{:<NAME_WIDTH$} {:>DURATION_WIDTH$}\n",
        "Test Name", "Duration (s)"
    ));
    output.push_str(&rule);
    output.push('\n');

    for entry in ranked {
        output.push_str(&format!(
            "{:<NAME_WIDTH$} {:>DURATION_WIDTH$.2}\n",
            truncate_name(&entry.test),
            entry.duration_secs
        ));
    }

    output.push_str(&rule);
    output.push('\n');
    output
}

fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(NAME_WIDTH) {
        Some((byte_idx, _)) => &name[..byte_idx],
        None => name,
    }
}

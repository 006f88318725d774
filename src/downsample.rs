//! Downsampling of a concurrency series to a display budget
//!
//! A series longer than the chart width is reduced by picking evenly spaced
//! indices (first and last always included); shorter series pass through.
//! Selected values are then rescaled linearly so the largest one maps to the
//! chart height.

/// Indices picked from a series of `len` values for a chart `width` columns wide
pub fn select_indices(len: usize, width: usize) -> Vec<usize> {
    if len == 0 || width == 0 {
        return Vec::new();
    }
    if len <= width {
        return (0..len).collect();
    }
    if width == 1 {
        return vec![0];
    }

    let last = (len - 1) as u128;
    let gaps = (width - 1) as u128;
    (0..width as u128)
        // round(k * last / gaps), halves rounding up
        .map(|k| ((2 * k * last + gaps) / (2 * gaps)) as usize)
        .collect()
}

/// Reduce `series` to at most `max_width` values scaled into `[0, max_height]`
pub fn downsample(series: &[usize], max_height: usize, max_width: usize) -> Vec<usize> {
    let selected: Vec<usize> = select_indices(series.len(), max_width)
        .into_iter()
        .map(|idx| series[idx])
        .collect();

    let max_value = selected.iter().copied().max().unwrap_or(0).max(1) as u128;
    let scaled: Vec<usize> = selected
        .iter()
        .map(|&value| (value as u128 * max_height as u128 / max_value) as usize)
        .collect();

    tracing::debug!(
        input = series.len(),
        output = scaled.len(),
        max_height,
        "downsampled series"
    );

    scaled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_passes_through() {
        assert_eq!(downsample(&[1, 2, 1, 0], 10, 80), vec![5, 10, 5, 0]);
    }

    #[test]
    fn test_long_series_is_cut_to_width() {
        let series: Vec<usize> = (0..1000).map(|i| i % 7).collect();
        let out = downsample(&series, 10, 80);
        assert_eq!(out.len(), 80);
        assert!(out.iter().all(|&v| v <= 10));
    }

    #[test]
    fn test_indices_include_both_ends() {
        let idx = select_indices(10, 4);
        assert_eq!(idx, vec![0, 3, 6, 9]);

        let idx = select_indices(11, 3);
        assert_eq!(idx, vec![0, 5, 10]);
    }

    #[test]
    fn test_indices_round_to_nearest() {
        // 9 / 4 = 2.25, 4.5, 6.75
        assert_eq!(select_indices(10, 5), vec![0, 2, 5, 7, 9]);
    }

    #[test]
    fn test_single_column_takes_first_value() {
        assert_eq!(select_indices(5, 1), vec![0]);
        assert_eq!(downsample(&[3, 9, 1], 4, 1), vec![4]);
    }

    #[test]
    fn test_all_zero_series_stays_zero() {
        assert_eq!(downsample(&[0, 0, 0], 10, 80), vec![0, 0, 0]);
    }

    #[test]
    fn test_values_are_floored() {
        // 1/3 * 10 = 3.33, 2/3 * 10 = 6.67
        assert_eq!(downsample(&[1, 2, 3], 10, 80), vec![3, 6, 10]);
    }

    #[test]
    fn test_empty_series() {
        assert!(downsample(&[], 10, 80).is_empty());
        assert!(select_indices(0, 80).is_empty());
    }

    #[test]
    fn test_zero_width() {
        assert!(downsample(&[1, 2, 3], 10, 0).is_empty());
    }
}

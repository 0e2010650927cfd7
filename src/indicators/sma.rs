// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of the most recent `period` values:
//   SMA = (x_{n-p} + ... + x_{n-1}) / p
// =============================================================================

/// Mean of the trailing `period` values of `series`.
///
/// Returns `None` when `period` is zero, the series is shorter than
/// `period`, or the mean is non-finite.
pub fn calculate_sma(series: &[f64], period: usize) -> Option<f64> {
    let window = trailing_window(series, period)?;
    let mean = window.iter().sum::<f64>() / period as f64;
    mean.is_finite().then_some(mean)
}

/// The last `period` elements of `series`, or `None` if there are not enough.
pub(crate) fn trailing_window(series: &[f64], period: usize) -> Option<&[f64]> {
    if period == 0 || series.len() < period {
        return None;
    }
    Some(&series[series.len() - period..])
}

// =============================================================================
// Stochastic Oscillator (%K)
// =============================================================================
//
// %K = 100 * (close - lowest_low) / (highest_high - lowest_low)
//
// over the last `period` bars. A zero-range window returns 50 (neutral).

use super::sma::trailing_window;

/// Compute %K for the latest bar.
///
/// Returns `None` when `period` is zero, any of the three series holds
/// fewer than `period` values, or the window contains a non-finite value.
pub fn calculate_stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Option<f64> {
    let highs = trailing_window(highs, period)?;
    let lows = trailing_window(lows, period)?;
    let close = *trailing_window(closes, period)?.last()?;

    if !close.is_finite() || highs.iter().chain(lows).any(|v| !v.is_finite()) {
        return None;
    }

    let highest = highs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest = lows.iter().copied().fold(f64::INFINITY, f64::min);

    if highest == lowest {
        return Some(50.0);
    }

    let k = 100.0 * (close - lowest) / (highest - lowest);
    k.is_finite().then_some(k)
}

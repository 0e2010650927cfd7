// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_0      = close_0
//   EMA_t      = close_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The recurrence runs over the whole series, not only the trailing window, so
// older prices keep a decaying influence on the result.
// =============================================================================

/// Compute the final EMA value for `closes` with look-back `period`.
///
/// Seeded with the first close and folded left-to-right over every value.
///
/// # Edge cases
/// - `period == 0` => `None`
/// - `closes.len() < period` => `None`
/// - A non-finite intermediate value => `None`
pub fn calculate_ema(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let multiplier = 2.0 / (period + 1) as f64;
    let (&seed, rest) = closes.split_first()?;

    let ema = rest
        .iter()
        .try_fold(seed, |prev, &close| {
            let next = close * multiplier + prev * (1.0 - multiplier);
            next.is_finite().then_some(next)
        })?;

    ema.is_finite().then_some(ema)
}

// =============================================================================
// Relative Strength Index (RSI) — simple-average variant
// =============================================================================
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Split deltas into gains (positive part) and losses (absolute value
//          of the negative part).
// Step 3 — Average the last `period` gains and losses (plain mean, no
//          Wilder smoothing).
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// When avg_loss is zero the RSI is pinned to 100.
// =============================================================================

/// Compute the current RSI for `closes` using the last `period` deltas.
///
/// # Edge cases
/// - `period == 0` => `None`
/// - `closes.len() < period + 1` => `None` (need `period` deltas)
/// - Average loss of zero => `Some(100.0)`, including a perfectly flat run.
/// - A non-finite close inside the window => `None`
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let recent = &closes[closes.len() - (period + 1)..];
    if recent.iter().any(|c| !c.is_finite()) {
        return None;
    }
    let (sum_gain, sum_loss) = recent
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0_f64, 0.0_f64), |(g, l), d| {
            if d > 0.0 {
                (g + d, l)
            } else if d < 0.0 {
                (g, l - d)
            } else {
                (g, l)
            }
        });

    let period_f = period as f64;
    rsi_from_averages(sum_gain / period_f, sum_loss / period_f)
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    let rsi = if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    };

    rsi.is_finite().then_some(rsi)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_none());
    }

    #[test]
    fn rsi_period_zero() {
        assert!(calculate_rsi(&[1.0, 2.0, 3.0], 0).is_none());
    }

    #[test]
    fn rsi_insufficient_data() {
        // 14 closes => 13 deltas < 14.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(calculate_rsi(&closes, 14).is_none());
    }

    #[test]
    fn rsi_all_gains() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14).unwrap();
        assert!((rsi - 100.0).abs() < 1e-10, "expected 100.0, got {rsi}");
    }

    #[test]
    fn rsi_all_losses() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14).unwrap();
        assert!(rsi.abs() < 1e-10, "expected 0.0, got {rsi}");
    }

    #[test]
    fn rsi_flat_market_is_pinned_high() {
        let closes = vec![100.0; 30];
        assert_eq!(calculate_rsi(&closes, 14), Some(100.0));
    }

    #[test]
    fn rsi_only_trailing_deltas_count() {
        // Early crash followed by 14 steady gains: the crash is outside the window.
        let mut closes = vec![100.0, 50.0];
        closes.extend((1..=14).map(|x| 50.0 + x as f64));
        assert_eq!(calculate_rsi(&closes, 14), Some(100.0));
    }

    #[test]
    fn rsi_balanced_moves() {
        // Alternating +1 / -1 => avg_gain == avg_loss => RSI 50.
        let closes = vec![10.0, 11.0, 10.0, 11.0, 10.0];
        let rsi = calculate_rsi(&closes, 4).unwrap();
        assert!((rsi - 50.0).abs() < 1e-10);
    }

    #[test]
    fn rsi_handles_nan_in_window() {
        let mut closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        closes[18] = f64::NAN;
        assert!(calculate_rsi(&closes, 14).is_none());
    }

    #[test]
    fn rsi_ignores_nan_outside_window() {
        let mut closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        closes[0] = f64::NAN;
        assert_eq!(calculate_rsi(&closes, 14), Some(100.0));
    }

    #[test]
    fn rsi_handles_infinity_in_window() {
        let mut closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        closes[19] = f64::INFINITY;
        assert!(calculate_rsi(&closes, 14).is_none());
    }

    #[test]
    fn rsi_range_check() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        for p in 1..closes.len() {
            let v = calculate_rsi(&closes, p).unwrap();
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range for period {p}");
        }
    }
}

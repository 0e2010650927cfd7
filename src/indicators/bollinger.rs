// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), where σ is the sample standard deviation
// (divisor p - 1) of the trailing window.

use super::sma::trailing_window;

/// Result of a Bollinger Band calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Calculate Bollinger Bands over the last `period` closes.
///
/// Returns `Some(BollingerBands)` containing:
/// - `upper`  = SMA + `num_std` * σ
/// - `middle` = SMA
/// - `lower`  = SMA - `num_std` * σ
///
/// Returns `None` (all three bands absent together) when:
/// - Fewer than `period` data points.
/// - `period < 2` (sample deviation needs two points).
/// - Any band is non-finite.
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> Option<BollingerBands> {
    if period < 2 {
        return None;
    }
    let window = trailing_window(closes, period)?;

    let middle = window.iter().sum::<f64>() / period as f64;
    let variance =
        window.iter().map(|x| (x - middle).powi(2)).sum::<f64>() / (period - 1) as f64;
    let std_dev = variance.sqrt();

    let upper = middle + num_std * std_dev;
    let lower = middle - num_std * std_dev;

    if upper.is_finite() && lower.is_finite() {
        Some(BollingerBands {
            upper,
            middle,
            lower,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_basic() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let bb = calculate_bollinger(&closes, 20, 2.0).unwrap();
        assert!(bb.upper > bb.middle);
        assert!(bb.lower < bb.middle);
        assert!((bb.middle - 10.5).abs() < 1e-10);
    }

    #[test]
    fn bollinger_uses_sample_std() {
        // [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, squared deviations sum 32.
        // Sample variance = 32 / 7.
        let closes = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bb = calculate_bollinger(&closes, 8, 2.0).unwrap();
        let std = (32.0_f64 / 7.0).sqrt();
        assert!((bb.middle - 5.0).abs() < 1e-10);
        assert!((bb.upper - (5.0 + 2.0 * std)).abs() < 1e-10);
        assert!((bb.lower - (5.0 - 2.0 * std)).abs() < 1e-10);
    }

    #[test]
    fn bollinger_insufficient_data() {
        let closes = vec![1.0, 2.0, 3.0];
        assert!(calculate_bollinger(&closes, 20, 2.0).is_none());
    }

    #[test]
    fn bollinger_period_below_two() {
        assert!(calculate_bollinger(&[1.0, 2.0], 1, 2.0).is_none());
        assert!(calculate_bollinger(&[1.0, 2.0], 0, 2.0).is_none());
    }

    #[test]
    fn bollinger_flat() {
        let closes = vec![10.0; 25];
        let bb = calculate_bollinger(&closes, 20, 2.0).unwrap();
        assert_eq!(bb.upper, 10.0);
        assert_eq!(bb.middle, 10.0);
        assert_eq!(bb.lower, 10.0);
    }

    #[test]
    fn bollinger_bands_ordered() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13, 43.9, 44.0,
            44.5, 45.1,
        ];
        for p in 2..=closes.len() {
            let bb = calculate_bollinger(&closes, p, 2.0).unwrap();
            assert!(bb.upper >= bb.middle && bb.middle >= bb.lower, "period {p}");
        }
    }
}

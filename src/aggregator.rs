// =============================================================================
// Indicator Aggregator
// =============================================================================
//
// Runs the whole indicator library over one bar sequence and collects the
// results into a fixed-key report. Periods are fixed here; callers needing
// other periods use `crate::indicators` directly.
//
// Every indicator is computed independently: one indicator lacking history
// never prevents the others from being reported.
// =============================================================================

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::MalformedBarError;
use crate::indicators::{
    calculate_bollinger, calculate_ema, calculate_macd, calculate_rsi, calculate_sma,
    calculate_stochastic,
};
use crate::market_data::{parse_bars, validate_bars, validate_series};
use crate::types::{Bar, BarSeries};

pub const SMA_SHORT_PERIOD: usize = 10;
pub const SMA_LONG_PERIOD: usize = 20;
pub const EMA_FAST_PERIOD: usize = 12;
pub const EMA_SLOW_PERIOD: usize = 26;
pub const RSI_PERIOD: usize = 14;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_NUM_STD: f64 = 2.0;
pub const STOCHASTIC_PERIOD: usize = 14;

/// Flat indicator snapshot for the most recent bar.
///
/// `None` fields serialize as JSON `null` and mean "not computable from the
/// supplied history".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndicatorReport {
    pub current_price: Option<f64>,
    /// Always `None`: a 24h-ago reference price is not part of a single bar window.
    pub price_change_24h: Option<f64>,
    /// Volume of the last bar only.
    pub volume_24h: Option<f64>,
    pub sma_20: Option<f64>,
    pub sma_10: Option<f64>,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
    pub rsi_14: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub macd_line: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub stochastic_k: Option<f64>,
}

impl IndicatorReport {
    /// Every key the report carries, in serialization order.
    pub const KEYS: [&'static str; 15] = [
        "current_price",
        "price_change_24h",
        "volume_24h",
        "sma_20",
        "sma_10",
        "ema_12",
        "ema_26",
        "rsi_14",
        "bb_upper",
        "bb_middle",
        "bb_lower",
        "macd_line",
        "macd_signal",
        "macd_histogram",
        "stochastic_k",
    ];

    /// Look up a value by its report key.
    ///
    /// Returns `None` for an unknown key and `Some(None)` for a known key whose
    /// value is absent.
    pub fn get(&self, key: &str) -> Option<Option<f64>> {
        let value = match key {
            "current_price" => self.current_price,
            "price_change_24h" => self.price_change_24h,
            "volume_24h" => self.volume_24h,
            "sma_20" => self.sma_20,
            "sma_10" => self.sma_10,
            "ema_12" => self.ema_12,
            "ema_26" => self.ema_26,
            "rsi_14" => self.rsi_14,
            "bb_upper" => self.bb_upper,
            "bb_middle" => self.bb_middle,
            "bb_lower" => self.bb_lower,
            "macd_line" => self.macd_line,
            "macd_signal" => self.macd_signal,
            "macd_histogram" => self.macd_histogram,
            "stochastic_k" => self.stochastic_k,
            _ => return None,
        };
        Some(value)
    }

    /// The report as `(key, value)` pairs in [`Self::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, Option<f64>)> {
        Self::KEYS
            .iter()
            .map(|&key| (key, self.get(key).flatten()))
            .collect()
    }

    /// Keys whose value is absent.
    pub fn absent_keys(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter_map(|(key, value)| value.is_none().then_some(key))
            .collect()
    }
}

/// Compute the full report from typed bars (oldest first).
///
/// Bars built by hand skip the extractor, so they are checked here with the
/// same finite-value rule before anything is computed.
pub fn calculate_indicators(bars: &[Bar]) -> Result<IndicatorReport, MalformedBarError> {
    validate_bars(bars)?;
    Ok(build_report(&BarSeries::from_bars(bars)))
}

/// Parse raw JSON bar records and compute the report.
///
/// The only failure mode is malformed input; short history yields absent
/// fields instead.
pub fn calculate_indicators_from_json(input: &Value) -> Result<IndicatorReport, MalformedBarError> {
    let bars = parse_bars(input)?;
    Ok(build_report(&BarSeries::from_bars(&bars)))
}

/// Compute the full report from pre-extracted series.
///
/// Fails when the series differ in length or hold a non-finite value.
pub fn calculate_from_series(series: &BarSeries) -> Result<IndicatorReport, MalformedBarError> {
    validate_series(series)?;
    Ok(build_report(series))
}

/// Run every indicator over series that are known to be finite and aligned.
fn build_report(series: &BarSeries) -> IndicatorReport {
    let closes = &series.closes;

    let bollinger = calculate_bollinger(closes, BOLLINGER_PERIOD, BOLLINGER_NUM_STD);
    let macd = calculate_macd(closes);

    let report = IndicatorReport {
        current_price: series.last_close(),
        price_change_24h: None,
        volume_24h: series.last_volume(),
        sma_20: calculate_sma(closes, SMA_LONG_PERIOD),
        sma_10: calculate_sma(closes, SMA_SHORT_PERIOD),
        ema_12: calculate_ema(closes, EMA_FAST_PERIOD),
        ema_26: calculate_ema(closes, EMA_SLOW_PERIOD),
        rsi_14: calculate_rsi(closes, RSI_PERIOD),
        bb_upper: bollinger.map(|bb| bb.upper),
        bb_middle: bollinger.map(|bb| bb.middle),
        bb_lower: bollinger.map(|bb| bb.lower),
        macd_line: macd.map(|m| m.line),
        macd_signal: macd.map(|m| m.signal),
        macd_histogram: macd.map(|m| m.histogram),
        stochastic_k: calculate_stochastic(&series.highs, &series.lows, closes, STOCHASTIC_PERIOD),
    };

    debug!(
        bars = series.len(),
        absent = ?report.absent_keys(),
        "indicator report computed"
    );

    report
}

// =============================================================================
// Shared types used across the TA engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// A single OHLCV bar (one sampling interval), oldest-first in any slice.
///
/// Built by `market_data::parse_bar`; there is no direct deserialization so
/// every raw record goes through the same coercion rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Interval open time in epoch milliseconds, when the source supplies it.
    pub open_time: Option<i64>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Parallel per-field series decomposed from a bar slice.
///
/// All four vectors always have the same length as the source slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl BarSeries {
    /// Decompose `bars` into close/high/low/volume series in one pass.
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut series = Self {
            closes: Vec::with_capacity(bars.len()),
            highs: Vec::with_capacity(bars.len()),
            lows: Vec::with_capacity(bars.len()),
            volumes: Vec::with_capacity(bars.len()),
        };
        for bar in bars {
            series.closes.push(bar.close);
            series.highs.push(bar.high);
            series.lows.push(bar.low);
            series.volumes.push(bar.volume);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Close of the most recent bar.
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// Volume of the most recent bar.
    pub fn last_volume(&self) -> Option<f64> {
        self.volumes.last().copied()
    }
}

/// How the driver renders the JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputStyle {
    Pretty,
    Compact,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::Pretty
    }
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "Pretty"),
            Self::Compact => write!(f, "Compact"),
        }
    }
}

impl std::str::FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown output style: {other}")),
        }
    }
}

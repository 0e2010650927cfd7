// =============================================================================
// TA Engine — technical-analysis indicators over OHLCV bars
// =============================================================================
//
// raw bars -> market_data (extractor) -> BarSeries -> aggregator -> report
//
// The whole computation is a pure function of its input: no I/O, no shared
// state, safe to call from any number of threads at once.
// =============================================================================

pub mod aggregator;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod runtime_config;
pub mod types;

pub use aggregator::{
    calculate_from_series, calculate_indicators, calculate_indicators_from_json, IndicatorReport,
};
pub use error::MalformedBarError;
pub use types::{Bar, BarSeries, OutputStyle};

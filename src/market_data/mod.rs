pub mod bar_parser;

// Re-export the extractor entry points (e.g. `use crate::market_data::parse_bars`).
pub use bar_parser::{extract_series, parse_bar, parse_bars, validate_bars, validate_series};

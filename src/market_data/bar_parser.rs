// =============================================================================
// Bar Series Extractor
// =============================================================================
//
// Turns raw JSON bar records into typed `Bar`s. Two record shapes are accepted:
//
//   kline row  : [open_time, open, high, low, close, volume, ...extra columns]
//   bar object : { "open": .., "high": .., "low": .., "close": .., "volume": .. }
//
// Exchanges send prices as decimal strings, so every numeric field may be
// either a JSON number or a numeric string.
// =============================================================================

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::MalformedBarError;
use crate::types::{Bar, BarSeries};

/// Column positions inside a kline row.
const KLINE_OPEN_TIME: usize = 0;
const KLINE_OPEN: usize = 1;
const KLINE_HIGH: usize = 2;
const KLINE_LOW: usize = 3;
const KLINE_CLOSE: usize = 4;
const KLINE_VOLUME: usize = 5;

/// Parse a JSON document (an array of bar records) into typed bars.
///
/// Fails on the first malformed record; partial output is never returned.
pub fn parse_bars(input: &Value) -> Result<Vec<Bar>, MalformedBarError> {
    let rows = input.as_array().ok_or(MalformedBarError::NotAnArray {
        found: json_type(input),
    })?;

    let bars = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_bar(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    warn_if_unordered(&bars);
    debug!(bars = bars.len(), "bar records parsed");
    Ok(bars)
}

/// Parse a JSON document straight into the four parallel series.
pub fn extract_series(input: &Value) -> Result<BarSeries, MalformedBarError> {
    let bars = parse_bars(input)?;
    Ok(BarSeries::from_bars(&bars))
}

/// Parse a single bar record at position `index`.
pub fn parse_bar(index: usize, row: &Value) -> Result<Bar, MalformedBarError> {
    match row {
        Value::Array(cols) => {
            let field = |pos: usize, name: &'static str| {
                coerce_f64(index, name, cols.get(pos).unwrap_or(&Value::Null))
            };
            Ok(Bar {
                open_time: cols.get(KLINE_OPEN_TIME).and_then(parse_timestamp),
                open: field(KLINE_OPEN, "open")?,
                high: field(KLINE_HIGH, "high")?,
                low: field(KLINE_LOW, "low")?,
                close: field(KLINE_CLOSE, "close")?,
                volume: field(KLINE_VOLUME, "volume")?,
            })
        }
        Value::Object(map) => {
            let field = |name: &'static str| {
                coerce_f64(index, name, map.get(name).unwrap_or(&Value::Null))
            };
            Ok(Bar {
                open_time: map.get("open_time").and_then(parse_timestamp),
                open: field("open")?,
                high: field("high")?,
                low: field("low")?,
                close: field("close")?,
                volume: field("volume")?,
            })
        }
        other => Err(MalformedBarError::UnsupportedShape {
            index,
            found: json_type(other),
        }),
    }
}

/// Check already-typed bars against the same finite-value rule `parse_bar`
/// applies to raw records.
pub fn validate_bars(bars: &[Bar]) -> Result<(), MalformedBarError> {
    for (index, bar) in bars.iter().enumerate() {
        let fields = [
            ("open", bar.open),
            ("high", bar.high),
            ("low", bar.low),
            ("close", bar.close),
            ("volume", bar.volume),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MalformedBarError::NonFinite { index, field });
        }
    }
    Ok(())
}

/// Check pre-extracted series: equal lengths and finite values only.
pub fn validate_series(series: &BarSeries) -> Result<(), MalformedBarError> {
    let columns = [
        ("close", &series.closes),
        ("high", &series.highs),
        ("low", &series.lows),
        ("volume", &series.volumes),
    ];
    for (field, values) in columns {
        if values.len() != series.len() {
            return Err(MalformedBarError::MissingField {
                index: values.len().min(series.len()),
                field,
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(MalformedBarError::NonFinite { index, field });
        }
    }
    Ok(())
}

/// Coerce a JSON number or numeric string into a finite `f64`.
fn coerce_f64(index: usize, field: &'static str, val: &Value) -> Result<f64, MalformedBarError> {
    let parsed = match val {
        Value::Null => return Err(MalformedBarError::MissingField { index, field }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let value = parsed.ok_or_else(|| MalformedBarError::NotNumeric {
        index,
        field,
        value: val.to_string(),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(MalformedBarError::NonFinite { index, field })
    }
}

/// Timestamps are informational; anything unusable is simply dropped.
fn parse_timestamp(val: &Value) -> Option<i64> {
    match val {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Chronological order is the supplier's contract; we only report breaches.
fn warn_if_unordered(bars: &[Bar]) {
    for (i, pair) in bars.windows(2).enumerate() {
        if let (Some(prev), Some(next)) = (pair[0].open_time, pair[1].open_time) {
            if next <= prev {
                warn!(
                    index = i + 1,
                    prev_open_time = prev,
                    open_time = next,
                    "bars are not in strictly ascending time order"
                );
                return;
            }
        }
    }
}

fn json_type(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

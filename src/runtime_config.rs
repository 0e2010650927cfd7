// =============================================================================
// Runtime Configuration — driver settings for the `ta-engine` binary
// =============================================================================
//
// Controls where bars are read from and how the report is written. Indicator
// periods are fixed by the aggregator and deliberately absent here.
//
// All fields carry `#[serde(default)]` so that a partial (or empty) config
// file always loads. Environment variables override file values.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::types::OutputStyle;

pub const DEFAULT_CONFIG_PATH: &str = "ta_config.json";

pub const ENV_INPUT: &str = "TA_INPUT";
pub const ENV_OUTPUT_STYLE: &str = "TA_OUTPUT_STYLE";
pub const ENV_SYMBOL: &str = "TA_SYMBOL";

/// Top-level configuration for the driver binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Read bars from this file instead of stdin.
    #[serde(default)]
    pub input_path: Option<String>,

    /// JSON rendering of the report.
    #[serde(default)]
    pub output_style: OutputStyle,

    /// Label attached to log lines; never affects the computation.
    #[serde(default)]
    pub symbol: Option<String>,
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            output_style = %config.output_style,
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Apply environment overrides using `lookup` (normally `std::env::var`).
    ///
    /// Empty values are ignored; an unknown output style is logged and skipped.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(input) = non_empty(ENV_INPUT) {
            self.input_path = Some(input);
        }
        if let Some(symbol) = non_empty(ENV_SYMBOL) {
            self.symbol = Some(symbol.to_uppercase());
        }
        if let Some(style) = non_empty(ENV_OUTPUT_STYLE) {
            match style.parse::<OutputStyle>() {
                Ok(style) => self.output_style = style,
                Err(e) => warn!(var = ENV_OUTPUT_STYLE, error = %e, "ignoring output style override"),
            }
        }
    }
}

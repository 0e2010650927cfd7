// =============================================================================
// TA Engine — Main Entry Point
// =============================================================================
//
// Reads a JSON array of bars (kline rows or bar objects) from stdin or a file,
// computes the indicator report and writes it to stdout as a JSON object.
// Logs go to stderr so stdout stays machine-readable.
// =============================================================================

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ta_engine::aggregator::calculate_indicators_from_json;
use ta_engine::runtime_config::{RuntimeConfig, DEFAULT_CONFIG_PATH};
use ta_engine::types::OutputStyle;

fn main() -> Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = RuntimeConfig::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });
    config.apply_env(|key| std::env::var(key).ok());

    let symbol = config.symbol.as_deref().unwrap_or("-");

    // ── 2. Read bars ─────────────────────────────────────────────────────
    let raw = match config.input_path.as_deref() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read bars from {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read bars from stdin")?;
            buf
        }
    };

    let input: serde_json::Value =
        serde_json::from_str(&raw).context("bar input is not valid JSON")?;

    // ── 3. Compute ───────────────────────────────────────────────────────
    let report = calculate_indicators_from_json(&input)
        .map_err(|e| {
            error!(symbol, bar_index = ?e.index(), error = %e, "rejecting malformed bar input");
            e
        })
        .context("malformed bar input")?;

    info!(
        symbol,
        current_price = ?report.current_price,
        rsi_14 = ?report.rsi_14,
        absent = report.absent_keys().len(),
        "indicator report ready"
    );

    // ── 4. Emit ──────────────────────────────────────────────────────────
    let rendered = match config.output_style {
        OutputStyle::Pretty => serde_json::to_string_pretty(&report),
        OutputStyle::Compact => serde_json::to_string(&report),
    }
    .context("failed to serialise indicator report")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed to write report to stdout")?;

    Ok(())
}

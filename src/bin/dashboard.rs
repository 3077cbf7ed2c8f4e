//! Dashboard preparation CLI.
//!
//! Synthesizes candle data for a symbol, computes the indicator columns,
//! writes the prepared series to `<symbol>_dashboard.json` for an external
//! renderer, and prints the summary lines.
//!
//! Usage: dashboard [SYMBOL] [PERIOD] [SEED]
//! Defaults: AAPL 1y 42

use std::env;
use std::fs;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use chartprep::chart::{CandleSource, DashboardConfig, DashboardData, SyntheticSource};
use chartprep::indicators::timeframe::Period;

const DEFAULT_SEED: u64 = 42;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "AAPL".to_string());
    let period: Period = args
        .next()
        .as_deref()
        .unwrap_or("1y")
        .parse()
        .map_err(anyhow::Error::msg)?;
    let seed: u64 = match args.next() {
        Some(value) => value.parse().context("seed must be an unsigned integer")?,
        None => DEFAULT_SEED,
    };

    let source = SyntheticSource::new(seed);
    tracing::info!(symbol = %symbol, period = %period, source = source.name(), "building dashboard");

    let candles = source.fetch(&symbol, period)?;
    let dashboard = DashboardData::build(&symbol, &candles, &DashboardConfig::default())?;

    let path = format!("{}_dashboard.json", symbol);
    let json = serde_json::to_string_pretty(&dashboard)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path))?;
    tracing::info!(path = %path, "dashboard exported");

    let summary = &dashboard.summary;
    println!("Current Price: ${:.2}", summary.last_close);
    if let (Some(change), Some(pct)) = (summary.daily_change, summary.daily_change_pct) {
        println!("Daily Change: ${:.2} ({:+.2}%)", change, pct);
    }
    println!("52W High: ${:.2}", summary.high_52w);
    println!("52W Low: ${:.2}", summary.low_52w);
    if let Some(rsi) = summary.rsi {
        println!("Current RSI: {:.2}", rsi);
    }

    Ok(())
}

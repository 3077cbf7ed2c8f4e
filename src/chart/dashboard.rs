//! Dashboard assembly: indicator columns and summary statistics.
//!
//! Everything a renderer needs for the classic four-panel layout (price +
//! overlays, volume, RSI, MACD): per-candle indicator columns padded with
//! `None` during warm-up so every column lines up with the candle list,
//! plus the headline summary numbers.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::indicators::candle::Candle;
use crate::indicators::macd::{
    DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL, DEFAULT_MACD_SLOW, macd_series,
};
use crate::indicators::momentum::{DEFAULT_RSI_PERIOD, rsi_series};
use crate::indicators::moving_averages::sma_series;
use crate::indicators::volatility::{
    DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_WIDTH, bollinger_series,
};

/// Rolling window (trading days) for the 52-week high/low summary lines.
const YEAR_WINDOW: usize = 252;

/// Indicator parameters for one dashboard build.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Simple moving average windows to overlay on the price panel
    pub ma_windows: Vec<usize>,
    pub bollinger_period: usize,
    pub bollinger_width: f64,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ma_windows: vec![20, 50, 200],
            bollinger_period: DEFAULT_BOLLINGER_PERIOD,
            bollinger_width: DEFAULT_BOLLINGER_WIDTH,
            rsi_period: DEFAULT_RSI_PERIOD,
            macd_fast: DEFAULT_MACD_FAST,
            macd_slow: DEFAULT_MACD_SLOW,
            macd_signal: DEFAULT_MACD_SIGNAL,
        }
    }
}

/// Direction coloring for a volume bar.
///
/// Down when the candle closed below its open, otherwise up (flat candles
/// render as up, matching common charting conventions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeColor {
    Up,
    Down,
}

/// One labeled overlay line, padded to candle length.
#[derive(Debug, Clone, Serialize)]
pub struct OverlaySeries {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// Headline numbers for the dashboard, mirroring what a summary panel shows.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub last_close: f64,
    /// Close-to-close change vs the previous candle; `None` with one candle
    pub daily_change: Option<f64>,
    pub daily_change_pct: Option<f64>,
    /// Highest high over the last `min(252, len)` candles
    pub high_52w: f64,
    /// Lowest low over the last `min(252, len)` candles
    pub low_52w: f64,
    /// Final RSI value, `None` while the indicator is still warming up
    pub rsi: Option<f64>,
}

impl Summary {
    fn from_candles(candles: &[Candle], rsi: &[Option<f64>]) -> Self {
        let last_close = candles[candles.len() - 1].get_close();

        let (daily_change, daily_change_pct) = match candles.len() {
            0 | 1 => (None, None),
            len => {
                let prev_close = candles[len - 2].get_close();
                let change = last_close - prev_close;
                (Some(change), Some(change / prev_close * 100.0))
            }
        };

        let window = &candles[candles.len() - YEAR_WINDOW.min(candles.len())..];
        let high_52w = window
            .iter()
            .map(Candle::get_high)
            .fold(f64::NEG_INFINITY, f64::max);
        let low_52w = window
            .iter()
            .map(Candle::get_low)
            .fold(f64::INFINITY, f64::min);

        Self {
            last_close,
            daily_change,
            daily_change_pct,
            high_52w,
            low_52w,
            rsi: rsi.last().copied().flatten(),
        }
    }
}

/// A fully prepared dashboard, ready to serialize for a renderer.
///
/// Every column has exactly `candles.len()` entries; indicator warm-up rows
/// are `None` and serialize as JSON `null`.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub symbol: String,
    pub candles: Vec<Candle>,
    pub volume_colors: Vec<VolumeColor>,
    pub moving_averages: Vec<OverlaySeries>,
    pub bb_middle: Vec<Option<f64>>,
    pub bb_upper: Vec<Option<f64>>,
    pub bb_lower: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub macd_histogram: Vec<Option<f64>>,
    pub summary: Summary,
}

impl DashboardData {
    /// Computes every indicator column over `candles` and assembles the
    /// export structure. Fails on an empty candle set; a short history is
    /// fine, columns whose indicator never warms up are all `None`.
    pub fn build(
        symbol: impl Into<String>,
        candles: &[Candle],
        config: &DashboardConfig,
    ) -> Result<Self> {
        let symbol = symbol.into();
        if candles.is_empty() {
            bail!("no candle data for symbol {}", symbol);
        }
        let len = candles.len();

        let moving_averages = config
            .ma_windows
            .iter()
            .map(|&window| OverlaySeries {
                label: format!("MA{}", window),
                values: pad_to(len, &sma_series(candles, window)),
            })
            .collect();

        let bands = bollinger_series(candles, config.bollinger_period, config.bollinger_width);
        let rsi = pad_to(len, &rsi_series(candles, Some(config.rsi_period)));
        let macd = macd_series(candles, config.macd_fast, config.macd_slow, config.macd_signal);

        let volume_colors = candles
            .iter()
            .map(|c| {
                if c.is_bearish() {
                    VolumeColor::Down
                } else {
                    VolumeColor::Up
                }
            })
            .collect();

        let summary = Summary::from_candles(candles, &rsi);
        tracing::info!(symbol = %symbol, candles = len, "dashboard prepared");

        Ok(Self {
            symbol,
            candles: candles.to_vec(),
            volume_colors,
            moving_averages,
            bb_middle: pad_to(len, &bands.middle),
            bb_upper: pad_to(len, &bands.upper),
            bb_lower: pad_to(len, &bands.lower),
            rsi,
            macd: pad_to(len, &macd.macd),
            macd_signal: pad_to(len, &macd.signal),
            macd_histogram: pad_to(len, &macd.histogram),
            summary,
        })
    }
}

/// Left-pads a warm-up-trimmed indicator series with `None` to `len` entries.
fn pad_to(len: usize, series: &[f64]) -> Vec<Option<f64>> {
    debug_assert!(series.len() <= len, "indicator series longer than candles");
    let mut padded = vec![None; len - series.len()];
    padded.extend(series.iter().copied().map(Some));
    padded
}

//! Trend indicators: Moving Average Convergence Divergence (MACD)

use crate::indicators::candle::Candle;
use crate::indicators::moving_averages::{ema_series, ema_values};

pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;

/// MACD line, signal line, and histogram.
///
/// The series have different warm-ups and therefore different lengths:
/// - `macd` starts at candle `slow - 1` (length `len - slow + 1`)
/// - `signal` and `histogram` start at candle `slow + signal_period - 2`
///
/// `signal` and `histogram` are empty until enough candles exist for the
/// signal EMA to seed.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    /// EMA(fast) - EMA(slow) of closes
    pub macd: Vec<f64>,
    /// EMA(signal_period) of the MACD line
    pub signal: Vec<f64>,
    /// MACD minus signal, aligned with `signal`
    pub histogram: Vec<f64>,
}

impl MacdSeries {
    fn empty() -> Self {
        Self {
            macd: Vec::new(),
            signal: Vec::new(),
            histogram: Vec::new(),
        }
    }
}

/// Calculates MACD over candle closes.
///
/// MACD = EMA(fast) - EMA(slow); the signal line is an EMA of the MACD line
/// itself, and the histogram is the difference between the two. The
/// conventional parameters (and this crate's defaults) are 12/26/9.
///
/// Returns empty series if `fast >= slow`, any period is zero, or there are
/// fewer than `slow` candles.
pub fn macd_series(
    candles: &[Candle],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> MacdSeries {
    if fast == 0 || signal_period == 0 || fast >= slow || candles.len() < slow {
        return MacdSeries::empty();
    }

    let ema_fast = ema_series(candles, fast);
    let ema_slow = ema_series(candles, slow);

    // ema_fast starts `slow - fast` candles earlier than ema_slow
    let offset = slow - fast;
    let macd: Vec<f64> = ema_slow
        .iter()
        .enumerate()
        .map(|(i, &slow_val)| ema_fast[i + offset] - slow_val)
        .collect();

    let signal = ema_values(&macd, signal_period);
    let histogram: Vec<f64> = signal
        .iter()
        .enumerate()
        .map(|(i, &sig)| macd[i + signal_period - 1] - sig)
        .collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

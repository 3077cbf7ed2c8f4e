//! Moving average series: Simple Moving Average (SMA) and Exponential Moving Average (EMA)

use crate::indicators::candle::Candle;

/// Calculates the full SMA series over candle closes.
///
/// SMA = (C1 + C2 + ... + Cn) / n over each `period`-wide window.
///
/// The first value covers candles `0..period`, so the returned vector has
/// length `candles.len() - period + 1`. Returns an empty vector if there
/// are not enough candles for the given period.
pub fn sma_series(candles: &[Candle], period: usize) -> Vec<f64> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(candles.len() - period + 1);

    // Rolling window sum: add the entering close, drop the leaving one
    let mut window_sum: f64 = candles[..period].iter().map(|c| c.get_close()).sum();
    values.push(window_sum / period as f64);

    for i in period..candles.len() {
        window_sum += candles[i].get_close() - candles[i - period].get_close();
        values.push(window_sum / period as f64);
    }

    values
}

/// Calculates the full EMA series over candle closes.
///
/// EMA gives more weight to recent prices using a smoothing multiplier:
/// EMA = Close * multiplier + EMA_prev * (1 - multiplier)
/// where multiplier = 2 / (period + 1).
///
/// The first EMA value is seeded with the SMA of the first `period` closes,
/// so the returned vector has length `candles.len() - period + 1`.
/// Returns an empty vector if there are not enough candles.
pub fn ema_series(candles: &[Candle], period: usize) -> Vec<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.get_close()).collect();
    ema_values(&closes, period)
}

/// Calculates the full EMA series over a raw value slice.
///
/// Same semantics as [`ema_series`] but over arbitrary values. Used where
/// an EMA is taken of something that is not a close price, e.g. the MACD
/// signal line is an EMA of the MACD line itself.
pub fn ema_values(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut ema = Vec::with_capacity(values.len() - period + 1);

    // Seed the first EMA with the SMA of the first `period` values
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    ema.push(seed);

    for &value in &values[period..] {
        let prev = *ema.last().unwrap();
        ema.push(value * multiplier + prev * (1.0 - multiplier));
    }

    ema
}

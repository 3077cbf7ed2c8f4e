//! Volatility indicators: Bollinger Bands

use crate::indicators::candle::Candle;
use crate::indicators::moving_averages::sma_series;

pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const DEFAULT_BOLLINGER_WIDTH: f64 = 2.0;

/// Aligned Bollinger Band series.
///
/// All three vectors share the same length, `candles.len() - period + 1`,
/// and the same starting candle (`period - 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    /// Rolling SMA of closes (the middle band)
    pub middle: Vec<f64>,
    /// Middle band plus `width` standard deviations
    pub upper: Vec<f64>,
    /// Middle band minus `width` standard deviations
    pub lower: Vec<f64>,
}

impl BollingerBands {
    fn empty() -> Self {
        Self {
            middle: Vec::new(),
            upper: Vec::new(),
            lower: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.middle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Calculates Bollinger Bands over rolling close statistics.
///
/// The middle band is the `period` SMA of closes; the upper and lower bands
/// sit `width` population standard deviations above and below it. The usual
/// parameters (and this crate's defaults) are a 20-candle window with
/// width 2.0.
///
/// Returns empty bands if there are not enough candles for the period.
pub fn bollinger_series(candles: &[Candle], period: usize, width: f64) -> BollingerBands {
    if period == 0 || candles.len() < period {
        return BollingerBands::empty();
    }

    let middle = sma_series(candles, period);
    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());

    for (i, &mean) in middle.iter().enumerate() {
        let window = &candles[i..i + period];
        let variance = window
            .iter()
            .map(|c| {
                let diff = c.get_close() - mean;
                diff * diff
            })
            .sum::<f64>()
            / period as f64;
        let offset = width * variance.sqrt();

        upper.push(mean + offset);
        lower.push(mean - offset);
    }

    BollingerBands { middle, upper, lower }
}

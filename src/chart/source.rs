//! CandleSource trait for fetching OHLCV history.

use anyhow::Result;

use crate::indicators::candle::Candle;
use crate::indicators::timeframe::Period;

// This trait is the seam that keeps dashboard assembly source-agnostic.
// Wiring in a real data provider later = implement this trait, no changes
// to the dashboard code.

/// Trait for anything that can produce a candle history for a symbol.
pub trait CandleSource {
    /// Fetches daily candles for `symbol` covering `period`, oldest first.
    fn fetch(&self, symbol: &str, period: Period) -> Result<Vec<Candle>>;

    fn name(&self) -> &'static str;
}

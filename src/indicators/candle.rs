//! Candle (OHLCV) data structure with timestamp

use serde::Serialize;

/// Represents a single candlestick with OHLCV data and timestamp.
///
/// The timestamp is stored as Unix time in milliseconds. Serializes as a
/// flat object so exported chart data can be consumed without a schema.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Candle {
    /// Unix timestamp in milliseconds (candle open time)
    timestamp: u64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl Candle {
    /// Creates a new Candle.
    ///
    /// `timestamp` should be Unix time in milliseconds (candle open time).
    /// Use `0` for the timestamp if not available (e.g., in tests).
    pub fn new(
        timestamp: u64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        debug_assert!(high >= low, "candle high must be >= low");
        debug_assert!(open >= low && open <= high, "candle open must be within [low, high]");
        debug_assert!(close >= low && close <= high, "candle close must be within [low, high]");

        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the candle's timestamp (Unix time in milliseconds).
    pub fn get_timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn get_open(&self) -> f64 {
        self.open
    }

    pub fn get_high(&self) -> f64 {
        self.high
    }

    pub fn get_low(&self) -> f64 {
        self.low
    }

    pub fn get_close(&self) -> f64 {
        self.close
    }

    pub fn get_volume(&self) -> f64 {
        self.volume
    }

    /// Returns the body size (close - open).
    ///
    /// Positive for green candles, negative for red candles.
    pub fn body(&self) -> f64 {
        self.close - self.open
    }

    /// Returns the full range of the candle (high - low).
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if this is a green candle (close > open).
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a red candle (close < open).
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

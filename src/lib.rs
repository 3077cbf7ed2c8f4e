//! chartprep: candle data preparation for external renderers, plus a
//! bit-position to 128-bit hex mask utility.
//!
//! The crate computes indicator columns (moving averages, Bollinger Bands,
//! RSI, MACD) over OHLCV candle series and packages them, warm-up-aligned,
//! for whatever actually draws the chart. It does not render anything and
//! does not touch the network; candle data comes through the `CandleSource`
//! trait, with a deterministic synthetic source in-tree.

pub mod bitmask;
pub mod chart;
pub mod indicators;

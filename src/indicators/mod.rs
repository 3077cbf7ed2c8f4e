//! Technical indicators for market analysis

pub mod candle;
pub mod macd;
pub mod momentum;
pub mod moving_averages;
pub mod timeframe;
pub mod volatility;

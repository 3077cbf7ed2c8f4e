//! Synthetic OHLCV source: a seeded geometric random walk.

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::chart::source::CandleSource;
use crate::indicators::candle::Candle;
use crate::indicators::timeframe::Period;

const INITIAL_PRICE: f64 = 100.0;
/// Mean of the daily return distribution
const DRIFT: f64 = 0.001;
/// Standard deviation of the daily return distribution
const DAILY_VOLATILITY: f64 = 0.02;
/// Standard deviation of the intraday wick extension
const INTRADAY_VOLATILITY: f64 = 0.015;

const DAY_MS: u64 = 24 * 60 * 60 * 1000;
/// 2023-01-01T00:00:00Z in milliseconds
const DEFAULT_START_MS: u64 = 1_672_531_200_000;
/// How many daily candles `Period::All` means for a synthetic series
const ALL_PERIOD_DAYS: usize = 365;

/// Deterministic random-walk candle generator.
///
/// Each close is the previous close times `1 + r` with
/// `r ~ N(DRIFT, DAILY_VOLATILITY)`; high and low extend beyond the body by
/// a factor of `|N(0, INTRADAY_VOLATILITY)|`. The same seed always yields
/// the same series, which keeps dashboards and tests reproducible.
pub struct SyntheticSource {
    seed: u64,
    start_timestamp: u64,
}

impl SyntheticSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            start_timestamp: DEFAULT_START_MS,
        }
    }

    /// Overrides the timestamp of the first candle (default 2023-01-01 UTC).
    pub fn with_start_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.start_timestamp = timestamp_ms;
        self
    }

    /// Generates `days` consecutive daily candles, oldest first.
    pub fn generate(&self, days: usize) -> Vec<Candle> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut candles = Vec::with_capacity(days);
        let mut price = INITIAL_PRICE;

        for day in 0..days {
            let open = price;
            let close = open * (1.0 + normal(&mut rng, DRIFT, DAILY_VOLATILITY));

            let intraday = normal(&mut rng, 0.0, INTRADAY_VOLATILITY).abs();
            let high = open.max(close) * (1.0 + intraday);
            let low = open.min(close) * (1.0 - intraday);

            let volume = rng.gen_range(1_000_000..5_000_000) as f64;
            let timestamp = self.start_timestamp + day as u64 * DAY_MS;

            candles.push(Candle::new(timestamp, open, high, low, close, volume));
            price = close;
        }

        candles
    }
}

impl CandleSource for SyntheticSource {
    fn fetch(&self, symbol: &str, period: Period) -> Result<Vec<Candle>> {
        let days = period.to_days().unwrap_or(ALL_PERIOD_DAYS);
        tracing::debug!(symbol, days, seed = self.seed, "generating synthetic candles");
        Ok(self.generate(days))
    }

    fn name(&self) -> &'static str {
        "synthetic"
    }
}

/// Draws from N(mean, std_dev) via the Box-Muller transform.
fn normal(rng: &mut ChaCha8Rng, mean: f64, std_dev: f64) -> f64 {
    // u1 is kept away from 0 so ln() stays finite
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    mean + std_dev * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

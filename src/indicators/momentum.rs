//! Momentum indicators: Relative Strength Index (RSI)

use crate::indicators::candle::Candle;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculates the RSI series for all calculable points.
///
/// RSI is a momentum oscillator between 0 and 100:
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss.
///
/// The first value uses simple averages of the first `period` price changes;
/// subsequent values use Wilder's smoothing. RSI is 100 when the average
/// loss is zero (no down moves in the window).
///
/// Common interpretation: RSI > 70 overbought, RSI < 30 oversold.
///
/// Pass `None` to use the default period of 14, or `Some(n)` for a custom
/// period. Needs at least `period + 1` candles for the first value; returns
/// an empty vector otherwise.
pub fn rsi_series(candles: &[Candle], period: Option<usize>) -> Vec<f64> {
    let period = period.unwrap_or(DEFAULT_RSI_PERIOD);

    // period + 1 candles give `period` price changes
    if period == 0 || candles.len() < period + 1 {
        return Vec::new();
    }

    let changes = price_changes(candles);
    let mut values = Vec::with_capacity(changes.len() - period + 1);

    // Simple averages seed the series
    let mut avg_gain: f64 = changes[..period].iter().filter(|&&c| c > 0.0).sum::<f64>()
        / period as f64;
    let mut avg_loss: f64 = changes[..period]
        .iter()
        .filter(|&&c| c < 0.0)
        .map(|c| c.abs())
        .sum::<f64>()
        / period as f64;
    values.push(rsi_from_averages(avg_gain, avg_loss));

    // Wilder's smoothing for the rest of the series
    for &change in &changes[period..] {
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, change.abs())
        };
        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
        values.push(rsi_from_averages(avg_gain, avg_loss));
    }

    values
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // No losses means RSI is 100 (maximum bullish)
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculates price changes between consecutive candles.
///
/// Returns a vector of changes where each value is: current_close - previous_close
fn price_changes(candles: &[Candle]) -> Vec<f64> {
    candles
        .windows(2)
        .map(|pair| pair[1].get_close() - pair[0].get_close())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend_candles() -> Vec<Candle> {
        // Strong uptrend, closes: 100, 102, 105, 108, 112, 116, 120, 125, 130,
        // 136, 142, 148, 155, 162, 170
        vec![
            Candle::new(0, 99.0, 101.0, 98.0, 100.0, 1000.0),
            Candle::new(0, 100.0, 103.0, 99.0, 102.0, 1000.0),
            Candle::new(0, 102.0, 106.0, 101.0, 105.0, 1000.0),
            Candle::new(0, 105.0, 109.0, 104.0, 108.0, 1000.0),
            Candle::new(0, 108.0, 113.0, 107.0, 112.0, 1000.0),
            Candle::new(0, 112.0, 117.0, 111.0, 116.0, 1000.0),
            Candle::new(0, 116.0, 121.0, 115.0, 120.0, 1000.0),
            Candle::new(0, 120.0, 126.0, 119.0, 125.0, 1000.0),
            Candle::new(0, 125.0, 131.0, 124.0, 130.0, 1000.0),
            Candle::new(0, 130.0, 137.0, 129.0, 136.0, 1000.0),
            Candle::new(0, 136.0, 143.0, 135.0, 142.0, 1000.0),
            Candle::new(0, 142.0, 149.0, 141.0, 148.0, 1000.0),
            Candle::new(0, 148.0, 156.0, 147.0, 155.0, 1000.0),
            Candle::new(0, 155.0, 163.0, 154.0, 162.0, 1000.0),
            Candle::new(0, 162.0, 171.0, 161.0, 170.0, 1000.0),
        ]
    }

    fn downtrend_candles() -> Vec<Candle> {
        // Strong downtrend, closes: 170, 165, 160, 154, 148, 142, 135, 128,
        // 121, 114, 107, 100, 93, 86, 80
        vec![
            Candle::new(0, 172.0, 173.0, 169.0, 170.0, 1000.0),
            Candle::new(0, 170.0, 171.0, 164.0, 165.0, 1000.0),
            Candle::new(0, 165.0, 166.0, 159.0, 160.0, 1000.0),
            Candle::new(0, 160.0, 161.0, 153.0, 154.0, 1000.0),
            Candle::new(0, 154.0, 155.0, 147.0, 148.0, 1000.0),
            Candle::new(0, 148.0, 149.0, 141.0, 142.0, 1000.0),
            Candle::new(0, 142.0, 143.0, 134.0, 135.0, 1000.0),
            Candle::new(0, 135.0, 136.0, 127.0, 128.0, 1000.0),
            Candle::new(0, 128.0, 129.0, 120.0, 121.0, 1000.0),
            Candle::new(0, 121.0, 122.0, 113.0, 114.0, 1000.0),
            Candle::new(0, 114.0, 115.0, 106.0, 107.0, 1000.0),
            Candle::new(0, 107.0, 108.0, 99.0, 100.0, 1000.0),
            Candle::new(0, 100.0, 101.0, 92.0, 93.0, 1000.0),
            Candle::new(0, 93.0, 94.0, 85.0, 86.0, 1000.0),
            Candle::new(0, 86.0, 87.0, 79.0, 80.0, 1000.0),
        ]
    }

    fn sideways_candles() -> Vec<Candle> {
        // Alternating up and down, closes: 100, 102, 100, 103, 101, 104, 102,
        // 105, 103, 106, 104, 107, 105, 108, 106
        vec![
            Candle::new(0, 99.0, 101.0, 98.0, 100.0, 1000.0),
            Candle::new(0, 100.0, 103.0, 99.0, 102.0, 1000.0),
            Candle::new(0, 102.0, 103.0, 99.0, 100.0, 1000.0),
            Candle::new(0, 100.0, 104.0, 99.0, 103.0, 1000.0),
            Candle::new(0, 103.0, 104.0, 100.0, 101.0, 1000.0),
            Candle::new(0, 101.0, 105.0, 100.0, 104.0, 1000.0),
            Candle::new(0, 104.0, 105.0, 101.0, 102.0, 1000.0),
            Candle::new(0, 102.0, 106.0, 101.0, 105.0, 1000.0),
            Candle::new(0, 105.0, 106.0, 102.0, 103.0, 1000.0),
            Candle::new(0, 103.0, 107.0, 102.0, 106.0, 1000.0),
            Candle::new(0, 106.0, 107.0, 103.0, 104.0, 1000.0),
            Candle::new(0, 104.0, 108.0, 103.0, 107.0, 1000.0),
            Candle::new(0, 107.0, 108.0, 104.0, 105.0, 1000.0),
            Candle::new(0, 105.0, 109.0, 104.0, 108.0, 1000.0),
            Candle::new(0, 108.0, 109.0, 105.0, 106.0, 1000.0),
        ]
    }

    #[test]
    fn test_rsi_overbought_in_uptrend() {
        let candles = uptrend_candles();
        let result = *rsi_series(&candles, Some(14)).last().unwrap();
        assert!(
            result > 70.0,
            "RSI ({}) should be > 70 for strong uptrend",
            result
        );
    }

    #[test]
    fn test_rsi_oversold_in_downtrend() {
        let candles = downtrend_candles();
        let result = *rsi_series(&candles, Some(14)).last().unwrap();
        assert!(
            result < 30.0,
            "RSI ({}) should be < 30 for strong downtrend",
            result
        );
    }

    #[test]
    fn test_rsi_neutral_in_sideways_market() {
        let candles = sideways_candles();
        let result = *rsi_series(&candles, Some(14)).last().unwrap();
        assert!(
            result > 30.0 && result < 70.0,
            "RSI ({}) should be between 30 and 70 for sideways movement",
            result
        );
    }

    #[test]
    fn test_rsi_is_100_with_no_losses() {
        let candles = uptrend_candles();
        // Every change in the fixture is a gain
        let series = rsi_series(&candles, Some(14));
        assert_eq!(series, vec![100.0]);
    }

    #[test]
    fn test_rsi_insufficient_candles() {
        let candles = vec![
            Candle::new(0, 100.0, 105.0, 95.0, 102.0, 1000.0),
            Candle::new(0, 102.0, 108.0, 100.0, 106.0, 1000.0),
        ];
        assert!(rsi_series(&candles, Some(14)).is_empty());
    }

    #[test]
    fn test_rsi_zero_period() {
        let candles = uptrend_candles();
        assert!(rsi_series(&candles, Some(0)).is_empty());
    }

    #[test]
    fn test_rsi_default_period() {
        let candles = sideways_candles();
        assert_eq!(
            rsi_series(&candles, None),
            rsi_series(&candles, Some(14))
        );
    }

    #[test]
    fn test_rsi_series_length() {
        let candles = uptrend_candles();
        // 15 candles -> 14 changes; period 5 -> 14 - 5 + 1 = 10 values
        assert_eq!(rsi_series(&candles, Some(5)).len(), 10);
    }

    #[test]
    fn test_rsi_bounds() {
        for candles in [uptrend_candles(), downtrend_candles(), sideways_candles()] {
            for value in rsi_series(&candles, Some(14)) {
                assert!((0.0..=100.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_price_changes() {
        let candles = vec![
            Candle::new(0, 100.0, 105.0, 95.0, 100.0, 1000.0),
            Candle::new(0, 100.0, 108.0, 98.0, 105.0, 1000.0),
            Candle::new(0, 105.0, 110.0, 102.0, 103.0, 1000.0),
        ];
        let changes = price_changes(&candles);
        assert_eq!(changes, vec![5.0, -2.0]);
    }
}

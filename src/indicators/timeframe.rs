use std::str::FromStr;

/// Represents the lookback window of a daily-candle request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    D7,  // 7 days
    M1,  // 1 month
    M3,  // 3 months
    M6,  // 6 months
    Y1,  // 1 year
    All, // everything available
}

impl Period {
    /// Returns the number of daily candles this window covers,
    /// or `None` for `All` (source decides)
    pub fn to_days(&self) -> Option<usize> {
        match self {
            Period::D7 => Some(7),
            Period::M1 => Some(30),
            Period::M3 => Some(90),
            Period::M6 => Some(180),
            Period::Y1 => Some(365),
            Period::All => None,
        }
    }

    /// Returns a human-readable string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::D7 => "7d",
            Period::M1 => "1mo",
            Period::M3 => "3mo",
            Period::M6 => "6mo",
            Period::Y1 => "1y",
            Period::All => "all",
        }
    }
}

impl FromStr for Period {
    type Err = String;

    /// Accepts the usual period strings ("6mo", "1y", ...) plus the short
    /// month forms ("1m", "3m", "6m").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "7d" => Ok(Period::D7),
            "1m" | "1mo" => Ok(Period::M1),
            "3m" | "3mo" => Ok(Period::M3),
            "6m" | "6mo" => Ok(Period::M6),
            "1y" => Ok(Period::Y1),
            "all" => Ok(Period::All),
            other => Err(format!(
                "unknown period '{}' (expected 7d, 1mo, 3mo, 6mo, 1y or all)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single OHLC price bar.
///
/// Timestamps are epoch seconds in UTC, matching what the feed layer hands
/// over. Candles are immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl Candle {
    pub fn new(timestamp: i64, open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }

    /// Absolute body size.
    pub fn body(&self) -> Decimal {
        (self.close - self.open).abs()
    }

    /// True when the candle closed above its open.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// True when the candle closed below its open.
    pub fn is_bearish(&self) -> bool {
        self.open > self.close
    }

    /// Open time as a chrono timestamp, for callers that render times.
    /// Returns `None` only for timestamps outside chrono's representable range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

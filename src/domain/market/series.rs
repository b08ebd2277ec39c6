use crate::domain::errors::SeriesError;
use crate::domain::market::candle::Candle;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, time-increasing sequence of candles.
///
/// Integrity is checked once at construction; every detector indexes into
/// the series afterwards without re-validating and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Builds a series, rejecting bars that are out of order or physically
    /// impossible (`low > high`).
    pub fn new(candles: Vec<Candle>) -> Result<Self, SeriesError> {
        for (index, candle) in candles.iter().enumerate() {
            if candle.low > candle.high {
                return Err(SeriesError::InvalidCandle {
                    index,
                    low: candle.low,
                    high: candle.high,
                });
            }

            if index > 0 {
                let previous = candles[index - 1].timestamp;
                if candle.timestamp <= previous {
                    return Err(SeriesError::NonIncreasingTimestamp {
                        index,
                        timestamp: candle.timestamp,
                        previous,
                    });
                }
            }
        }

        Ok(Self { candles })
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }
}

impl Index<usize> for CandleSeries {
    type Output = Candle;

    fn index(&self, index: usize) -> &Candle {
        &self.candles[index]
    }
}

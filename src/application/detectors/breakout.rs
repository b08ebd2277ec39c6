use crate::domain::market::events::{BreakoutEvent, Direction};
use crate::domain::market::levels::ReferenceRange;
use crate::domain::market::series::CandleSeries;

/// Range breakout detector.
///
/// Walks the series in order and reports the first bar that closed outside
/// the reference range. The caller slices the series to the session window
/// it cares about before handing it over; no time filtering happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeBreakoutDetector;

impl RangeBreakoutDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, series: &CandleSeries, range: &ReferenceRange) -> Option<BreakoutEvent> {
        for (index, candle) in series.candles().iter().enumerate() {
            if candle.close > range.high {
                return Some(BreakoutEvent {
                    index,
                    direction: Direction::Bullish,
                    close: candle.close,
                    timestamp: candle.timestamp,
                });
            } else if candle.close < range.low {
                return Some(BreakoutEvent {
                    index,
                    direction: Direction::Bearish,
                    close: candle.close,
                    timestamp: candle.timestamp,
                });
            }
        }

        None
    }
}

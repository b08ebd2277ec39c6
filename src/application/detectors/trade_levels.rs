use crate::domain::errors::TradeLevelError;
use crate::domain::market::events::{Direction, DisplacementEvent};
use crate::domain::market::levels::{ReferenceRange, TradePlan};
use rust_decimal_macros::dec;

/// Derives entry, stop and target levels from one displacement event and
/// the caller's reference range.
///
/// The entry sits at the midpoint between the displacement close and the
/// broken level; the stop at the defensive side of the two; the target at
/// the far side of the reference range. Whether the target actually lies on
/// the profitable side is NOT checked here — degenerate plans are the
/// caller's to discard.
#[derive(Debug, Clone, Copy, Default)]
pub struct TradeLevelCalculator;

impl TradeLevelCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(
        &self,
        event: &DisplacementEvent,
        range: &ReferenceRange,
    ) -> Result<TradePlan, TradeLevelError> {
        if range.high < range.low {
            return Err(TradeLevelError::InvalidRange {
                high: range.high,
                low: range.low,
            });
        }

        let entry = (event.close + event.broken_level) / dec!(2);

        let (stop_loss, take_profit) = match event.direction {
            Direction::Bullish => (event.close.min(event.broken_level), range.high),
            Direction::Bearish => (event.close.max(event.broken_level), range.low),
        };

        Ok(TradePlan {
            entry,
            stop_loss,
            take_profit,
            direction: event.direction,
            timestamp: event.timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn event(direction: Direction, close: Decimal, broken_level: Decimal) -> DisplacementEvent {
        DisplacementEvent {
            index: 9,
            direction,
            body_size: dec!(0.0058),
            close,
            broken_level,
            timestamp: 540,
        }
    }

    #[test]
    fn test_bullish_plan() {
        let event = event(Direction::Bullish, dec!(1.2100), dec!(1.2050));
        let range = ReferenceRange::new(dec!(1.2120), dec!(1.1980));

        let plan = TradeLevelCalculator::new().calculate(&event, &range).unwrap();

        assert_eq!(plan.entry, dec!(1.2075));
        assert_eq!(plan.stop_loss, dec!(1.2050));
        assert_eq!(plan.take_profit, dec!(1.2120));
        assert_eq!(plan.direction, Direction::Bullish);
        assert_eq!(plan.timestamp, 540);
    }

    #[test]
    fn test_bearish_plan() {
        let event = event(Direction::Bearish, dec!(1.1990), dec!(1.2030));
        let range = ReferenceRange::new(dec!(1.2120), dec!(1.1980));

        let plan = TradeLevelCalculator::new().calculate(&event, &range).unwrap();

        assert_eq!(plan.entry, dec!(1.2010));
        assert_eq!(plan.stop_loss, dec!(1.2030));
        assert_eq!(plan.take_profit, dec!(1.1980));
        assert_eq!(plan.direction, Direction::Bearish);
    }

    #[test]
    fn test_malformed_range_is_an_error() {
        let event = event(Direction::Bullish, dec!(1.2100), dec!(1.2050));
        let range = ReferenceRange::new(dec!(1.1980), dec!(1.2120));

        let result = TradeLevelCalculator::new().calculate(&event, &range);

        assert_eq!(
            result.unwrap_err(),
            TradeLevelError::InvalidRange {
                high: dec!(1.1980),
                low: dec!(1.2120),
            }
        );
    }

    #[test]
    fn test_degenerate_target_is_not_rejected() {
        // Target below the bullish entry: accepted here, discarded upstream
        let event = event(Direction::Bullish, dec!(1.2100), dec!(1.2050));
        let range = ReferenceRange::new(dec!(1.2060), dec!(1.1980));

        let plan = TradeLevelCalculator::new().calculate(&event, &range).unwrap();
        assert_eq!(plan.take_profit, dec!(1.2060));
        assert!(plan.take_profit < plan.entry);
    }

    #[test]
    fn test_collapsed_range_is_accepted() {
        let event = event(Direction::Bearish, dec!(1.1990), dec!(1.2030));
        let range = ReferenceRange::new(dec!(1.2000), dec!(1.2000));

        let plan = TradeLevelCalculator::new().calculate(&event, &range).unwrap();
        assert_eq!(plan.take_profit, dec!(1.2000));
    }
}

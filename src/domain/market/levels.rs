use crate::domain::market::events::Direction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Externally supplied high/low band, typically the extremes of a session
/// candle chosen by the driver layer.
///
/// Well-formedness (`high >= low`) is checked where the range is consumed,
/// not at construction; the raw values belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub high: Decimal,
    pub low: Decimal,
}

impl ReferenceRange {
    pub fn new(high: Decimal, low: Decimal) -> Self {
        Self { high, low }
    }
}

/// Entry, stop and target levels derived from one displacement event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub entry: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    pub direction: Direction,
    pub timestamp: i64,
}

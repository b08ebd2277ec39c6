use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a detected pattern or derived trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Bullish,
    Bearish,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Bullish => write!(f, "BULLISH"),
            Direction::Bearish => write!(f, "BEARISH"),
        }
    }
}

/// Which extreme a swing point marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingKind {
    High,
    Low,
}

/// A confirmed 3-bar fractal extreme. Only interior bars qualify, so the
/// index is always in `1..=len-2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    pub index: usize,
    pub price: Decimal,
    pub kind: SwingKind,
}

/// A fair value gap: bar `index` does not overlap bar `index - 2`.
/// `index` is always >= 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FvgEvent {
    pub index: usize,
    pub direction: Direction,
    pub timestamp: i64,
}

/// An abnormally large-bodied candle that closed through a previously
/// confirmed swing level, corroborated by a nearby fair value gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplacementEvent {
    pub index: usize,
    pub direction: Direction,
    pub body_size: Decimal,
    pub close: Decimal,
    pub broken_level: Decimal,
    pub timestamp: i64,
}

/// The first close escaping a reference range, used as a session bias marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakoutEvent {
    pub index: usize,
    pub direction: Direction,
    pub close: Decimal,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Bullish.to_string(), "BULLISH");
        assert_eq!(Direction::Bearish.to_string(), "BEARISH");
    }
}

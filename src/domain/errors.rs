use rust_decimal::Decimal;
use thiserror::Error;

/// Errors related to candle series construction
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("Candle timestamps must be strictly increasing: index {index} has {timestamp} after {previous}")]
    NonIncreasingTimestamp {
        index: usize,
        timestamp: i64,
        previous: i64,
    },

    #[error("Candle at index {index} has low {low} above high {high}")]
    InvalidCandle {
        index: usize,
        low: Decimal,
        high: Decimal,
    },
}

/// Errors related to trade level derivation
#[derive(Debug, Error, PartialEq)]
pub enum TradeLevelError {
    #[error("Reference range is malformed: high {high} below low {low}")]
    InvalidRange { high: Decimal, low: Decimal },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_series_error_formatting() {
        let error = SeriesError::NonIncreasingTimestamp {
            index: 4,
            timestamp: 1000,
            previous: 1060,
        };

        let msg = error.to_string();
        assert!(msg.contains("index 4"));
        assert!(msg.contains("1000"));
        assert!(msg.contains("1060"));
    }

    #[test]
    fn test_trade_level_error_formatting() {
        let error = TradeLevelError::InvalidRange {
            high: dec!(1.1980),
            low: dec!(1.2120),
        };

        let msg = error.to_string();
        assert!(msg.contains("1.1980"));
        assert!(msg.contains("1.2120"));
    }
}

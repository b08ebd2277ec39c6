use crate::domain::market::events::{SwingKind, SwingPoint};
use crate::domain::market::series::CandleSeries;

/// Swing (3-bar fractal) detector.
///
/// A bar is a swing high when its high strictly exceeds both neighbors, a
/// swing low when its low strictly undercuts both. Equal neighbors never
/// qualify, so plateaus produce nothing, and the first and last bar can
/// never be confirmed. The window is structurally one bar each side and is
/// not configurable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwingDetector;

impl SwingDetector {
    pub fn new() -> Self {
        Self
    }

    /// Scans the whole series and returns every confirmed swing in index
    /// order. A bar that is both a swing high and a swing low (an outside
    /// bar between two inside bars) yields two points, high first.
    pub fn detect(&self, series: &CandleSeries) -> Vec<SwingPoint> {
        let mut swings = Vec::new();
        if series.len() < 3 {
            return swings;
        }

        for i in 1..series.len() - 1 {
            let prev = &series[i - 1];
            let curr = &series[i];
            let next = &series[i + 1];

            if curr.high > prev.high && curr.high > next.high {
                swings.push(SwingPoint {
                    index: i,
                    price: curr.high,
                    kind: SwingKind::High,
                });
            }
            if curr.low < prev.low && curr.low < next.low {
                swings.push(SwingPoint {
                    index: i,
                    price: curr.low,
                    kind: SwingKind::Low,
                });
            }
        }

        swings
    }

    /// Latest confirmed swing of `kind` at or before `index`, scanning
    /// backward through the detection output. `None` means the series has
    /// no such swing yet; that is a sentinel, not an error.
    pub fn latest_at_or_before(
        swings: &[SwingPoint],
        index: usize,
        kind: SwingKind,
    ) -> Option<&SwingPoint> {
        swings
            .iter()
            .rev()
            .find(|swing| swing.index <= index && swing.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::candle::Candle;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn series(bars: &[(Decimal, Decimal)]) -> CandleSeries {
        // (high, low) pairs; open/close kept inside the range
        let candles = bars
            .iter()
            .enumerate()
            .map(|(i, (high, low))| {
                let mid = (*high + *low) / dec!(2);
                Candle::new(i as i64 * 60, mid, *high, *low, mid)
            })
            .collect();
        CandleSeries::new(candles).unwrap()
    }

    #[test]
    fn test_detects_interior_swings() {
        let series = series(&[
            (dec!(1.2010), dec!(1.1995)),
            (dec!(1.2030), dec!(1.1990)), // swing high and swing low
            (dec!(1.2020), dec!(1.2000)),
        ]);

        let swings = SwingDetector::new().detect(&series);

        assert_eq!(swings.len(), 2);
        assert_eq!(swings[0].index, 1);
        assert_eq!(swings[0].kind, SwingKind::High);
        assert_eq!(swings[0].price, dec!(1.2030));
        assert_eq!(swings[1].kind, SwingKind::Low);
        assert_eq!(swings[1].price, dec!(1.1990));
    }

    #[test]
    fn test_boundaries_never_flag() {
        // Monotonic rise: the extremes sit at index 0 and n-1
        let series = series(&[
            (dec!(1.2000), dec!(1.1990)),
            (dec!(1.2010), dec!(1.2000)),
            (dec!(1.2020), dec!(1.2010)),
            (dec!(1.2030), dec!(1.2020)),
        ]);

        assert!(SwingDetector::new().detect(&series).is_empty());
    }

    #[test]
    fn test_plateau_never_flags() {
        let series = series(&[
            (dec!(1.2000), dec!(1.1990)),
            (dec!(1.2020), dec!(1.1995)),
            (dec!(1.2020), dec!(1.1995)), // equals its neighbor
            (dec!(1.2000), dec!(1.1990)),
        ]);

        let swings = SwingDetector::new().detect(&series);
        assert!(swings.iter().all(|s| s.kind != SwingKind::High));
    }

    #[test]
    fn test_short_series_yields_nothing() {
        let series = series(&[(dec!(1.2010), dec!(1.1990)), (dec!(1.2020), dec!(1.2000))]);

        assert!(SwingDetector::new().detect(&series).is_empty());
    }

    #[test]
    fn test_latest_at_or_before() {
        let series = series(&[
            (dec!(1.2010), dec!(1.1990)),
            (dec!(1.2030), dec!(1.2000)), // swing high at 1
            (dec!(1.2020), dec!(1.1985)), // swing low at 2
            (dec!(1.2040), dec!(1.2000)), // swing high at 3
            (dec!(1.2030), dec!(1.2010)),
        ]);

        let swings = SwingDetector::new().detect(&series);

        let latest_high = SwingDetector::latest_at_or_before(&swings, 2, SwingKind::High).unwrap();
        assert_eq!(latest_high.index, 1);

        let latest_high = SwingDetector::latest_at_or_before(&swings, 4, SwingKind::High).unwrap();
        assert_eq!(latest_high.index, 3);

        // No swing low exists before index 1
        assert!(SwingDetector::latest_at_or_before(&swings, 1, SwingKind::Low).is_none());
    }
}

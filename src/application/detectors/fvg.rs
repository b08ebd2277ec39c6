use crate::domain::market::events::{Direction, FvgEvent};
use crate::domain::market::series::CandleSeries;

/// Fair value gap detector.
///
/// Compares each bar against the bar two places back; the middle bar is
/// ignored. Overlapping or adjacent gaps are all kept, in input order —
/// downstream matching only cares about which indices carry a gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct FvgDetector;

impl FvgDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, series: &CandleSeries) -> Vec<FvgEvent> {
        let mut gaps = Vec::new();

        for i in 2..series.len() {
            let curr = &series[i];
            let back = &series[i - 2];

            if curr.low > back.high {
                gaps.push(FvgEvent {
                    index: i,
                    direction: Direction::Bullish,
                    timestamp: curr.timestamp,
                });
            } else if curr.high < back.low {
                gaps.push(FvgEvent {
                    index: i,
                    direction: Direction::Bearish,
                    timestamp: curr.timestamp,
                });
            }
        }

        gaps
    }
}

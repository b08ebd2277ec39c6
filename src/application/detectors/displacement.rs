use crate::domain::market::events::{Direction, DisplacementEvent, FvgEvent, SwingKind, SwingPoint};
use crate::domain::market::series::CandleSeries;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{HashMap, HashSet};

/// Swing levels carried across the displacement scan.
///
/// Levels are absorbed from the *previous* bar's swing flags only, so a
/// level never becomes usable before the scan has passed the bar that
/// confirmed it. Combined with the swing detector's own one-bar-ahead
/// confirmation, a level is usable two bars after its defining candle.
#[derive(Debug, Clone, Copy, Default)]
struct SwingLevels {
    last_high: Option<Decimal>,
    last_low: Option<Decimal>,
}

impl SwingLevels {
    fn absorb(&mut self, price: Decimal, kind: SwingKind) {
        match kind {
            SwingKind::High => self.last_high = Some(price),
            SwingKind::Low => self.last_low = Some(price),
        }
    }
}

/// Displacement detector.
///
/// Flags bars whose body dwarfs the trailing average while the close breaks
/// the last confirmed swing level in the body's direction, provided a fair
/// value gap sits within one bar of the candidate. The trailing average
/// includes the bar under evaluation; that inflates the baseline on exactly
/// the candidate bar and is intentional, matched behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplacementDetector {
    pub lookback: usize,          // trailing window for the body-size average
    pub body_multiplier: Decimal, // body must exceed this multiple of the average
}

impl DisplacementDetector {
    pub fn new(lookback: usize, body_multiplier: Decimal) -> Self {
        Self {
            lookback,
            body_multiplier,
        }
    }

    /// Runs the scan. Events come back ordered by index; insufficient data
    /// of any kind yields an empty collection, never an error.
    pub fn detect(
        &self,
        series: &CandleSeries,
        swings: &[SwingPoint],
        fvgs: &[FvgEvent],
    ) -> Vec<DisplacementEvent> {
        let mut events = Vec::new();
        if self.lookback == 0 {
            return events;
        }

        let fvg_indices: HashSet<usize> = fvgs.iter().map(|gap| gap.index).collect();

        let mut swing_highs: HashMap<usize, Decimal> = HashMap::new();
        let mut swing_lows: HashMap<usize, Decimal> = HashMap::new();
        for point in swings {
            match point.kind {
                SwingKind::High => swing_highs.insert(point.index, point.price),
                SwingKind::Low => swing_lows.insert(point.index, point.price),
            };
        }

        let bodies: Vec<Decimal> = series.candles().iter().map(|candle| candle.body()).collect();
        let window = Decimal::from(self.lookback as u64);

        let mut levels = SwingLevels::default();
        let mut window_sum = Decimal::ZERO;
        let start = self.lookback + 1;

        for i in 0..series.len() {
            window_sum += bodies[i];
            if i >= self.lookback {
                window_sum -= bodies[i - self.lookback];
            }

            // One-bar lag: only the previous bar's flags update the levels.
            if i >= 1 {
                if let Some(&price) = swing_highs.get(&(i - 1)) {
                    levels.absorb(price, SwingKind::High);
                }
                if let Some(&price) = swing_lows.get(&(i - 1)) {
                    levels.absorb(price, SwingKind::Low);
                }
            }

            if i < start {
                continue;
            }

            let (Some(last_high), Some(last_low)) = (levels.last_high, levels.last_low) else {
                continue;
            };

            // Trailing average over the last `lookback` bodies, current bar included.
            if i + 1 < self.lookback {
                continue;
            }
            let avg_body = window_sum / window;

            let near_fvg = fvg_indices.contains(&(i - 1))
                || fvg_indices.contains(&i)
                || fvg_indices.contains(&(i + 1));
            if !near_fvg {
                continue;
            }

            let candle = &series[i];
            let body = bodies[i];
            let threshold = self.body_multiplier * avg_body;

            if candle.is_bullish() && body > threshold && candle.close > last_high {
                events.push(DisplacementEvent {
                    index: i,
                    direction: Direction::Bullish,
                    body_size: body,
                    close: candle.close,
                    broken_level: last_high,
                    timestamp: candle.timestamp,
                });
            } else if candle.is_bearish() && body > threshold && candle.close < last_low {
                events.push(DisplacementEvent {
                    index: i,
                    direction: Direction::Bearish,
                    body_size: body,
                    close: candle.close,
                    broken_level: last_low,
                    timestamp: candle.timestamp,
                });
            }
        }

        events
    }
}

impl Default for DisplacementDetector {
    fn default() -> Self {
        Self {
            lookback: 5,
            body_multiplier: dec!(1.5),
        }
    }
}

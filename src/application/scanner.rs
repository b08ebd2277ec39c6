use crate::application::detectors::{
    DisplacementDetector, FvgDetector, SwingDetector, TradeLevelCalculator,
};
use crate::config::ScannerEnvConfig;
use crate::domain::errors::TradeLevelError;
use crate::domain::market::events::{DisplacementEvent, FvgEvent, SwingPoint};
use crate::domain::market::levels::{ReferenceRange, TradePlan};
use crate::domain::market::series::CandleSeries;
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything one scan produced, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub swings: Vec<SwingPoint>,
    pub fvgs: Vec<FvgEvent>,
    pub displacements: Vec<DisplacementEvent>,
}

/// Facade wiring the detectors into the full pipeline:
/// series -> {swings, fvgs} -> displacements -> trade plans.
///
/// Each call recomputes everything from the supplied series; the scanner
/// itself carries only the displacement tunables and is freely shareable
/// across threads.
#[derive(Debug, Clone)]
pub struct DisplacementScanner {
    swing_detector: SwingDetector,
    fvg_detector: FvgDetector,
    displacement_detector: DisplacementDetector,
    level_calculator: TradeLevelCalculator,
}

impl DisplacementScanner {
    pub fn new(lookback: usize, body_multiplier: Decimal) -> Self {
        Self {
            swing_detector: SwingDetector::new(),
            fvg_detector: FvgDetector::new(),
            displacement_detector: DisplacementDetector::new(lookback, body_multiplier),
            level_calculator: TradeLevelCalculator::new(),
        }
    }

    pub fn from_config(config: &ScannerEnvConfig) -> Self {
        Self::new(config.displacement_lookback, config.body_multiplier)
    }

    /// Runs the detection pipeline over the series.
    pub fn scan(&self, series: &CandleSeries) -> ScanReport {
        let swings = self.swing_detector.detect(series);
        let fvgs = self.fvg_detector.detect(series);
        tracing::debug!(
            "Scan context: {} bars, {} swings, {} fair value gaps",
            series.len(),
            swings.len(),
            fvgs.len()
        );

        let displacements = self.displacement_detector.detect(series, &swings, &fvgs);
        for event in &displacements {
            tracing::info!(
                "Displacement: {} at index {} closed {} through level {}",
                event.direction,
                event.index,
                event.close,
                event.broken_level
            );
        }

        ScanReport {
            swings,
            fvgs,
            displacements,
        }
    }

    /// Derives one trade plan per displacement event against the supplied
    /// reference range. A malformed range fails the whole batch.
    pub fn trade_plans(
        &self,
        displacements: &[DisplacementEvent],
        range: &ReferenceRange,
    ) -> Result<Vec<TradePlan>, TradeLevelError> {
        displacements
            .iter()
            .map(|event| self.level_calculator.calculate(event, range))
            .collect()
    }
}

impl Default for DisplacementScanner {
    fn default() -> Self {
        let defaults = DisplacementDetector::default();
        Self::new(defaults.lookback, defaults.body_multiplier)
    }
}

mod breakout;
mod displacement;
mod fvg;
mod swings;
mod trade_levels;

pub use breakout::RangeBreakoutDetector;
pub use displacement::DisplacementDetector;
pub use fvg::FvgDetector;
pub use swings::SwingDetector;
pub use trade_levels::TradeLevelCalculator;

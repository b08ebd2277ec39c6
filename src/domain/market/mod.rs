// Market analysis domain
pub mod candle;
pub mod events;
pub mod levels;
pub mod series;

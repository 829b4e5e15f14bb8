pub mod engine;
pub mod momentum;
pub mod trend;

pub use engine::IndicatorEngine;
pub use momentum::calculate_rsi_series;
pub use trend::calculate_sma_series;

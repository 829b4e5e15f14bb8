//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod parameters;
pub mod price;
pub mod signal;

pub use analysis::{AnalysisResult, PriceSummary};
pub use parameters::{Period, TradingParameters};
pub use price::{PricePoint, PriceSeries, RsiPoint};
pub use signal::{Signal, SignalKind};

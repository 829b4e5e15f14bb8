//! Signal evaluation: per-step rules, the scanning generator and display markers.

pub mod generator;
pub mod markers;
pub mod rules;

pub use generator::{SignalConfig, SignalGenerator};
pub use markers::with_hold_markers;
pub use rules::{analyze_crossover, analyze_rsi, CrossoverAnalysis, RsiAnalysis};

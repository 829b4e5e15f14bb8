//! signalscope: moving-average and RSI indicators with rule-based trading signals.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod signals;

pub use error::{AnalysisError, Result};
pub use pipeline::AnalysisPipeline;

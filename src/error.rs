//! Error types surfaced at the analysis boundary.
//!
//! Only caller mistakes and data-source failures are errors. Short history and
//! RSI division by zero are absorbed by the indicator engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("invalid price series: {0}")]
    InvalidSeries(String),
    #[error("price source error: {0}")]
    Source(String),
}

impl AnalysisError {
    /// Short machine-readable code used in HTTP error bodies and metric labels.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidParameter(_) => "invalid_parameter",
            AnalysisError::InvalidSeries(_) => "invalid_series",
            AnalysisError::Source(_) => "source_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

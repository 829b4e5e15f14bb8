//! Analysis configuration supplied by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AnalysisError, Result};

/// Lookback period for an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::TwoYears,
        Period::FiveYears,
    ];

    pub fn days(&self) -> usize {
        match self {
            Period::OneMonth => 30,
            Period::ThreeMonths => 90,
            Period::SixMonths => 180,
            Period::OneYear => 365,
            Period::TwoYears => 730,
            Period::FiveYears => 1825,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
        }
    }

    pub fn parse(value: &str) -> Option<Period> {
        let value = value.trim();
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Like [`Period::parse`], but unknown strings fall back to six months.
    pub fn resolve(value: &str) -> Period {
        Self::parse(value).unwrap_or(Period::SixMonths)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradingParameters {
    pub symbol: String,
    pub period: String,
    #[serde(rename = "showRSI")]
    pub show_rsi: bool,
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    #[serde(rename = "showMA")]
    pub show_ma: bool,
    pub ma_fast: usize,
    pub ma_slow: usize,
    /// Add sparse HOLD markers for display. Off by default.
    pub hold_markers: bool,
}

impl Default for TradingParameters {
    fn default() -> Self {
        Self {
            symbol: "AAPL".to_string(),
            period: Period::SixMonths.as_str().to_string(),
            show_rsi: true,
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            show_ma: true,
            ma_fast: 20,
            ma_slow: 50,
            hold_markers: false,
        }
    }
}

/// Upper bound for `maFast`, `maSlow` and `rsiPeriod`: the longest period in days.
pub const MAX_WINDOW: usize = 1825;

impl TradingParameters {
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn resolved_period(&self) -> Period {
        Period::resolve(&self.period)
    }

    /// Check every constraint before any computation runs.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(invalid("symbol must not be empty"));
        }
        if self.ma_fast == 0 {
            return Err(invalid("maFast must be at least 1"));
        }
        if self.ma_slow <= self.ma_fast {
            return Err(invalid(format!(
                "maSlow ({}) must be greater than maFast ({})",
                self.ma_slow, self.ma_fast
            )));
        }
        if self.ma_slow > MAX_WINDOW {
            return Err(invalid(format!(
                "maSlow must be at most {}, got {}",
                MAX_WINDOW, self.ma_slow
            )));
        }
        if self.rsi_period < 2 || self.rsi_period > MAX_WINDOW {
            return Err(invalid(format!(
                "rsiPeriod must be within [2, {}], got {}",
                MAX_WINDOW, self.rsi_period
            )));
        }
        if !(self.rsi_overbought > 50.0 && self.rsi_overbought < 100.0) {
            return Err(invalid(format!(
                "rsiOverbought must be within (50, 100), got {}",
                self.rsi_overbought
            )));
        }
        if !(self.rsi_oversold > 0.0 && self.rsi_oversold < 50.0) {
            return Err(invalid(format!(
                "rsiOversold must be within (0, 50), got {}",
                self.rsi_oversold
            )));
        }
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(invalid("rsiOversold must be below rsiOverbought"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AnalysisError {
    AnalysisError::InvalidParameter(message.into())
}

//! Scans an annotated series and emits BUY/SELL signals.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{PriceSeries, RsiPoint, Signal, SignalKind, TradingParameters};
use crate::signals::rules::{analyze_crossover, analyze_rsi};

/// Rule configuration for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalConfig {
    pub show_ma: bool,
    pub ma_fast: usize,
    pub ma_slow: usize,
    pub show_rsi: bool,
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

impl From<&TradingParameters> for SignalConfig {
    fn from(params: &TradingParameters) -> Self {
        Self {
            show_ma: params.show_ma,
            ma_fast: params.ma_fast,
            ma_slow: params.ma_slow,
            show_rsi: params.show_rsi,
            rsi_period: params.rsi_period,
            rsi_overbought: params.rsi_overbought,
            rsi_oversold: params.rsi_oversold,
        }
    }
}

pub struct SignalGenerator {
    config: SignalConfig,
}

impl SignalGenerator {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    pub fn from_parameters(params: &TradingParameters) -> Self {
        Self::new(SignalConfig::from(params))
    }

    /// Produce signals in ascending date order, at most one per date.
    ///
    /// Scanning starts at index `ma_slow`. A crossover signal wins over an RSI
    /// signal on the same step; the RSI rule is not consulted when a
    /// crossover fires.
    pub fn generate(&self, series: &PriceSeries, rsi: &[RsiPoint]) -> Vec<Signal> {
        let points = series.points();
        let rsi_by_date: HashMap<NaiveDate, f64> =
            rsi.iter().map(|point| (point.date, point.value)).collect();

        let mut signals = Vec::new();
        for i in self.config.ma_slow.max(1)..points.len() {
            let current = &points[i];
            let previous = &points[i - 1];

            let (Some(current_ma), Some(previous_ma)) =
                (current.moving_averages(), previous.moving_averages())
            else {
                continue;
            };

            let mut fired = None;
            if self.config.show_ma {
                fired = analyze_crossover(current_ma, previous_ma)
                    .signal(self.config.ma_fast, self.config.ma_slow);
            }

            if self.config.show_rsi && fired.is_none() {
                if let (Some(&current_rsi), Some(&previous_rsi)) = (
                    rsi_by_date.get(&current.date),
                    rsi_by_date.get(&previous.date),
                ) {
                    fired = analyze_rsi(
                        current_rsi,
                        previous_rsi,
                        self.config.rsi_oversold,
                        self.config.rsi_overbought,
                    )
                    .signal(
                        self.config.rsi_period,
                        self.config.rsi_oversold,
                        self.config.rsi_overbought,
                    );
                }
            }

            if let Some((kind, reason)) = fired {
                signals.push(Signal::new(current.date, kind, current.price, reason));
            }
        }

        debug!(
            buys = count(&signals, SignalKind::Buy),
            sells = count(&signals, SignalKind::Sell),
            "Generated signals"
        );
        signals
    }
}

fn count(signals: &[Signal], kind: SignalKind) -> usize {
    signals.iter().filter(|s| s.signal == kind).count()
}

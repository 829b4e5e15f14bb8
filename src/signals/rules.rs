//! Per-step signal rules.

use crate::models::SignalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverAnalysis {
    CrossedAbove,
    CrossedBelow,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiAnalysis {
    FellBelowOversold,
    RoseAboveOverbought,
    Neutral,
}

/// Compare the fast/slow ordering of two consecutive points.
///
/// Only a strict `fast > slow` counts as "above"; equal averages count as
/// below.
pub fn analyze_crossover(current: (f64, f64), previous: (f64, f64)) -> CrossoverAnalysis {
    let above_now = current.0 > current.1;
    let above_before = previous.0 > previous.1;
    match (above_now, above_before) {
        (true, false) => CrossoverAnalysis::CrossedAbove,
        (false, true) => CrossoverAnalysis::CrossedBelow,
        _ => CrossoverAnalysis::None,
    }
}

/// Detect RSI moving through a threshold between two consecutive points.
pub fn analyze_rsi(current: f64, previous: f64, oversold: f64, overbought: f64) -> RsiAnalysis {
    if current < oversold && previous >= oversold {
        RsiAnalysis::FellBelowOversold
    } else if current > overbought && previous <= overbought {
        RsiAnalysis::RoseAboveOverbought
    } else {
        RsiAnalysis::Neutral
    }
}

impl CrossoverAnalysis {
    pub fn signal(&self, fast: usize, slow: usize) -> Option<(SignalKind, String)> {
        match self {
            CrossoverAnalysis::CrossedAbove => Some((
                SignalKind::Buy,
                format!("MA({}) crossed above MA({})", fast, slow),
            )),
            CrossoverAnalysis::CrossedBelow => Some((
                SignalKind::Sell,
                format!("MA({}) crossed below MA({})", fast, slow),
            )),
            CrossoverAnalysis::None => None,
        }
    }
}

impl RsiAnalysis {
    pub fn signal(
        &self,
        period: usize,
        oversold: f64,
        overbought: f64,
    ) -> Option<(SignalKind, String)> {
        match self {
            RsiAnalysis::FellBelowOversold => Some((
                SignalKind::Buy,
                format!("RSI({}) dropped below oversold level {}", period, oversold),
            )),
            RsiAnalysis::RoseAboveOverbought => Some((
                SignalKind::Sell,
                format!("RSI({}) rose above overbought level {}", period, overbought),
            )),
            RsiAnalysis::Neutral => None,
        }
    }
}

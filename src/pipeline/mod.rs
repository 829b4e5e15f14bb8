//! End-to-end analysis: price source, indicators, signals, summary.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::indicators::IndicatorEngine;
use crate::models::{AnalysisResult, PriceSummary, TradingParameters};
use crate::services::market_data::PriceSource;
use crate::signals::{with_hold_markers, SignalGenerator};

/// Stateless orchestrator; one `analyze` call builds and owns its own series.
#[derive(Clone)]
pub struct AnalysisPipeline {
    source: Arc<dyn PriceSource>,
    as_of: Option<NaiveDate>,
}

impl AnalysisPipeline {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            as_of: None,
        }
    }

    /// Pin "today" instead of reading the clock on every call.
    pub fn with_as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Validate `params`, then run indicators and signal rules over a fresh
    /// series from the price source.
    ///
    /// Too little history for the configured windows is not an error; the
    /// result simply carries fewer annotations and signals.
    pub fn analyze(&self, params: &TradingParameters) -> Result<AnalysisResult> {
        if let Err(e) = params.validate() {
            warn!(symbol = %params.symbol, error = %e, "Rejected analysis parameters");
            return Err(e);
        }

        let period = params.resolved_period();
        let days = period.days();
        let end = self.as_of.unwrap_or_else(|| Utc::now().date_naive());
        debug!(symbol = %params.symbol, period = %period, days, %end, "Starting analysis");

        let mut series = self.source.price_series(&params.symbol, days, end)?;
        let rsi = IndicatorEngine::from_parameters(params).annotate(&mut series);

        let mut signals = SignalGenerator::from_parameters(params).generate(&series, &rsi);
        if params.hold_markers {
            signals = with_hold_markers(series.points(), signals);
        }

        let summary = PriceSummary::from_points(series.points());
        info!(
            symbol = %params.symbol,
            points = series.len(),
            signal_count = signals.len(),
            "Analysis complete"
        );

        Ok(AnalysisResult {
            symbol: params.symbol.clone(),
            period_days: days,
            prices: series.into_points(),
            rsi: params.show_rsi.then_some(rsi),
            summary,
            signals,
        })
    }
}

//! Annotates a price series with moving averages and computes its RSI.

use tracing::debug;

use crate::indicators::momentum::calculate_rsi_series;
use crate::indicators::trend::calculate_sma_series;
use crate::models::{PriceSeries, RsiPoint, TradingParameters};

/// Window sizes for one annotation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorEngine {
    pub ma_fast: usize,
    pub ma_slow: usize,
    pub rsi_period: usize,
}

impl IndicatorEngine {
    pub fn new(ma_fast: usize, ma_slow: usize, rsi_period: usize) -> Self {
        Self {
            ma_fast,
            ma_slow,
            rsi_period,
        }
    }

    pub fn from_parameters(params: &TradingParameters) -> Self {
        Self::new(params.ma_fast, params.ma_slow, params.rsi_period)
    }

    /// Recompute every annotation of `series` from its raw prices and return
    /// the RSI sequence, one entry per price point from index `rsi_period`.
    ///
    /// Existing annotations are always discarded first, so repeated calls with
    /// the same windows give identical output. A series with fewer than two
    /// points is left without annotations.
    pub fn annotate(&self, series: &mut PriceSeries) -> Vec<RsiPoint> {
        series.clear_annotations();
        if series.len() < 2 {
            debug!(points = series.len(), "Series too short for indicators");
            return Vec::new();
        }

        let prices = series.prices();
        let fast = calculate_sma_series(&prices, self.ma_fast);
        let slow = calculate_sma_series(&prices, self.ma_slow);
        let rsi = calculate_rsi_series(&prices, self.rsi_period);

        let mut rsi_points = Vec::with_capacity(prices.len().saturating_sub(self.rsi_period));
        for (i, point) in series.points_mut().iter_mut().enumerate() {
            point.ma_fast = fast[i];
            point.ma_slow = slow[i];
            if let Some(value) = rsi[i] {
                rsi_points.push(RsiPoint {
                    date: point.date,
                    value,
                });
            }
        }

        debug!(
            points = prices.len(),
            ma_fast = self.ma_fast,
            ma_slow = self.ma_slow,
            rsi_points = rsi_points.len(),
            "Annotated price series"
        );
        rsi_points
    }
}

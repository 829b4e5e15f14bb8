use serde::{Deserialize, Serialize};

use super::price::{PricePoint, RsiPoint};
use super::signal::Signal;

/// Last-price summary shown next to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub current_price: Option<f64>,
    pub previous_price: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
}

impl PriceSummary {
    /// Summarize the last two points; every field is absent below two points.
    pub fn from_points(points: &[PricePoint]) -> Self {
        match points {
            [.., previous, current] => {
                let change = current.price - previous.price;
                Self {
                    current_price: Some(current.price),
                    previous_price: Some(previous.price),
                    change: Some(change),
                    change_percent: Some(change / previous.price * 100.0),
                }
            }
            [only] => Self {
                current_price: Some(only.price),
                ..Self::default()
            },
            [] => Self::default(),
        }
    }
}

/// Everything one `analyze` call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub symbol: String,
    pub period_days: usize,
    pub prices: Vec<PricePoint>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rsi: Option<Vec<RsiPoint>>,
    pub summary: PriceSummary,
    pub signals: Vec<Signal>,
}

//! Price series data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// One daily sample, optionally annotated with moving averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ma_fast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ma_slow: Option<f64>,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64, volume: u64) -> Self {
        Self {
            date,
            price,
            volume,
            ma_fast: None,
            ma_slow: None,
        }
    }

    /// Both moving averages, when the point is past the warm-up of each.
    pub fn moving_averages(&self) -> Option<(f64, f64)> {
        Some((self.ma_fast?, self.ma_slow?))
    }
}

/// RSI value for one date of the price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Ascending, duplicate-free sequence of daily price points.
///
/// Prices are fixed at construction; only the moving-average annotations can
/// change afterwards, and only from inside the crate.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap a list of points.
    ///
    /// Rejects non-finite or non-positive prices and dates that are not
    /// strictly increasing.
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        for (i, point) in points.iter().enumerate() {
            if !point.price.is_finite() || point.price <= 0.0 {
                return Err(AnalysisError::InvalidSeries(format!(
                    "price at {} must be positive, got {}",
                    point.date, point.price
                )));
            }
            if i > 0 && points[i - 1].date >= point.date {
                return Err(AnalysisError::InvalidSeries(format!(
                    "dates must be strictly increasing: {} follows {}",
                    point.date,
                    points[i - 1].date
                )));
            }
        }
        Ok(Self { points })
    }

    /// Build a series from `(date, price, volume)` tuples.
    pub fn from_samples<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64, u64)>,
    {
        Self::new(
            samples
                .into_iter()
                .map(|(date, price, volume)| PricePoint::new(date, price, volume))
                .collect(),
        )
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Keep only the most recent `count` points.
    pub fn tail(mut self, count: usize) -> Self {
        if self.points.len() > count {
            self.points.drain(..self.points.len() - count);
        }
        self
    }

    /// Drop every moving-average annotation.
    pub fn clear_annotations(&mut self) {
        for point in &mut self.points {
            point.ma_fast = None;
            point.ma_slow = None;
        }
    }

    pub(crate) fn points_mut(&mut self) -> &mut [PricePoint] {
        &mut self.points
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }
}

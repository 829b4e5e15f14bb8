//! Shared fixtures for unit tests

#![allow(dead_code)]

use chrono::NaiveDate;
use signalscope::indicators::IndicatorEngine;
use signalscope::models::{PriceSeries, RsiPoint};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn series_from_prices(prices: &[f64]) -> PriceSeries {
    PriceSeries::from_samples(
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| (start_date() + chrono::Days::new(i as u64), price, 1_000)),
    )
    .unwrap()
}

pub fn annotated(
    prices: &[f64],
    ma_fast: usize,
    ma_slow: usize,
    rsi_period: usize,
) -> (PriceSeries, Vec<RsiPoint>) {
    let mut series = series_from_prices(prices);
    let rsi = IndicatorEngine::new(ma_fast, ma_slow, rsi_period).annotate(&mut series);
    (series, rsi)
}

/// 100 flat for 60 days, then +5 per day for 10 days.
pub fn flat_then_rally() -> Vec<f64> {
    let mut prices = vec![100.0; 60];
    prices.extend((1..=10).map(|k| 100.0 + 5.0 * k as f64));
    prices
}

/// Alternating 100/101 for `days` points.
pub fn choppy(days: usize) -> Vec<f64> {
    (0..days)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect()
}

/// 21 points rising by 1 from 100, then 20 points falling by 1.
pub fn rise_then_fall() -> Vec<f64> {
    let mut prices: Vec<f64> = (0..=20).map(|i| 100.0 + i as f64).collect();
    prices.extend((1..=20).map(|k| 120.0 - k as f64));
    prices
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

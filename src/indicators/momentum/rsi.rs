//! RSI (Relative Strength Index) indicator, Wilder smoothing

use crate::common::math;

/// Substituted for a zero average loss so RS stays finite.
pub const ZERO_LOSS_EPSILON: f64 = 0.001;

/// Calculate the RSI series aligned with `prices`.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The averages are seeded with the mean of the first `period` gains and
/// losses; the first value lands on price index `period`. Every later delta
/// updates them as `(avg * (period - 1) + current) / period`. Values are
/// rounded to two decimals. Entries before index `period` are `None`, as is
/// everything when fewer than `period` deltas exist.
pub fn calculate_rsi_series(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut series = vec![None; prices.len()];
    if period == 0 || prices.len() <= period {
        return series;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = prices
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let period_f = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / period_f;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period_f;
    series[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period_f - 1.0) + gains[i]) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + losses[i]) / period_f;
        series[i + 1] = Some(rsi_value(avg_gain, avg_loss));
    }

    series
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let divisor = if avg_loss == 0.0 {
        ZERO_LOSS_EPSILON
    } else {
        avg_loss
    };
    let rs = avg_gain / divisor;
    math::round2(100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
}

//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Calculate the SMA series aligned with `prices`.
///
/// Index `i` holds the unweighted mean of `prices[i + 1 - period..=i]`,
/// rounded to two decimals. The first `period - 1` entries are `None`.
pub fn calculate_sma_series(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; prices.len()];
    }

    (0..prices.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                math::mean(&prices[i + 1 - period..=i]).map(math::round2)
            }
        })
        .collect()
}

//! Sparse HOLD markers for display.
//!
//! Placement is deterministic but carries no trading meaning.

use std::collections::HashSet;

use crate::models::{PricePoint, Signal, SignalKind};

pub const HOLD_REASONS: [&str; 4] = [
    "Market conditions stable, maintaining position.",
    "Indicators showing neutral trend.",
    "Waiting for clearer signal confirmation.",
    "Consolidation phase detected.",
];

/// Merge HOLD markers into `signals` and return the list sorted by date.
///
/// Candidates start at 40% of the series and repeat every eighth of its
/// length. Dates that already carry a signal are skipped.
pub fn with_hold_markers(points: &[PricePoint], mut signals: Vec<Signal>) -> Vec<Signal> {
    if points.is_empty() {
        return signals;
    }

    let taken: HashSet<_> = signals.iter().map(|s| s.date).collect();
    let step = (points.len() / 8).max(1);

    let holds: Vec<Signal> = (points.len() * 2 / 5..points.len())
        .step_by(step)
        .map(|i| &points[i])
        .filter(|point| !taken.contains(&point.date))
        .enumerate()
        .map(|(n, point)| {
            Signal::new(
                point.date,
                SignalKind::Hold,
                point.price,
                HOLD_REASONS[n % HOLD_REASONS.len()],
            )
        })
        .collect();

    signals.extend(holds);
    signals.sort_by_key(|s| s.date);
    signals
}

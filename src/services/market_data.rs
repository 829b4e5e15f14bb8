//! Price sources feeding the analysis pipeline.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::math::round2;
use crate::error::{AnalysisError, Result};
use crate::models::{PricePoint, PriceSeries};

pub trait PriceSource: Send + Sync {
    /// Daily series of at most `days` points ending the day before `end`.
    fn price_series(&self, symbol: &str, days: usize, end: NaiveDate) -> Result<PriceSeries>;
}

const MAX_DAILY_MOVE: f64 = 2.5;
const MIN_PRICE: f64 = 1.0;
const START_VOLUME: f64 = 1_000_000.0;
const MAX_VOLUME_STEP: f64 = 250_000.0;
const MIN_VOLUME: f64 = 100_000.0;

/// Random-walk generator for demonstrations.
///
/// The walk is seeded from the symbol, so one symbol always yields the same
/// prices for a given length and end date.
#[derive(Debug, Clone, Default)]
pub struct RandomWalkSource {
    seed_offset: u64,
}

impl RandomWalkSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mix a fixed offset into every symbol seed.
    pub fn with_seed(seed_offset: u64) -> Self {
        Self { seed_offset }
    }

    /// Starting price derived from the symbol's character codes.
    pub fn start_price(symbol: &str) -> f64 {
        let code_sum: u64 = symbol.chars().map(|c| c as u64).sum();
        50.0 + (code_sum % 200) as f64
    }

    fn seed_for(&self, symbol: &str) -> u64 {
        // FNV-1a
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in symbol.bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        hash ^ self.seed_offset
    }
}

impl PriceSource for RandomWalkSource {
    fn price_series(&self, symbol: &str, days: usize, end: NaiveDate) -> Result<PriceSeries> {
        let mut rng = StdRng::seed_from_u64(self.seed_for(symbol));
        let mut price = Self::start_price(symbol);
        let mut volume = START_VOLUME;

        let mut points = Vec::with_capacity(days);
        for i in 0..days {
            let date = end
                .checked_sub_days(Days::new((days - i) as u64))
                .ok_or_else(|| {
                    AnalysisError::Source(format!("{} days before {} is out of range", days, end))
                })?;

            price = (price + rng.random_range(-MAX_DAILY_MOVE..MAX_DAILY_MOVE)).max(MIN_PRICE);
            volume = (volume + rng.random_range(-MAX_VOLUME_STEP..MAX_VOLUME_STEP)).max(MIN_VOLUME);

            points.push(PricePoint::new(date, round2(price), volume.round() as u64));
        }

        PriceSeries::new(points)
    }
}

/// Serves a fixed series regardless of symbol, trimmed to the requested length.
#[derive(Debug, Clone)]
pub struct StaticPriceSource {
    series: PriceSeries,
}

impl StaticPriceSource {
    pub fn new(series: PriceSeries) -> Self {
        Self { series }
    }

    /// Consecutive daily prices starting at `start`, with zero volume.
    pub fn from_prices(start: NaiveDate, prices: &[f64]) -> Result<Self> {
        let samples = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                start
                    .checked_add_days(Days::new(i as u64))
                    .map(|date| (date, price, 0))
                    .ok_or_else(|| AnalysisError::InvalidSeries("date out of range".to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(PriceSeries::from_samples(samples)?))
    }
}

impl PriceSource for StaticPriceSource {
    fn price_series(&self, _symbol: &str, days: usize, _end: NaiveDate) -> Result<PriceSeries> {
        Ok(self.series.clone().tail(days))
    }
}

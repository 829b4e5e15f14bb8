pub mod catalog;
pub mod market_data;

pub use market_data::{PriceSource, RandomWalkSource, StaticPriceSource};

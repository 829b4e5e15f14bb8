//! Static catalog of popular stocks for quick symbol selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::common::math::round2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    /// Reference price in the listing currency.
    pub price: f64,
    /// Daily change in percent.
    pub change: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

const fn stock(
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
    price: f64,
) -> StockInfo {
    StockInfo {
        symbol,
        name,
        sector,
        price,
        change: 0.0,
        volume: None,
    }
}

pub const POPULAR_STOCKS: [StockInfo; 50] = [
    stock("AAPL", "Apple Inc.", "Technology", 150.00),
    stock("MSFT", "Microsoft Corporation", "Technology", 300.00),
    stock("GOOGL", "Alphabet Inc.", "Technology", 2500.00),
    stock("AMZN", "Amazon.com Inc.", "Consumer Cyclical", 3500.00),
    stock("META", "Meta Platforms Inc.", "Technology", 300.00),
    stock("TSLA", "Tesla Inc.", "Automotive", 200.00),
    stock("JPM", "JPMorgan Chase & Co.", "Financial Services", 150.00),
    stock("V", "Visa Inc.", "Financial Services", 250.00),
    stock("WMT", "Walmart Inc.", "Consumer Defensive", 150.00),
    stock("JNJ", "Johnson & Johnson", "Healthcare", 160.00),
    stock("PG", "Procter & Gamble Co.", "Consumer Defensive", 150.00),
    stock("MA", "Mastercard Inc.", "Financial Services", 400.00),
    stock("UNH", "UnitedHealth Group Inc.", "Healthcare", 500.00),
    stock("HD", "Home Depot Inc.", "Consumer Cyclical", 350.00),
    stock("BAC", "Bank of America Corp.", "Financial Services", 35.00),
    stock("PFE", "Pfizer Inc.", "Healthcare", 30.00),
    stock("DIS", "The Walt Disney Co.", "Communication Services", 100.00),
    stock("NFLX", "Netflix Inc.", "Communication Services", 500.00),
    stock("INTC", "Intel Corporation", "Technology", 45.00),
    // London listings
    stock("HSBA.L", "HSBC Holdings plc", "Financial Services", 600.00),
    stock("BP.L", "BP plc", "Energy", 500.00),
    stock("VOD.L", "Vodafone Group plc", "Communication Services", 100.00),
    stock("GSK.L", "GSK plc", "Healthcare", 1500.00),
    stock("ULVR.L", "Unilever plc", "Consumer Defensive", 4000.00),
    stock("SHEL.L", "Shell plc", "Energy", 2500.00),
    stock("LLOY.L", "Lloyds Banking Group plc", "Financial Services", 50.00),
    stock("RIO.L", "Rio Tinto plc", "Basic Materials", 5000.00),
    stock("BARC.L", "Barclays plc", "Financial Services", 150.00),
    stock("AZN.L", "AstraZeneca plc", "Healthcare", 10000.00),
    // Technology
    stock("ADBE", "Adobe Inc.", "Technology", 500.00),
    stock("CRM", "Salesforce, Inc.", "Technology", 200.00),
    stock("CSCO", "Cisco Systems, Inc.", "Technology", 50.00),
    stock("IBM", "International Business Machines Corp.", "Technology", 150.00),
    stock("ORCL", "Oracle Corporation", "Technology", 100.00),
    // Financials
    stock("C", "Citigroup Inc.", "Financial Services", 50.00),
    stock("GS", "Goldman Sachs Group Inc.", "Financial Services", 350.00),
    stock("MS", "Morgan Stanley", "Financial Services", 90.00),
    stock("AXP", "American Express Company", "Financial Services", 180.00),
    // Consumer
    stock("KO", "The Coca-Cola Company", "Consumer Defensive", 60.00),
    stock("PEP", "PepsiCo, Inc.", "Consumer Defensive", 170.00),
    stock("MCD", "McDonald's Corporation", "Consumer Cyclical", 280.00),
    stock("NKE", "Nike, Inc.", "Consumer Cyclical", 100.00),
    stock("SBUX", "Starbucks Corporation", "Consumer Cyclical", 100.00),
    // Healthcare
    stock("MRK", "Merck & Co., Inc.", "Healthcare", 120.00),
    stock("BMY", "Bristol-Myers Squibb Company", "Healthcare", 50.00),
    stock("ABBV", "AbbVie Inc.", "Healthcare", 150.00),
    stock("LLY", "Eli Lilly and Company", "Healthcare", 700.00),
    // Energy
    stock("XOM", "Exxon Mobil Corporation", "Energy", 100.00),
    stock("CVX", "Chevron Corporation", "Energy", 150.00),
    stock("COP", "ConocoPhillips", "Energy", 120.00),
];

/// Sector taxonomy offered for filtering, including sectors with no listed stock.
pub const STOCK_SECTORS: [&str; 11] = [
    "Technology",
    "Financial Services",
    "Healthcare",
    "Consumer Cyclical",
    "Communication Services",
    "Industrial",
    "Consumer Defensive",
    "Energy",
    "Basic Materials",
    "Real Estate",
    "Utilities",
];

const MAX_CHANGE_PERCENT: f64 = 5.0;
const MIN_VOLUME: u64 = 100_000;
const MAX_VOLUME: u64 = 1_100_000;

pub fn popular_stocks() -> &'static [StockInfo] {
    &POPULAR_STOCKS
}

pub fn stock_sectors() -> &'static [&'static str] {
    &STOCK_SECTORS
}

/// Case-insensitive lookup by ticker.
pub fn get_stock_by_symbol(symbol: &str) -> Option<&'static StockInfo> {
    let symbol = symbol.trim();
    POPULAR_STOCKS
        .iter()
        .find(|stock| stock.symbol.eq_ignore_ascii_case(symbol))
}

pub fn get_stocks_by_sector(sector: &str) -> Vec<&'static StockInfo> {
    POPULAR_STOCKS
        .iter()
        .filter(|stock| stock.sector == sector)
        .collect()
}

/// Sector names in first-seen order.
pub fn unique_sectors() -> Vec<&'static str> {
    let mut sectors: Vec<&'static str> = Vec::new();
    for stock in &POPULAR_STOCKS {
        if !sectors.contains(&stock.sector) {
            sectors.push(stock.sector);
        }
    }
    sectors
}

/// Copy `stocks` with a simulated daily change within five percent either way
/// and a volume in [100k, 1.1M). The same seed gives the same figures.
pub fn simulate_stock_performance(stocks: &[StockInfo], seed: u64) -> Vec<StockInfo> {
    let mut rng = StdRng::seed_from_u64(seed);
    stocks
        .iter()
        .map(|stock| StockInfo {
            change: round2((rng.random::<f64>() - 0.5) * 2.0 * MAX_CHANGE_PERCENT),
            volume: Some(rng.random_range(MIN_VOLUME..MAX_VOLUME)),
            ..*stock
        })
        .collect()
}

//! Unit tests for the stock catalog

use signalscope::services::catalog::{
    get_stock_by_symbol, get_stocks_by_sector, popular_stocks, simulate_stock_performance,
    stock_sectors, unique_sectors,
};

#[test]
fn test_lookup_is_case_insensitive() {
    let stock = get_stock_by_symbol("msft").unwrap();
    assert_eq!(stock.name, "Microsoft Corporation");
    assert_eq!(get_stock_by_symbol("hsba.l").unwrap().name, "HSBC Holdings plc");
    assert!(get_stock_by_symbol("XYZ").is_none());
}

#[test]
fn test_symbols_are_unique() {
    let stocks = popular_stocks();
    assert_eq!(stocks.len(), 50);
    for (i, stock) in stocks.iter().enumerate() {
        assert!(
            stocks[i + 1..].iter().all(|other| other.symbol != stock.symbol),
            "duplicate {}",
            stock.symbol
        );
    }
}

#[test]
fn test_stocks_by_sector() {
    let tech = get_stocks_by_sector("Technology");
    assert_eq!(tech.len(), 10);
    assert!(tech.iter().all(|s| s.sector == "Technology"));

    let healthcare: Vec<&str> = get_stocks_by_sector("Healthcare")
        .iter()
        .map(|s| s.symbol)
        .collect();
    assert_eq!(
        healthcare,
        vec!["JNJ", "UNH", "PFE", "GSK.L", "AZN.L", "MRK", "BMY", "ABBV", "LLY"]
    );
    assert_eq!(get_stocks_by_sector("Energy").len(), 5);
    assert!(get_stocks_by_sector("Utilities").is_empty());
}

#[test]
fn test_unique_sectors_in_first_seen_order() {
    assert_eq!(
        unique_sectors(),
        vec![
            "Technology",
            "Consumer Cyclical",
            "Automotive",
            "Financial Services",
            "Consumer Defensive",
            "Healthcare",
            "Communication Services",
            "Energy",
            "Basic Materials",
        ]
    );
}

#[test]
fn test_sector_taxonomy() {
    let sectors = stock_sectors();
    assert_eq!(sectors.len(), 11);
    assert!(sectors.contains(&"Real Estate"));
    assert!(!sectors.contains(&"Automotive"));
}

#[test]
fn test_simulated_performance_is_seeded_and_bounded() {
    let first = simulate_stock_performance(popular_stocks(), 42);
    let second = simulate_stock_performance(popular_stocks(), 42);
    assert_eq!(first, second);
    assert_ne!(first, simulate_stock_performance(popular_stocks(), 43));

    for (simulated, listed) in first.iter().zip(popular_stocks()) {
        assert_eq!(simulated.symbol, listed.symbol);
        assert_eq!(simulated.price, listed.price);
        assert!((-5.0..=5.0).contains(&simulated.change));
        let volume = simulated.volume.unwrap();
        assert!((100_000..1_100_000).contains(&volume));
    }
}

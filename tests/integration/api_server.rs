//! Integration tests for the API Server
//!
//! Tests health, metrics, analysis and catalog endpoints.

#[path = "api_server/test_utils.rs"]
mod test_utils;

use serde_json::{json, Value};

use test_utils::TestApiServer;

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "signalscope");
}

#[tokio::test]
async fn analyze_returns_series_rsi_summary_and_signals() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({
            "symbol": "AAPL",
            "period": "1y",
            "maFast": 10,
            "maSlow": 30
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["periodDays"], 365);

    let prices = body["prices"].as_array().unwrap();
    assert_eq!(prices.len(), 365);
    assert!(prices[8].get("maFast").is_none());
    assert!(prices[9]["maFast"].as_f64().is_some());
    assert!(prices[29]["maSlow"].as_f64().is_some());

    let rsi = body["rsi"].as_array().unwrap();
    assert_eq!(rsi.len(), 365 - 14);
    assert_eq!(rsi[0]["date"], prices[14]["date"]);

    assert!(body["summary"]["currentPrice"].as_f64().is_some());
    for signal in body["signals"].as_array().unwrap() {
        let kind = signal["signal"].as_str().unwrap();
        assert!(kind == "BUY" || kind == "SELL", "unexpected {kind}");
        assert!(signal["reason"].as_str().unwrap().contains("MA(10)")
            || signal["reason"].as_str().unwrap().starts_with("RSI(14)"));
    }
}

#[tokio::test]
async fn analyze_rejects_invalid_parameters() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "maFast": 50, "maSlow": 20 }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "invalid_parameter");
    assert!(body["message"].as_str().unwrap().contains("maSlow"));
}

#[tokio::test]
async fn analyze_maps_malformed_body_to_invalid_parameter() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "maFast": -5 }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "invalid_parameter");
    assert!(body["message"].as_str().unwrap().contains("maFast"));

    let metrics = app.server.get("/metrics").await.text();
    assert!(metrics.contains("analyses_total{outcome=\"invalid_parameter\"} 1"));
}

#[tokio::test]
async fn analyze_rejects_oversized_rsi_period() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "rsiPeriod": usize::MAX }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"], "invalid_parameter");
}

#[tokio::test]
async fn analyze_omits_rsi_when_disabled() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "symbol": "JPM", "showRSI": false }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert!(body.get("rsi").is_none());
    assert_eq!(body["periodDays"], 180);
}

#[tokio::test]
async fn stock_catalog_endpoints() {
    let app = TestApiServer::new().await;

    let all: Value = app.server.get("/api/stocks").await.json();
    assert_eq!(all.as_array().unwrap().len(), 50);
    assert!(all[0].get("volume").is_none());

    let healthcare: Value = app
        .server
        .get("/api/stocks")
        .add_query_param("sector", "Healthcare")
        .await
        .json();
    assert_eq!(healthcare.as_array().unwrap().len(), 9);
    assert_eq!(healthcare[0]["symbol"], "JNJ");

    let tesla = app.server.get("/api/stocks/tsla").await;
    assert_eq!(tesla.status_code(), 200);
    assert_eq!(tesla.json::<Value>()["name"], "Tesla Inc.");

    let missing = app.server.get("/api/stocks/NOPE").expect_failure().await;
    assert_eq!(missing.status_code(), 404);

    let sectors: Value = app.server.get("/api/sectors").await.json();
    assert_eq!(sectors.as_array().unwrap().len(), 9);

    let taxonomy: Value = app
        .server
        .get("/api/sectors")
        .add_query_param("all", "true")
        .await
        .json();
    assert_eq!(taxonomy.as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn performance_endpoint_is_reproducible_per_seed() {
    let app = TestApiServer::new().await;

    let mut responses = Vec::new();
    for _ in 0..2 {
        let body: Value = app
            .server
            .get("/api/performance")
            .add_query_param("sector", "Energy")
            .add_query_param("seed", 7)
            .await
            .json();
        responses.push(body);
    }
    assert_eq!(responses[0], responses[1]);
    let first = &responses[0];

    let stocks = first.as_array().unwrap();
    assert_eq!(stocks.len(), 5);
    for stock in stocks {
        assert_eq!(stock["sector"], "Energy");
        assert!(stock["change"].as_f64().unwrap().abs() <= 5.0);
        assert!(stock["volume"].as_u64().unwrap() >= 100_000);
    }
}

#[tokio::test]
async fn metrics_endpoint_tracks_requests_and_analyses() {
    let app = TestApiServer::new().await;

    let _ = app
        .server
        .post("/api/analyze")
        .json(&json!({ "symbol": "NVDA" }))
        .await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("http_requests_in_flight"));
    assert!(body.contains("analyses_total{outcome=\"ok\"} 1"));
}

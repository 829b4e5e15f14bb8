//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::error::AnalysisError;
use crate::metrics::Metrics;
use crate::models::{AnalysisResult, TradingParameters};
use crate::pipeline::AnalysisPipeline;
use crate::services::catalog::{self, StockInfo};
use crate::services::market_data::RandomWalkSource;

pub const SERVICE_NAME: &str = "signalscope";

#[derive(Clone)]
pub struct AppState {
    pub health: HealthStatus,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub pipeline: Arc<AnalysisPipeline>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(json!({ "error": code, "message": message.into() })),
    )
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let status = match err {
            AnalysisError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            AnalysisError::InvalidSeries(_) | AnalysisError::Source(_) => StatusCode::BAD_GATEWAY,
        };
        api_error(status, err.code(), err.to_string())
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": state.health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Run one analysis with the posted parameters
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<TradingParameters>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let params = match payload {
        Ok(Json(params)) => params,
        Err(rejection) => {
            let err = AnalysisError::InvalidParameter(rejection.body_text());
            state
                .metrics
                .analyses_total
                .with_label_values(&[err.code()])
                .inc();
            return Err(err.into());
        }
    };

    match state.pipeline.analyze(&params) {
        Ok(result) => {
            state
                .metrics
                .analyses_total
                .with_label_values(&["ok"])
                .inc();
            for signal in &result.signals {
                state
                    .metrics
                    .signals_generated_total
                    .with_label_values(&[signal.signal.as_str()])
                    .inc();
            }
            Ok(Json(result))
        }
        Err(e) => {
            state
                .metrics
                .analyses_total
                .with_label_values(&[e.code()])
                .inc();
            Err(e.into())
        }
    }
}

#[derive(Debug, Deserialize)]
struct StockQuery {
    sector: Option<String>,
}

fn stocks_for(sector: Option<&str>) -> Vec<StockInfo> {
    match sector {
        Some(sector) => catalog::get_stocks_by_sector(sector)
            .into_iter()
            .copied()
            .collect(),
        None => catalog::popular_stocks().to_vec(),
    }
}

/// List catalog stocks, optionally filtered by sector
async fn list_stocks(Query(query): Query<StockQuery>) -> Json<Vec<StockInfo>> {
    Json(stocks_for(query.sector.as_deref()))
}

#[derive(Debug, Deserialize)]
struct PerformanceQuery {
    sector: Option<String>,
    /// Defaults to the current day, so figures change once per day.
    seed: Option<u64>,
}

/// Catalog stocks with simulated daily change and volume
async fn stock_performance(Query(query): Query<PerformanceQuery>) -> Json<Vec<StockInfo>> {
    let seed = query
        .seed
        .unwrap_or_else(|| Utc::now().date_naive().num_days_from_ce() as u64);
    let stocks = stocks_for(query.sector.as_deref());
    Json(catalog::simulate_stock_performance(&stocks, seed))
}

async fn get_stock(Path(symbol): Path<String>) -> Result<Json<StockInfo>, ApiError> {
    catalog::get_stock_by_symbol(&symbol)
        .copied()
        .map(Json)
        .ok_or_else(|| {
            api_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("unknown symbol {}", symbol),
            )
        })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SectorQuery {
    /// Return the full sector taxonomy instead of the sectors in the catalog.
    all: bool,
}

async fn list_sectors(Query(query): Query<SectorQuery>) -> Json<Vec<&'static str>> {
    if query.all {
        Json(catalog::stock_sectors().to_vec())
    } else {
        Json(catalog::unique_sectors())
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze))
        .route("/api/stocks", get(list_stocks))
        .route("/api/stocks/{symbol}", get(get_stock))
        .route("/api/sectors", get(list_sectors))
        .route("/api/performance", get(stock_performance))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let pipeline = Arc::new(AnalysisPipeline::new(Arc::new(RandomWalkSource::new())));

    let state = AppState {
        health: HealthStatus::default(),
        metrics,
        start_time: Arc::new(Instant::now()),
        pipeline,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}

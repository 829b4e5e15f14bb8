//! Test utilities for API server integration tests

use axum_test::TestServer;
use chrono::NaiveDate;
use signalscope::core::http::{create_router, AppState, HealthStatus};
use signalscope::metrics::Metrics;
use signalscope::pipeline::AnalysisPipeline;
use signalscope::services::RandomWalkSource;
use std::sync::Arc;
use std::time::Instant;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let pipeline = AnalysisPipeline::new(Arc::new(RandomWalkSource::new()))
            .with_as_of(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        let state = AppState {
            health: HealthStatus::default(),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            pipeline: Arc::new(pipeline),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}

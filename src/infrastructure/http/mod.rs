pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, insight::InsightController, report::ReportController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn build_router(
    report_controller: Arc<ReportController>,
    insight_controller: Arc<InsightController>,
) -> Router {
    let report_routes = Router::new()
        .route("/generate_report", post(ReportController::generate_report))
        .with_state(report_controller);

    let insight_routes = Router::new()
        .route("/insight", post(InsightController::insight))
        .with_state(insight_controller);

    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .merge(report_routes)
        .merge(insight_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    report_controller: Arc<ReportController>,
    insight_controller: Arc<InsightController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(report_controller, insight_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

use axum::{http::StatusCode, response::IntoResponse};

pub const USAGE: &str = "Startup Report Generator API - POST to /generate_report with JSON \
{'query': 'your-idea'}, or POST to /insight with JSON {'idea': 'your-idea', 'emotion': 'motivational'}";

/// GET / - Static usage string
pub async fn index() -> impl IntoResponse {
    (StatusCode::OK, USAGE)
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

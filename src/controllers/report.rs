use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::report::{Report, ReportService, ReportServiceApi},
    error::{AppError, AppResult},
};

pub const INVALID_JSON: &str = "Invalid JSON payload";
pub const MISSING_QUERY: &str = "Please provide the startup query in the 'query' field.";

pub struct ReportController {
    report_service: Arc<ReportService>,
}

impl ReportController {
    pub fn new(report_service: Arc<ReportService>) -> Self {
        Self { report_service }
    }

    /// POST /generate_report - Generate the ten-section business report
    ///
    /// The body is parsed as JSON whatever the declared content type.
    pub async fn generate_report(
        State(controller): State<Arc<ReportController>>,
        body: Bytes,
    ) -> AppResult<Json<Report>> {
        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::info!(error = %e, "Error parsing JSON");
            AppError::BadRequest(INVALID_JSON.to_string())
        })?;

        let query = payload
            .get("query")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::BadRequest(MISSING_QUERY.to_string()))?;

        let report = controller.report_service.generate_report(query).await;

        Ok(Json(report))
    }
}

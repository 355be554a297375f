use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::insight::{Emotion, InsightService, InsightServiceApi, UnknownEmotion},
    error::{AppError, AppResult},
};

pub const MISSING_IDEA: &str = "Missing startup idea";

pub struct InsightController {
    insight_service: Arc<InsightService>,
}

impl InsightController {
    pub fn new(insight_service: Arc<InsightService>) -> Self {
        Self { insight_service }
    }

    /// POST /insight - Narrate an insight about the idea as an MP3 attachment
    pub async fn insight(
        State(controller): State<Arc<InsightController>>,
        body: Bytes,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let payload: Option<Value> = serde_json::from_slice(&body).ok();

        let idea = payload
            .as_ref()
            .and_then(|p| p.get("idea"))
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::BadRequest(MISSING_IDEA.to_string()))?;

        let emotion = parse_emotion(payload.as_ref().and_then(|p| p.get("emotion")))?;

        let insight = controller
            .insight_service
            .generate_insight(idea, emotion)
            .await?;

        let disposition = format!("attachment; filename=\"{}\"", insight.emotion.file_name());

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&disposition).map_err(|e| AppError::Internal(e.to_string()))?,
        );

        Ok((StatusCode::OK, headers, Body::from(insight.audio_data)))
    }
}

/// Absent or null means the default preset; unknown labels are rejected
fn parse_emotion(value: Option<&Value>) -> AppResult<Emotion> {
    match value {
        None | Some(Value::Null) => Ok(Emotion::default()),
        Some(Value::String(label)) => label
            .parse()
            .map_err(|e: UnknownEmotion| AppError::BadRequest(e.to_string())),
        Some(other) => Err(AppError::BadRequest(
            UnknownEmotion(other.to_string()).to_string(),
        )),
    }
}

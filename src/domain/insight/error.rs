use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum InsightServiceError {
    #[error("{0}")]
    Completion(String),
    #[error("{0}")]
    Synthesis(String),
}

impl From<InsightServiceError> for AppError {
    fn from(err: InsightServiceError) -> Self {
        match err {
            InsightServiceError::Completion(msg) | InsightServiceError::Synthesis(msg) => {
                AppError::ExternalService(msg)
            }
        }
    }
}

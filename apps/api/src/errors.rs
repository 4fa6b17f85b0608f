use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Not a resume: {0}")]
    NotAResume(String),

    #[error("Malformed model response: {0}")]
    MalformedModelResponse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::Extraction(ExtractionError::Task(msg)) => {
                AppError::Internal(anyhow::anyhow!("extraction task failed: {msg}"))
            }
            AnalysisError::Extraction(e) => AppError::Extraction(e),
            AnalysisError::NotAResume(reason) => AppError::NotAResume(reason),
            AnalysisError::MalformedModelResponse(msg) => AppError::MalformedModelResponse(msg),
            AnalysisError::Merge(e) => AppError::MalformedModelResponse(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_ERROR",
                e.to_string(),
            ),
            AppError::NotAResume(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NOT_A_RESUME",
                reason.clone(),
            ),
            AppError::MalformedModelResponse(msg) => {
                tracing::error!("Malformed model response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_MODEL_RESPONSE",
                    "The AI service returned an unusable response".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_resume_maps_to_422() {
        let response = AppError::from(AnalysisError::NotAResume("nope".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_merge_error_maps_to_bad_gateway() {
        let error = AnalysisError::Merge(crate::analysis::merge::MergeError { found: "array" });
        let response = AppError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_extraction_task_failure_is_internal() {
        let error = AnalysisError::Extraction(ExtractionError::Task("panicked".to_string()));
        let response = AppError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_extraction_error_maps_to_422() {
        let response = AppError::from(ExtractionError::NoPages).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

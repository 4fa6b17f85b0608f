//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::AnalysisReport;
use crate::checklist::{self, ChecklistItem};
use crate::errors::AppError;
use crate::scoring::{MetricDefinition, METRICS};
use crate::state::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChecklistRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: &'static [MetricDefinition],
}

/// The two parts of an analyze upload.
struct AnalyzeUpload {
    job_description: String,
    resume: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart fields: `job_description` (text) and `resume` (PDF file).
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        "Analyzing resume upload ({} bytes, jd {} chars)",
        upload.resume.len(),
        upload.job_description.chars().count()
    );

    let report = state
        .analyzer
        .run(upload.resume, &upload.job_description)
        .await?;
    Ok(Json(report))
}

/// POST /api/v1/checklist
///
/// Local presence checklist over already-extracted text. Never calls the model.
pub async fn handle_checklist(
    Json(request): Json<ChecklistRequest>,
) -> Json<ChecklistResponse> {
    Json(ChecklistResponse {
        checklist: checklist::evaluate(&request.text),
    })
}

/// GET /api/v1/metrics
pub async fn handle_metrics() -> Json<MetricsResponse> {
    Json(MetricsResponse { metrics: &METRICS })
}

async fn read_upload(mut multipart: Multipart) -> Result<AnalyzeUpload, AppError> {
    let mut job_description: Option<String> = None;
    let mut resume: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid job_description: {e}")))?;
                job_description = Some(text);
            }
            Some("resume") => {
                if let Some(content_type) = field.content_type() {
                    if content_type != PDF_CONTENT_TYPE {
                        return Err(AppError::Validation(
                            "Only PDF files are accepted".to_string(),
                        ));
                    }
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                resume = Some(data);
            }
            _ => {}
        }
    }

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;
    let resume = resume
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    Ok(AnalyzeUpload {
        job_description,
        resume,
    })
}

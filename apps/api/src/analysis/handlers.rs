//! Axum route handler for the resume screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};
use tracing::warn;

use crate::analysis::prompts::build_prompt;
use crate::analysis::report::extract_report;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analyze
///
/// Accepts a multipart form with a `resume` PDF part and a `job_description`
/// text field, and runs the screening pipeline: extract text, build the
/// prompt, call the model, extract the structured report.
///
/// A resume whose text cannot be extracted is reported inside a 200 body as
/// `{"error": "Failed to read PDF: ..."}`; the model is not called in that
/// case.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut resume: Option<Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read resume upload: {e}"))
                })?;
                resume = Some(bytes);
            }
            "job_description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read job description: {e}"))
                })?;
                job_description = Some(text);
            }
            // unknown parts are ignored
            _ => {}
        }
    }

    let resume = resume
        .ok_or_else(|| AppError::UnprocessableEntity("Missing 'resume' file part".to_string()))?;
    let job_description = job_description.ok_or_else(|| {
        AppError::UnprocessableEntity("Missing 'job_description' form field".to_string())
    })?;

    let resume_text = match state.extractor.extract(&resume) {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume text extraction failed: {e}");
            return Ok(Json(json!({ "error": format!("Failed to read PDF: {e}") })));
        }
    };

    let prompt = build_prompt(&resume_text, &job_description);
    let reply = state.inference.generate(&prompt).await?;

    Ok(Json(extract_report(&reply)))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

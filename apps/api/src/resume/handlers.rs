//! Axum route handler for resume analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::extract::{extract_text, ResumeUpload};
use crate::resume::keyword_match::{analyze_resume, ResumeMatch};
use crate::state::AppState;

/// Multipart field carrying the resume file.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    pub file_name: Option<String>,
    pub matches: Vec<ResumeMatch>,
}

/// POST /api/v1/resumes/analyze
///
/// Accepts a PDF, DOCX or plain-text resume in the `file` field and scores it
/// against every job.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;

        upload = Some(ResumeUpload {
            file_name,
            content_type,
            data,
        });
        break;
    }

    let upload = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing '{FILE_FIELD}' field with the resume"))
    })?;

    let text = extract_text(&upload).await?;
    let matches = analyze_resume(&text, state.fixtures.jobs());
    info!(
        "Analyzed resume ({} chars) against {} jobs",
        text.len(),
        matches.len()
    );

    Ok(Json(ResumeAnalysisResponse {
        file_name: upload.file_name,
        matches,
    }))
}

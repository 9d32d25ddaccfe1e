//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyze;
use crate::analysis::models::AnalysisResult;
use crate::analysis::scoring::ScoreRating;
use crate::errors::AppError;
use crate::extraction::DocumentKind;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub message: String,
    /// Correlates the response with server logs; analyses are not stored.
    pub analysis_id: Uuid,
    pub filename: Option<String>,
    pub analyzed_at: DateTime<Utc>,
    pub rating: ScoreRating,
    pub analysis: AnalysisResult,
}

struct UploadedResume {
    filename: String,
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Multipart upload with a `resume` field holding a PDF or DOCX file.
/// Extracts the text and returns the full analysis.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_resume_field(&mut multipart).await?;

    let kind = DocumentKind::detect(&upload.filename, upload.content_type.as_deref())
        .ok_or_else(|| {
            AppError::UnsupportedMediaType("Only PDF and DOCX files are allowed".to_string())
        })?;

    let text = state.extractor.extract(kind, upload.bytes).await?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from file".to_string(),
        ));
    }
    let chars = check_text_length(&text, state.config.max_text_chars)?;

    let response = build_response(&text, Some(upload.filename));
    info!(
        analysis_id = %response.analysis_id,
        filename = response.filename.as_deref().unwrap_or_default(),
        kind = ?kind,
        chars,
        overall_score = response.analysis.overall_score,
        "Resume analyzed"
    );

    Ok(Json(response))
}

/// POST /api/v1/resumes/analyze/text
///
/// Analyzes already-extracted resume text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let chars = check_text_length(&request.text, state.config.max_text_chars)?;

    let response = build_response(&request.text, None);
    info!(
        analysis_id = %response.analysis_id,
        chars,
        overall_score = response.analysis.overall_score,
        "Resume text analyzed"
    );

    Ok(Json(response))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_resume_field(multipart: &mut Multipart) -> Result<UploadedResume, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        let content_type = field.content_type().map(String::from);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        return Ok(UploadedResume {
            filename,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file exceeds the size limit".to_string())
    } else {
        AppError::Validation(format!("Invalid multipart upload: {}", e.body_text()))
    }
}

/// Returns the character count when it is within `max_chars`.
fn check_text_length(text: &str, max_chars: usize) -> Result<usize, AppError> {
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume text exceeds {max_chars} characters"
        )));
    }
    Ok(chars)
}

fn build_response(text: &str, filename: Option<String>) -> AnalyzeResponse {
    let analysis = analyze(text);
    AnalyzeResponse {
        message: "Resume analyzed successfully".to_string(),
        analysis_id: Uuid::new_v4(),
        filename,
        analyzed_at: Utc::now(),
        rating: ScoreRating::from_score(analysis.overall_score),
        analysis,
    }
}

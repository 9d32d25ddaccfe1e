//! Text extraction: turns uploaded resume bytes into plain text for analysis.
//!
//! Pluggable behind the `TextExtractor` trait; `AppState` holds an
//! `Arc<dyn TextExtractor>` so tests can swap in a fake. A parse failure is an
//! `ExtractionError`; a document that parses but has no text returns `Ok("")`
//! and the caller decides what to do with it.

pub mod docx;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the kind from the filename extension, then the content type.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            return Some(DocumentKind::Pdf);
        }
        if lower.ends_with(".docx") {
            return Some(DocumentKind::Docx);
        }
        match content_type {
            Some(ct) if ct.starts_with(PDF_CONTENT_TYPE) => Some(DocumentKind::Pdf),
            Some(ct) if ct.starts_with(DOCX_CONTENT_TYPE) => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// Default extractor: `pdf-extract` for PDF, OOXML zip parsing for DOCX.
/// Parsing is CPU-bound and runs on the blocking pool.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractionError> {
        tokio::task::spawn_blocking(move || match kind {
            DocumentKind::Pdf => extract_pdf(&bytes),
            DocumentKind::Docx => docx::extract_docx(&bytes),
        })
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

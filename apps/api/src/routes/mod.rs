pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze_upload))
        .route(
            "/api/v1/resumes/analyze/text",
            post(handlers::handle_analyze_text),
        )
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use bytes::Bytes;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::extraction::{DocumentKind, ExtractionError, TextExtractor};

    const BOUNDARY: &str = "resume-test-boundary";

    const RESUME_TEXT: &str = "Summary\nExperience: Led 4 engineers and reduced costs by 30%.\n\
        Education: State University\nSkills: Python, Docker\nProjects: CLI tools";

    /// Returns canned text, or an error for documents containing `corrupt`.
    struct FakeExtractor;

    #[async_trait]
    impl TextExtractor for FakeExtractor {
        async fn extract(
            &self,
            kind: DocumentKind,
            bytes: Bytes,
        ) -> Result<String, ExtractionError> {
            let body = String::from_utf8_lossy(&bytes).to_string();
            if body.contains("corrupt") {
                return Err(match kind {
                    DocumentKind::Pdf => ExtractionError::Pdf("bad xref table".to_string()),
                    DocumentKind::Docx => ExtractionError::Docx("bad zip".to_string()),
                });
            }
            Ok(body)
        }
    }

    fn app_with(config: Config) -> Router {
        build_router(AppState {
            config,
            extractor: Arc::new(FakeExtractor),
        })
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    fn multipart_request(field: &str, filename: &str, content_type: &str, data: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {data}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn text_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/analyze/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_upload_pdf_returns_analysis() {
        let request = multipart_request("resume", "cv.pdf", "application/pdf", RESUME_TEXT);
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Resume analyzed successfully");
        assert_eq!(body["filename"], "cv.pdf");
        assert!(body["analysis_id"].is_string());
        assert_eq!(body["analysis"]["missing_sections"], json!(["objective"]));
        assert_eq!(body["analysis"]["experience_analysis"]["numbers_found"], json!(["4", "30%"]));
        let score = body["analysis"]["overall_score"].as_u64().unwrap();
        assert!(score <= 100);
        assert!(body["rating"].is_string());
    }

    #[tokio::test]
    async fn test_upload_docx_detected_by_extension() {
        let request = multipart_request(
            "resume",
            "Resume.DOCX",
            "application/octet-stream",
            RESUME_TEXT,
        );
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_unsupported_type() {
        let request = multipart_request("resume", "cv.txt", "text/plain", RESUME_TEXT);
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_missing_field() {
        let request = multipart_request("attachment", "cv.pdf", "application/pdf", RESUME_TEXT);
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_upload_empty_filename() {
        let request = multipart_request("resume", "", "application/pdf", RESUME_TEXT);
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file selected");
    }

    #[tokio::test]
    async fn test_upload_extraction_failure_distinct_from_empty() {
        let request = multipart_request("resume", "cv.pdf", "application/pdf", "corrupt");
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EXTRACTION_FAILED");

        let request = multipart_request("resume", "cv.pdf", "application/pdf", "   ");
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Could not extract text from file");
    }

    #[tokio::test]
    async fn test_upload_text_over_limit() {
        let config = Config {
            max_text_chars: 10,
            ..Config::default()
        };
        let request = multipart_request("resume", "cv.pdf", "application/pdf", RESUME_TEXT);
        let (status, body) = send(app_with(config), request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_analyze_text() {
        let (status, body) = send(app(), text_request(json!({"text": "python react aws"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["filename"].is_null());
        assert_eq!(body["analysis"]["skills"]["frameworks"], json!(["react"]));
        assert_eq!(body["analysis"]["skills"]["cloud_tools"], json!(["aws"]));
        assert_eq!(body["analysis"]["recommendations"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_analyze_text_rejects_blank() {
        let (status, body) = send(app(), text_request(json!({"text": "  \n "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

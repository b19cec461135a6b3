//! Assessment evaluation HTTP handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use persona_core::sample_responses;
use tracing::warn;

use crate::dto::{EvaluateRequest, ReportResponse};
use crate::error::AppError;
use crate::services::report as report_service;
use crate::ServerState;

/// POST /evaluate - Generate a report from submitted responses.
pub async fn evaluate(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        warn!("Malformed evaluate request: {}", e.body_text());
        AppError::InvalidResponses
    })?;

    let report = report_service::generate_report(state.generator.as_ref(), &req.responses).await?;
    Ok(Json(ReportResponse { report }))
}

/// GET /test - Run the pipeline over the built-in sample responses.
pub async fn sample(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<ReportResponse>, AppError> {
    let report = report_service::generate_report(state.generator.as_ref(), &sample_responses()).await?;
    Ok(Json(ReportResponse { report }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use persona_core::{ModelError, TextGenerator, REPORT_SCHEMA};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::error::{INVALID_RESPONSES, REPORT_FAILED};
    use crate::{build_router, ServerState};

    /// Records every prompt and answers with a canned report or a failure.
    struct FakeGenerator {
        fail: bool,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self { fail, prompts: Mutex::new(Vec::new()) })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(ModelError::MissingText);
            }
            Ok("{\"mbti\": {\"type\": \"ENFP\"}}".to_string())
        }
    }

    fn app(generator: Arc<FakeGenerator>) -> Router {
        build_router(Arc::new(ServerState::new(generator)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_evaluate(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_evaluate_returns_report() {
        let generator = FakeGenerator::new(false);
        let (status, body) =
            send(app(generator.clone()), post_evaluate(r#"{"responses": {"1": 4}}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"report": "{\"mbti\": {\"type\": \"ENFP\"}}"}));

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        let question_lines: Vec<&str> =
            prompts[0].lines().filter(|l| l.starts_with("Question ")).collect();
        assert_eq!(question_lines.len(), 1);
        assert!(question_lines[0].starts_with("Question 1: "));
        assert!(question_lines[0].ends_with("- Response: 4"));
        assert!(prompts[0].ends_with(REPORT_SCHEMA));
    }

    #[tokio::test]
    async fn test_evaluate_unknown_index_never_prompts() {
        let generator = FakeGenerator::new(false);
        let (status, body) =
            send(app(generator.clone()), post_evaluate(r#"{"responses": {"99": "yes"}}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": INVALID_RESPONSES}));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_invalid_value_is_generic_400() {
        let generator = FakeGenerator::new(false);
        let (status, body) = send(
            app(generator.clone()),
            post_evaluate(r#"{"responses": {"1": 4, "2": "Yes"}}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid responses format or values."}));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_malformed_body_is_400() {
        for body in ["not json", r#"{"answers": {}}"#, r#"{"responses": [1, 2]}"#] {
            let generator = FakeGenerator::new(false);
            let (status, value) = send(app(generator.clone()), post_evaluate(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(value, json!({"error": INVALID_RESPONSES}));
            assert!(generator.prompts().is_empty());
        }
    }

    #[tokio::test]
    async fn test_evaluate_model_failure_is_500() {
        let generator = FakeGenerator::new(true);
        let (status, body) =
            send(app(generator.clone()), post_evaluate(r#"{"responses": {"2": "no"}}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": REPORT_FAILED}));
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_sample_endpoint_reaches_model() {
        let generator = FakeGenerator::new(false);
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let (status, body) = send(app(generator.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["report"].is_string());

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        let count = prompts[0].lines().filter(|l| l.starts_with("Question ")).count();
        assert_eq!(count, 20);
    }

    #[tokio::test]
    async fn test_sample_endpoint_model_failure_is_500() {
        let generator = FakeGenerator::new(true);
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let (status, body) = send(app(generator), request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": REPORT_FAILED}));
    }

    #[tokio::test]
    async fn test_evaluate_cors_preflight() {
        let generator = FakeGenerator::new(false);
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/evaluate")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app(generator.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_response_carries_cors_header() {
        let request = Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header("origin", "http://localhost:3000")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"responses": {"1": 4}}"#))
            .unwrap();
        let response = app(FakeGenerator::new(false)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(FakeGenerator::new(false)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

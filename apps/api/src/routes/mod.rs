pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::boolean::handlers as boolean;
use crate::detection::handlers as detection;
use crate::pipeline::handlers as pipeline;
use crate::skill_context::handlers as skill_context;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis
        .route("/api/analyze-jd", post(pipeline::handle_analyze_jd))
        .route(
            "/api/dynamic-analysis",
            post(pipeline::handle_dynamic_analysis),
        )
        .route(
            "/api/detect-job-email",
            post(detection::handle_detect_job_email),
        )
        // Boolean search
        .route("/api/boolean-search", post(boolean::handle_boolean_search))
        .route(
            "/api/boolean-search/validate",
            post(boolean::handle_validate_boolean),
        )
        // Skill context
        .route("/api/skill-context", post(skill_context::handle_skill_context))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::LlmProviders;

    fn offline_router() -> Router {
        build_router(AppState::new(Config::default(), LlmProviders::default()))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        post_raw(uri, body.to_string()).await
    }

    async fn post_raw(uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = offline_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = offline_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "Firki AI Backend");
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_description() {
        let (status, body) = post_json(
            "/api/analyze-jd",
            json!({"job_title": "Engineer", "job_description": "  "}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Job description is required");
    }

    #[tokio::test]
    async fn test_analyze_missing_description_is_validation_error() {
        let (status, body) = post_json("/api/analyze-jd", json!({"job_title": "Engineer"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Job description is required");
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let (status, body) =
            post_raw("/api/analyze-jd", r#"{"job_description": "#.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) =
            post_json("/api/dynamic-analysis", json!({"job_title": "Engineer"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Job description is required");
    }

    #[tokio::test]
    async fn test_detect_job_email_accepts_extension_body() {
        let (status, body) = post_json(
            "/api/detect-job-email",
            json!({
                "email_content": "Client need: we are looking for a developer. \
                    Bill rate is $70/hr. Python and Docker.",
                "subject": "",
                "sender": "recruiter@staffing.com"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["is_job_email"], true);
        assert!(body["data"]["confidence"].as_f64().unwrap() > 0.0);
        assert!(body["data"]["context"].is_object());
        assert!(body["data"]["detection_details"]["sender_indicators"]
            .as_array()
            .unwrap()
            .contains(&json!("recruiter")));
    }

    #[tokio::test]
    async fn test_detect_job_email_requires_content_or_subject() {
        let (status, body) =
            post_json("/api/detect-job-email", json!({"sender": "a@b.com"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Email content or subject is required");
    }

    #[tokio::test]
    async fn test_analyze_offline_uses_local_strategies() {
        let (status, body) = post_json(
            "/api/analyze-jd",
            json!({
                "job_title": "Backend Engineer",
                "job_description": "We are hiring a backend engineer with experience in Python, \
                    Django, PostgreSQL and Docker. Knowledge of AWS is a plus."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let skills = body["data"]["skills"].as_array().unwrap();
        assert!(!skills.is_empty());
        assert!(skills.len() <= 5);
        assert!(!body["data"]["boolean_search"].as_str().unwrap().is_empty());
        assert_eq!(body["data"]["ai_boolean_used"], false);
    }

    #[tokio::test]
    async fn test_validate_endpoint() {
        let (status, body) = post_json(
            "/api/boolean-search/validate",
            json!({"boolean_search": "\"Python\" AND \"Django\""}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_valid"], true);
        assert_eq!(body["score"], 100);
    }

    #[tokio::test]
    async fn test_dynamic_analysis_without_primary_is_configuration_error() {
        let (status, body) = post_json(
            "/api/dynamic-analysis",
            json!({"job_description": "Senior Rust engineer", "job_title": ""}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_skill_context_uses_curated_table() {
        let (status, body) =
            post_json("/api/skill-context", json!({"skills": ["Python", "AWS"]})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contexts"].as_array().unwrap().len(), 2);
        assert_eq!(body["contexts"][0]["skill"], "Python");
    }
}

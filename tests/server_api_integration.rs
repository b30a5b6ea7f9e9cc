//! Integration tests for server API endpoints
//!
//! These tests drive the full router (middleware included) in-process with
//! `tower::ServiceExt::oneshot`, without binding a socket.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::diagnostics::{DB_MODULE_MISSING, DB_WORKING, SETTING_NOT_SET};
use server::{build_router, DatabaseProbe, DatabaseSlot, ProbeError, ServerConfig, ServerState};

/// Create a router over the bundled pages with no database attached
fn create_test_app() -> Router {
    let state = ServerState::new(ServerConfig::default()).expect("Failed to create test state");
    build_router(Arc::new(state))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_reports_running() {
    let (status, body) = send(create_test_app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Docy AI Backend is running");
    assert_eq!(body["pages"], 3);
}

#[tokio::test]
async fn test_list_pages_in_definition_order() {
    let (status, body) = send(create_test_app(), get("/api/pages")).await;
    assert_eq!(status, StatusCode::OK);

    let slugs: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["getting-started", "writing-docs", "faq"]);
}

#[tokio::test]
async fn test_get_page_by_slug() {
    let (status, body) = send(create_test_app(), get("/api/pages/writing-docs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Writing Docs");
    assert_eq!(body["summary"], "Structure and style guidelines.");
}

#[tokio::test]
async fn test_get_unknown_page_is_404() {
    let (status, body) = send(create_test_app(), get("/api/pages/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Page not found: nope");
}

#[tokio::test]
async fn test_ask_matches_getting_started() {
    let (status, body) = send(
        create_test_app(),
        ask_request(r#"{"question": "getting started"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sources"], json!(["/docs/getting-started"]));
    assert!(body["answer"]
        .as_str()
        .unwrap()
        .contains("- Getting Started (/docs/getting-started)"));
}

#[tokio::test]
async fn test_ask_blank_question_prompts() {
    let (status, body) = send(create_test_app(), ask_request(r#"{"question": "   "}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Please provide a question.");
    assert_eq!(body["sources"], json!([]));
}

#[tokio::test]
async fn test_ask_without_match_falls_back() {
    let (status, body) = send(create_test_app(), ask_request(r#"{"question": "xyzxyz"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["answer"]
        .as_str()
        .unwrap()
        .starts_with("I couldn't find an exact match in the docs."));
    assert_eq!(body["sources"], json!([]));
}

#[tokio::test]
async fn test_ask_malformed_body_is_bad_request() {
    let (status, body) = send(create_test_app(), ask_request(r#"{"q": 1}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_diagnostics_without_database() {
    let (status, body) = send(create_test_app(), get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], DB_MODULE_MISSING);
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], SETTING_NOT_SET);
    assert_eq!(body["collections"], json!([]));
}

struct StaticDb;

#[async_trait]
impl DatabaseProbe for StaticDb {
    fn name(&self) -> Option<String> {
        Some("docy".into())
    }

    async fn list_collections(&self) -> Result<Vec<String>, ProbeError> {
        Ok(vec!["analytics".into(), "feedback".into()])
    }
}

#[tokio::test]
async fn test_diagnostics_with_database() {
    let state = ServerState::new(ServerConfig::default())
        .unwrap()
        .with_database(DatabaseSlot::Connected(Arc::new(StaticDb)));
    let (status, body) = send(build_router(Arc::new(state)), get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], DB_WORKING);
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["analytics", "feedback"]));
}

#[tokio::test]
async fn test_health_and_readiness() {
    let (status, body) = send(create_test_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(create_test_app(), get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"]["pages"], "ready");
    assert_eq!(body["components"]["database"], "not_configured");
}

#[tokio::test]
async fn test_metrics_without_recorder_reports_uptime() {
    let (status, body) = send(create_test_app(), get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_metrics_route_can_be_disabled() {
    let config = ServerConfig {
        metrics_enabled: false,
        ..Default::default()
    };
    let app = build_router(Arc::new(ServerState::new(config).unwrap()));
    let (status, _) = send(app, get("/metrics")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, body) = send(create_test_app(), get("/api/v1/nothing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = create_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_cors_preflight_is_allowed() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/ask")
        .header(header::ORIGIN, "https://docs.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = create_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

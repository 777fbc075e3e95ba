//! Gateway HTTP surface tests, driving the router directly.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use agentdash::config::Config;
use agentdash::routes;
use agentdash::state::AppState;

fn app() -> Router {
    let state = AppState::new(Config::default());
    Router::new().merge(routes::create_routes()).with_state(state)
}

/// Same router, but with the platform client unavailable, as after a failed
/// startup initialization.
fn app_without_platform() -> Router {
    let mut state = AppState::new(Config::default());
    state.platform = None;
    Router::new().merge(routes::create_routes()).with_state(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_chat(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn home_lists_endpoints() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Agent Dashboard API is Running");
    let endpoints: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert!(endpoints.contains(&"/api/v1/agents"));
    assert!(endpoints.contains(&"/api/v1/chat"));
}

#[tokio::test]
async fn health_check_is_ok() {
    let (status, body) = get(app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn agents_returned_in_insertion_order() {
    let (status, body) = get(app(), "/api/v1/agents").await;
    assert_eq!(status, StatusCode::OK);

    let agents = body.as_array().unwrap();
    assert_eq!(agents.len(), 3);
    assert_eq!(agents[0]["id"], "product-agent-custom");
    assert_eq!(agents[0]["type"], "Custom Agent");
    assert_eq!(agents[1]["id"], "free-agent-financial");
    assert_eq!(agents[2]["id"], "free-agent-code");
    assert_eq!(agents[2]["type"], "Vertex AI Agent");
}

#[tokio::test]
async fn tools_returned_in_insertion_order() {
    let (status, body) = get(app(), "/api/v1/tools").await;
    assert_eq!(status, StatusCode::OK);

    let tools = body.as_array().unwrap();
    assert_eq!(tools.len(), 6);
    assert_eq!(tools[0]["name"], "Vertex AI Search");
    assert_eq!(tools[0]["category"], "Vertex AI Native");
    assert_eq!(tools[5]["name"], "Oracle DB");
}

#[tokio::test]
async fn mock_agent_returns_exact_mock_string() {
    let (status, body) = post_chat(
        app(),
        json!({"agentId": "free-agent-financial", "prompt": "What is AAPL doing?"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "Selected agent 'Financial Analysis Assistant' is running in mock mode. \
         You asked: 'What is AAPL doing?'"
    );
}

#[tokio::test]
async fn custom_agent_returns_placeholder_acknowledgment() {
    let (status, body) = post_chat(
        app(),
        json!({"agentId": "product-agent-custom", "prompt": "Check stock for SKU123"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let response = body["response"].as_str().unwrap();
    assert!(response.contains("Response from your Custom Product Agent"));
    assert!(response.contains("Check stock for SKU123"));
}

#[tokio::test]
async fn empty_agent_id_is_rejected() {
    let (status, body) = post_chat(app(), json!({"agentId": "", "prompt": "hello"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing agentId or prompt");
}

#[tokio::test]
async fn empty_prompt_is_rejected() {
    let (status, body) =
        post_chat(app(), json!({"agentId": "product-agent-custom", "prompt": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing agentId or prompt");
}

#[tokio::test]
async fn unknown_agent_falls_back_to_mock_mode() {
    let (status, body) = post_chat(
        app(),
        json!({"agentId": "no-such-agent", "prompt": "still answered"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let response = body["response"].as_str().unwrap();
    assert!(response.contains("'still answered'"));
    assert!(response.contains("no-such-agent"));
    assert!(response.contains("mock mode"));
}

#[tokio::test]
async fn history_is_accepted_and_ignored_on_mock_path() {
    let (status, body) = post_chat(
        app(),
        json!({
            "agentId": "free-agent-code",
            "prompt": "next step?",
            "history": [
                {"role": "user", "text": "earlier question"},
                {"role": "assistant", "text": "earlier answer"}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let response = body["response"].as_str().unwrap();
    assert!(response.contains("'next step?'"));
    assert!(!response.contains("earlier question"));
}

#[tokio::test]
async fn custom_agent_without_platform_is_upstream_error() {
    let (status, body) = post_chat(
        app_without_platform(),
        json!({"agentId": "product-agent-custom", "prompt": "Check stock"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Vertex AI Agent Error:"));
    assert!(error.contains("Check ADC and agent configuration."));
}

#[tokio::test]
async fn mock_agent_without_platform_still_answers() {
    let (status, body) = post_chat(
        app_without_platform(),
        json!({"agentId": "free-agent-financial", "prompt": "hello"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].as_str().unwrap().contains("mock mode"));
}

use axum::http::StatusCode;
use axum_test::TestServer;
use mood_canvas::{
    app,
    config::provider::ProviderConfig,
    services::{gemini::PicaGeminiClient, mock::MockProvider},
    AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn setup_test_server(provider: MockProvider) -> TestServer {
    let state = AppState::new(Arc::new(provider), &ProviderConfig::default());
    TestServer::new(app(state)).unwrap()
}

#[tokio::test]
async fn test_generate_reflection_returns_first_text() {
    let provider = MockProvider::new().with_body(json!({
        "candidates": [
            { "content": { "parts": [{ "text": "Breathe. Today is yours." }] } },
            { "content": { "parts": [{ "text": "second candidate" }] } }
        ]
    }));
    let server = setup_test_server(provider.clone());

    let response = server
        .post("/generate-mood-reflection")
        .json(&json!({ "mood": "stressed" }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body, json!({ "reflection": "Breathe. Today is yours." }));

    let (model, request) = provider.last_call().unwrap();
    assert_eq!(model, "gemini-1.5-flash");
    assert_eq!(
        request.prompt(),
        Some("Generate a short, uplifting journal entry or affirmation for someone feeling stressed.")
    );
}

#[tokio::test]
async fn test_generate_reflection_empty_mood_fails() {
    let provider = MockProvider::new();
    let server = setup_test_server(provider.clone());

    let response = server
        .post("/generate-mood-reflection")
        .json(&json!({ "mood": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["reflection"], "");
    assert!(body["error"].as_str().unwrap().contains("Mood is required"));
    assert_eq!(provider.get_call_count(), 0);
}

#[tokio::test]
async fn test_generate_reflection_no_candidates_fails() {
    let provider = MockProvider::new().with_body(json!({ "candidates": [] }));
    let server = setup_test_server(provider);

    let response = server
        .post("/generate-mood-reflection")
        .json(&json!({ "mood": "calm" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "No reflection generated", "reflection": "" }));
}

#[tokio::test]
async fn test_generate_reflection_missing_candidates_fails() {
    let provider = MockProvider::new().with_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
    let server = setup_test_server(provider);

    let response = server
        .post("/generate-mood-reflection")
        .json(&json!({ "mood": "calm" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "No reflection generated");
}

#[tokio::test]
async fn test_generate_reflection_upstream_error_is_bad_request() {
    let provider = MockProvider::new().with_status(503, "overloaded");
    let server = setup_test_server(provider);

    let response = server
        .post("/generate-mood-reflection")
        .json(&json!({ "mood": "calm" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["reflection"], "");
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("503"));
    assert!(error.contains("overloaded"));
}

#[tokio::test]
async fn test_generate_reflection_empty_mood_makes_no_upstream_call() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .expect(0)
        .mount(&upstream)
        .await;

    let config = ProviderConfig::default().with_base_url(upstream.uri());
    let state = AppState::new(Arc::new(PicaGeminiClient::new(config.clone())), &config);
    let server = TestServer::new(app(state)).unwrap();

    server
        .post("/generate-mood-reflection")
        .json(&json!({ "mood": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use mood_canvas::{app, config::provider::ProviderConfig, services::mock::MockProvider, AppState};
use serde_json::json;
use std::sync::Arc;

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

fn setup_test_server(provider: MockProvider) -> TestServer {
    let state = AppState::new(Arc::new(provider), &ProviderConfig::default());
    TestServer::new(app(state)).unwrap()
}

fn header_str<'a>(response: &'a axum_test::TestResponse, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_options_answers_both_relays() {
    let provider = MockProvider::new();
    let server = setup_test_server(provider.clone());

    for path in ["/generate-mood-art", "/generate-mood-reflection"] {
        let response = server.method(Method::OPTIONS, path).await;

        response.assert_status(StatusCode::OK);
        assert_eq!(header_str(&response, "access-control-allow-origin"), Some("*"));
        assert_eq!(header_str(&response, "access-control-allow-headers"), Some(ALLOWED_HEADERS));
        assert_eq!(response.headers().get_all("access-control-allow-origin").iter().count(), 1);
        assert_eq!(response.text(), "ok");
        assert_eq!(provider.get_call_count(), 0);
    }
}

#[tokio::test]
async fn test_browser_preflight_is_allowed() {
    let provider = MockProvider::new();
    let server = setup_test_server(provider.clone());

    let response = server
        .method(Method::OPTIONS, "/generate-mood-art")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:5173"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-headers"),
            HeaderValue::from_static("content-type,x-client-info"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(header_str(&response, "access-control-allow-origin"), Some("*"));
    assert_eq!(header_str(&response, "access-control-allow-headers"), Some(ALLOWED_HEADERS));
    assert_eq!(response.text(), "ok");
    assert_eq!(provider.get_call_count(), 0);
}

#[tokio::test]
async fn test_post_responses_allow_any_origin() {
    let server = setup_test_server(MockProvider::new());

    let ok = server
        .post("/generate-mood-reflection")
        .json(&json!({ "mood": "calm" }))
        .await;
    ok.assert_status(StatusCode::OK);
    assert_eq!(header_str(&ok, "access-control-allow-origin"), Some("*"));

    let failed = server
        .post("/generate-mood-art")
        .json(&json!({ "mood": "" }))
        .await;
    failed.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(header_str(&failed, "access-control-allow-origin"), Some("*"));
    assert_eq!(failed.headers().get_all("access-control-allow-origin").iter().count(), 1);
}

#[tokio::test]
async fn test_health() {
    let server = setup_test_server(MockProvider::new());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "status": "ok" }));
}

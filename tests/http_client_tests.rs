//! Integration tests for the request executor.
//!
//! These tests verify URL construction, header merging, error
//! normalization, and transport failure handling against a mock server.

use nitrous_api::clients::{HttpClient, HttpMethod, HttpRequest};
use nitrous_api::{BaseUrl, BearerToken, HttpError, NitrousConfig};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client whose base URL is `<mock server>/api`.
fn create_client(server: &MockServer) -> HttpClient {
    let config = NitrousConfig::builder()
        .base_url(BaseUrl::new(format!("{}/api", server.uri())).unwrap())
        .build();
    HttpClient::new(&config)
}

fn get(path: &str) -> HttpRequest {
    HttpRequest::builder(HttpMethod::Get, path).build().unwrap()
}

// ============================================================================
// Base URL and Headers
// ============================================================================

#[test]
fn test_default_config_targets_localhost_api() {
    let config = NitrousConfig::from_lookup(|_| None).unwrap();
    let client = HttpClient::new(&config);
    assert_eq!(
        client.url_for("/events/live"),
        "http://localhost:8080/api/events/live"
    );
}

#[test]
fn test_override_config_targets_override_url() {
    let config = NitrousConfig::from_lookup(|_| Some("https://api.example.com".to_string())).unwrap();
    let client = HttpClient::new(&config);
    assert_eq!(client.url_for("/merch"), "https://api.example.com/merch");
}

#[tokio::test]
async fn test_requests_are_sent_under_base_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"categories": [], "count": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let response = client.request(get("/categories")).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_json_content_type_is_sent_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    client.request(get("/events")).await.unwrap();
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(header("Content-Type", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "/events")
        .header("Content-Type", "text/plain")
        .build()
        .unwrap();
    client.request(request).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    let content_types: Vec<_> = received[0].headers.get_all("content-type").iter().collect();
    assert_eq!(content_types.len(), 1);
}

#[tokio::test]
async fn test_post_sends_json_body_and_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(header("Authorization", "Bearer admin-token"))
        .and(body_json(json!({"title": "Crop Duster Air Racing"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let token = BearerToken::new("admin-token").unwrap();
    let request = HttpRequest::builder(HttpMethod::Post, "/events")
        .body(json!({"title": "Crop Duster Air Racing"}))
        .bearer(&token)
        .build()
        .unwrap();

    let body: Value = client.request_json(request).await.unwrap();
    assert_eq!(body, json!({"ok": true}));
}

// ============================================================================
// Error Normalization
// ============================================================================

#[tokio::test]
async fn test_error_field_becomes_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Event not found"})))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.request(get("/events/404")).await.unwrap_err();

    match &err {
        HttpError::Status(e) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.message, "Event not found");
        }
        other => panic!("Expected Status error, got: {other:?}"),
    }
    assert_eq!(err.to_string(), "Event not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_empty_error_body_uses_fallback_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/merch"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.request(get("/merch")).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "API request failed");
}

#[tokio::test]
async fn test_malformed_error_body_uses_fallback_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/journeys"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Internal Server Error</h1>"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.request(get("/journeys")).await.unwrap_err();
    assert_eq!(err.to_string(), "API request failed");
}

#[tokio::test]
async fn test_request_id_is_kept_as_error_reference() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/merch/9"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-42")
                .set_body_json(json!({"error": "Merch item not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    match client.request(get("/merch/9")).await {
        Err(HttpError::Status(e)) => assert_eq!(e.error_reference.as_deref(), Some("req-42")),
        other => panic!("Expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": "))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.request_json::<Value>(get("/auth/me")).await.unwrap_err();

    match err {
        HttpError::Decode(e) => assert_eq!(e.endpoint, "/auth/me"),
        other => panic!("Expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "down"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    assert!(client.request(get("/events")).await.is_err());
}

// ============================================================================
// Transport Failures
// ============================================================================

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let uri = {
        let mock_server = MockServer::builder().start().await;
        mock_server.uri()
    };

    let config = NitrousConfig::builder()
        .base_url(BaseUrl::new(uri).unwrap())
        .build();
    let client = HttpClient::new(&config);

    let err = client.request(get("/events")).await.unwrap_err();
    assert!(matches!(err, HttpError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let mock_server = MockServer::start().await;
    let client = create_client(&mock_server);

    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "/events".to_string(),
        body: Some(json!({"unexpected": true})),
        query: None,
        extra_headers: None,
    };

    let err = client.request(request).await.unwrap_err();
    assert!(matches!(err, HttpError::InvalidRequest(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

//! Integration tests for the landing page fan-out.

use nitrous_api::{BaseUrl, HttpClient, NitrousConfig, Showcase};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> HttpClient {
    let config = NitrousConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();
    HttpClient::new(&config)
}

#[tokio::test]
async fn test_showcase_fetches_all_sections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{
                "id": "1",
                "title": "Daytona 500",
                "location": "Daytona, FL",
                "date": "Feb 16, 2026",
                "isLive": true,
                "category": "motorsport"
            }],
            "count": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [{
                "id": "1",
                "name": "Motorsport",
                "slug": "motorsport",
                "icon": "🏎",
                "liveCount": 1,
                "description": "Racing on four wheels",
                "color": "cyan"
            }],
            "count": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"journeys": [], "count": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/merch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "count": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let showcase = Showcase::fetch(&client).await;

    assert_eq!(showcase.events.len(), 1);
    assert_eq!(showcase.categories.len(), 1);
    assert!(showcase.journeys.is_empty());
    assert!(showcase.merch.is_empty());
    assert_eq!(showcase.live_events().count(), 1);
}

#[tokio::test]
async fn test_showcase_failed_section_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "down"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/merch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "m-1", "name": "Team Cap", "icon": "🧢", "price": 29.99, "category": "accessories"}],
            "count": 1
        })))
        .mount(&mock_server)
        .await;

    // Categories and journeys are not mounted and come back 404.
    let client = create_client(&mock_server);
    let showcase = Showcase::fetch(&client).await;

    assert!(showcase.events.is_empty());
    assert!(showcase.categories.is_empty());
    assert!(showcase.journeys.is_empty());
    assert_eq!(showcase.merch.len(), 1);
    assert!(!showcase.is_empty());
}

//! Integration tests for the API client
//!
//! These tests use wiremock to stand up a mock NexEvent API and exercise the
//! full request/response cycle and the error taxonomy.

use event_client::http::{ApiClient, ApiClientConfig, ApiRequest, ApiResponse};
use event_client::{ApiError, EventId, NexEventApi};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> NexEventApi {
    NexEventApi::new(ApiClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Successful Request Tests
// =============================================================================

#[tokio::test]
async fn test_login_posts_credentials_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"email": "alice@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "acc",
            "refresh": "ref",
            "user": {"username": "alice"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = api_for(&mock_server).login("alice@example.com", "pw").await.unwrap();

    assert_eq!(response.access, "acc");
    assert_eq!(response.refresh, "ref");
    assert_eq!(response.user.display_name(), Some("alice"));
}

#[tokio::test]
async fn test_register_returns_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .and(body_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "pw"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9, "ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = api_for(&mock_server)
        .register("alice", "alice@example.com", "pw")
        .await
        .unwrap();

    assert_eq!(body, json!({"id": 9, "ok": true}));
}

#[tokio::test]
async fn test_list_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "One", "date_time": "2025-01-01T00:00:00Z"},
            {"id": 2, "title": "Two", "date_time": "2025-01-02T00:00:00Z"}
        ])))
        .mount(&mock_server)
        .await;

    let events = api_for(&mock_server).list_events().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, EventId::from(1));
    assert_eq!(events[1].title, "Two");
}

#[tokio::test]
async fn test_get_event_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "title": "Seven",
            "description": "A\\nB"
        })))
        .mount(&mock_server)
        .await;

    let event = api_for(&mock_server).get_event(&EventId::from(7)).await.unwrap();

    assert_eq!(event.title, "Seven");
    assert_eq!(event.description, "A\\nB");
}

#[tokio::test]
async fn test_get_event_id_with_separators_stays_under_events() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "wrong endpoint"})))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    for raw in ["../auth/login", "1/comments", "1?x=y"] {
        let error = api.get_event(&EventId::new(raw)).await.unwrap_err();
        assert_eq!(error.status(), Some(404), "{}", raw);
    }

    let paths: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect();
    assert_eq!(
        paths,
        ["/events/..%2Fauth%2Flogin/", "/events/1%2Fcomments/", "/events/1%3Fx%3Dy/"]
    );
}

#[tokio::test]
async fn test_get_event_dot_id_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let error = api_for(&mock_server).get_event(&EventId::new("..")).await.unwrap_err();
    assert!(matches!(error, ApiError::InvalidEventId(_)));
}

#[tokio::test]
async fn test_response_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "abc")
                .set_body_json(json!([])),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(ApiClientConfig::new(mock_server.uri())).unwrap();
    let response: ApiResponse<serde_json::Value> =
        client.send(ApiRequest::get("/events/")).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("x-request-id"), Some(&"abc".to_string()));
}

#[tokio::test]
async fn test_empty_response_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let body = api_for(&mock_server).register("a", "b", "c").await.unwrap();
    assert_eq!(body, serde_json::Value::Null);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_401_is_http_error_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let error = api_for(&mock_server).login("a@b.c", "bad").await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert!(!error.is_network_error());
    match error {
        ApiError::Http { body, .. } => assert!(body.contains("Invalid credentials")),
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_500_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let error = api_for(&mock_server).list_events().await.unwrap_err();
    assert_eq!(error.status(), Some(503));
}

#[tokio::test]
async fn test_malformed_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let error = api_for(&mock_server).list_events().await.unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop a listener so the port is known to be closed
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let api = NexEventApi::new(ApiClientConfig::new(uri)).unwrap();
    let error = api.list_events().await.unwrap_err();

    assert!(error.is_network_error());
    assert_eq!(error.status(), None);
}

//! Integration tests for the request dispatcher
//!
//! These run the dispatcher against a local mock backend and verify the
//! tagged-result contract for success, non-2xx statuses, and transport
//! failure.

use gateway::errors::HttpError;
use gateway::http::{HttpDispatcher, Scheme};
use reqwest::header::{HeaderMap, HeaderValue};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dispatcher() -> HttpDispatcher {
    // The mock server speaks plaintext; the cache and request paths are
    // identical to the TLS configuration.
    HttpDispatcher::with_scheme(Scheme::Http)
}

fn endpoint(server: &MockServer) -> (String, u16) {
    let address = server.address();
    (address.ip().to_string(), address.port())
}

#[tokio::test]
async fn test_get_returns_body_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/license/check"))
        .respond_with(ResponseTemplate::new(200).set_body_string("license-ok"))
        .mount(&server)
        .await;

    let (host, port) = endpoint(&server);
    let response = dispatcher()
        .get(&host, port, "/license/check")
        .await
        .expect("GET should succeed");

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "license-ok");
}

#[tokio::test]
async fn test_get_passes_non_success_status_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let (host, port) = endpoint(&server);
    let response = dispatcher()
        .get(&host, port, "/missing")
        .await
        .expect("A 404 is still a transport success");

    assert_eq!(response.status, 404);
    assert_eq!(response.body, "not here");
}

#[tokio::test]
async fn test_get_against_unreachable_endpoint_is_an_error() {
    // Grab a free port and release it so the connect is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let result = dispatcher().get("127.0.0.1", port, "/anything").await;

    match result {
        Err(HttpError::ConnectionFailed { host, .. }) => assert_eq!(host, "127.0.0.1"),
        other => panic!("Expected ConnectionFailed, got {:?}", other.map(|r| r.status)),
    }
}

#[tokio::test]
async fn test_post_echoes_status_and_body_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_string("user=alice&pass=hunter2"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("x-api-key", "sekrit"))
        .respond_with(ResponseTemplate::new(201).set_body_string("token-granted"))
        .mount(&server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_static("sekrit"));

    let (host, port) = endpoint(&server);
    let response = dispatcher()
        .post(
            &host,
            port,
            "/auth/token",
            "user=alice&pass=hunter2".to_string(),
            "application/x-www-form-urlencoded",
            headers,
        )
        .await
        .expect("POST should succeed");

    assert_eq!(response.status, 201);
    assert_eq!(response.body, "token-granted");
}

#[tokio::test]
async fn test_repeated_calls_reuse_the_cached_connection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .expect(3)
        .mount(&server)
        .await;

    let (host, port) = endpoint(&server);
    let mut dispatcher = dispatcher();

    for _ in 0..3 {
        let response = dispatcher.get(&host, port, "/ping").await.unwrap();
        assert_eq!(response.body, "pong");
    }
}

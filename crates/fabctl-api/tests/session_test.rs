#![allow(clippy::unwrap_used)]
// Session and URL-builder tests using wiremock.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fabctl_api::{Error, ResourceKind, Session, SessionConfig};

fn config_with_password(password: &str) -> SessionConfig {
    let mut config = SessionConfig::new("controller.example", 18002);
    config.password = Some(SecretString::from(password.to_owned()));
    config
}

// ── Login ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_extracts_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/controller/v2/tokens"))
        .and(body_json(serde_json::json!({
            "userName": "admin",
            "password": "SomeSecretPassword",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "token_id": "cafe-token" },
            "errcode": "0",
        })))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let session = Session::login_at(base, &config_with_password("SomeSecretPassword"))
        .await
        .unwrap();

    assert_eq!(session.token(), "cafe-token");
}

#[tokio::test]
async fn test_login_rejected_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/controller/v2/tokens"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid user or password"))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let result = Session::login_at(base, &config_with_password("wrong")).await;

    match result {
        Err(Error::Authentication { url, message }) => {
            assert!(url.ends_with("/controller/v2/tokens"), "url was {url}");
            assert!(message.contains("401"), "message was {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_without_password_never_issues_http() {
    let server = MockServer::start().await;
    let base = Url::parse(&server.uri()).unwrap();

    let mut config = SessionConfig::new("controller.example", 18002);
    config.password = None;
    let result = Session::login_at(base.clone(), &config).await;
    assert!(matches!(result, Err(Error::MissingPassword)));

    // An empty password is equally a precondition failure.
    let result = Session::login_at(base, &config_with_password("")).await;
    assert!(matches!(result, Err(Error::MissingPassword)));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no HTTP call may be issued: {requests:?}");
}

#[tokio::test]
async fn test_login_connection_failure_uses_sentinel_status() {
    // Nothing listens on this port.
    let base = Url::parse("http://127.0.0.1:9").unwrap();
    let mut config = config_with_password("secret");
    config.timeout = Duration::from_secs(2);

    let result = Session::login_at(base, &config).await;

    match result {
        Err(Error::Authentication { message, .. }) => {
            assert!(message.contains("status -1"), "message was {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_response_without_token_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/controller/v2/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let result = Session::login_at(base, &config_with_password("secret")).await;

    assert!(matches!(result, Err(Error::Deserialization { .. })));
}

// ── URL construction ────────────────────────────────────────────────

fn offline_session() -> Session {
    let base = Url::parse("https://controller.example:18002").unwrap();
    Session::with_token(reqwest::Client::new(), base, "test-token")
}

#[test]
fn test_collection_url_follows_registry() {
    let session = offline_session();

    assert_eq!(
        session.collection_url(ResourceKind::Switch).as_str(),
        "https://controller.example:18002/controller/dc/v3/logicnetwork/switchs"
    );
    assert_eq!(
        session.collection_url(ResourceKind::Fabric).as_str(),
        "https://controller.example:18002/controller/dc/v3/physicalnetwork/fabricresource/fabrics"
    );
}

#[test]
fn test_object_url_appends_identifier() {
    let session = offline_session();

    let url = session.object_url(ResourceKind::Tenant, "t-123").unwrap();
    assert_eq!(
        url.as_str(),
        "https://controller.example:18002/controller/dc/v3/tenants/tenant/t-123"
    );
}

#[test]
fn test_object_url_without_identifier_fails_before_any_network_call() {
    let session = offline_session();

    let result = session.object_url(ResourceKind::Switch, "");
    assert!(matches!(
        result,
        Err(Error::MissingIdentifier {
            kind: ResourceKind::Switch
        })
    ));
}

#[test]
fn test_object_url_for_query_only_kind_fails() {
    let session = offline_session();

    let result = session.object_url(ResourceKind::Fabric, "f-1");
    assert!(matches!(
        result,
        Err(Error::NoObjectPath {
            kind: ResourceKind::Fabric
        })
    ));
}

#[test]
fn test_request_url_passthrough_and_relative() {
    let session = offline_session();

    let absolute = session.request_url("https://other.example/v2/thing").unwrap();
    assert_eq!(absolute.as_str(), "https://other.example/v2/thing");

    let relative = session.request_url("/controller/dc/v3/custom").unwrap();
    assert_eq!(
        relative.as_str(),
        "https://controller.example:18002/controller/dc/v3/custom"
    );
}

#[test]
fn test_request_url_without_leading_slash_is_an_error() {
    let session = offline_session();

    // Concatenating "custom/endpoint" onto the root corrupts the port;
    // that must surface as an error, not a panic.
    let result = session.request_url("custom/endpoint");
    assert!(matches!(result, Err(Error::InvalidUrl(_))), "got: {result:?}");
}

#[test]
fn test_session_debug_never_shows_the_token() {
    let session = offline_session();

    let rendered = format!("{session:?}");
    assert!(rendered.contains("controller.example"), "debug was {rendered}");
    assert!(!rendered.contains("test-token"), "debug was {rendered}");
}

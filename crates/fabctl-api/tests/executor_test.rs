#![allow(clippy::unwrap_used)]
// CRUD executor tests using wiremock.

use reqwest::Method;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fabctl_api::{Error, OperateBody, ResourceKind, Session};

async fn setup() -> (MockServer, Session) {
    let server = MockServer::start().await;
    let base = Url::parse(&server.uri()).unwrap();
    let session = Session::with_token(reqwest::Client::new(), base, "test-token");
    (server, session)
}

const SWITCHS_PATH: &str = "/controller/dc/v3/logicnetwork/switchs";

// ── Mutating verbs ──────────────────────────────────────────────────

#[tokio::test]
async fn test_create_success() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path(SWITCHS_PATH))
        .and(header("X-ACCESS-TOKEN", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let url = session.collection_url(ResourceKind::Switch);
    let body = json!({"switch": [{"id": "s-1", "name": "switch1"}]});
    let outcome = session.create(url, &body).await.unwrap();

    assert_eq!(outcome.method, "POST");
    assert_eq!(outcome.status, 200);
    assert!(outcome.changed);
    assert_eq!(outcome.message, "Create success");
    // Only `operate` echoes the submitted body back.
    assert_eq!(outcome.body, None);
}

#[tokio::test]
async fn test_create_failure_embeds_attempted_body() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path(SWITCHS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("duplicate name"))
        .mount(&server)
        .await;

    let url = session.collection_url(ResourceKind::Switch);
    let body = json!({"switch": [{"name": "switch1"}]});
    let result = session.create(url, &body).await;

    match result {
        Err(Error::Execution {
            method,
            status,
            message,
            body: Some(submitted),
            ..
        }) => {
            assert_eq!(method, "POST");
            assert_eq!(status, 400);
            assert!(message.contains("duplicate name"), "message was {message}");
            assert!(submitted.contains("switch1"), "body was {submitted}");
        }
        other => panic!("expected Execution error with body, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_success() {
    let (server, session) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/controller/dc/v3/tenants/tenant/t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let url = session.object_url(ResourceKind::Tenant, "t-1").unwrap();
    let body = json!({"tenant": [{"id": "t-1", "name": "prod"}]});
    let outcome = session.update(url, &body).await.unwrap();

    assert_eq!(outcome.message, "Update success");
    assert_eq!(outcome.method, "PUT");
}

#[tokio::test]
async fn test_delete_success_on_204() {
    let (server, session) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/controller/dc/v3/logicnetwork/switchs/switch/s-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let url = session.object_url(ResourceKind::Switch, "s-1").unwrap();
    let outcome = session.delete(url).await.unwrap();

    assert_eq!(outcome.status, 204);
    assert!(outcome.changed);
    assert_eq!(outcome.message, "Delete success");
}

#[tokio::test]
async fn test_delete_failure_carries_no_body() {
    let (server, session) = setup().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such object"))
        .mount(&server)
        .await;

    let url = session.object_url(ResourceKind::Switch, "s-missing").unwrap();
    let result = session.delete(url).await;

    match result {
        Err(Error::Execution { body: None, status, .. }) => assert_eq!(status, 404),
        other => panic!("expected bodyless Execution error, got: {other:?}"),
    }
}

// ── Query ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_query_without_condition_returns_all_in_server_order() {
    let (server, session) = setup().await;

    Mock::given(method("GET"))
        .and(path(SWITCHS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "switch": [
                {"id": "s-3", "name": "edge"},
                {"id": "s-1", "name": "core"},
                {"id": "s-2", "name": "agg"},
            ]
        })))
        .mount(&server)
        .await;

    let records = session.query(ResourceKind::Switch, None).await.unwrap();

    let ids: Vec<&str> = records.iter().filter_map(|r| r["id"].as_str()).collect();
    assert_eq!(ids, ["s-3", "s-1", "s-2"]);
}

#[tokio::test]
async fn test_query_missing_or_null_key_yields_empty_list() {
    let (server, session) = setup().await;

    Mock::given(method("GET"))
        .and(path(SWITCHS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"switch": null})))
        .mount(&server)
        .await;

    let records = session.query(ResourceKind::Switch, None).await.unwrap();
    assert!(records.is_empty());

    server.reset().await;
    Mock::given(method("GET"))
        .and(path(SWITCHS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let records = session.query(ResourceKind::Switch, None).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_query_failure_is_execution_error() {
    let (server, session) = setup().await;

    Mock::given(method("GET"))
        .and(path(SWITCHS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let result = session.query(ResourceKind::Switch, None).await;

    match result {
        Err(Error::Execution { method, status, .. }) => {
            assert_eq!(method, "GET");
            assert_eq!(status, 500);
        }
        other => panic!("expected Execution error, got: {other:?}"),
    }
}

// ── Generic operate ─────────────────────────────────────────────────

#[tokio::test]
async fn test_operate_relative_path_with_raw_body() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path("/controller/dc/v3/custom/endpoint"))
        .and(header("X-ACCESS-TOKEN", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"done":true}"#))
        .mount(&server)
        .await;

    let outcome = session
        .operate(
            "/controller/dc/v3/custom/endpoint",
            Method::POST,
            Some(OperateBody::Raw(r#"{"key":"value"}"#.to_owned())),
        )
        .await
        .unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.response, r#"{"done":true}"#);
    assert_eq!(outcome.body.as_deref(), Some(r#"{"key":"value"}"#));
}

#[tokio::test]
async fn test_operate_structured_body_failure_reports_it() {
    let (server, session) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/controller/dc/v3/custom/endpoint"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let result = session
        .operate(
            "/controller/dc/v3/custom/endpoint",
            Method::PUT,
            Some(OperateBody::Json(json!({"key": "value"}))),
        )
        .await;

    match result {
        Err(Error::Execution {
            status,
            message,
            body: Some(submitted),
            ..
        }) => {
            assert_eq!(status, 403);
            assert!(message.contains("forbidden"));
            assert_eq!(submitted, r#"{"key":"value"}"#);
        }
        other => panic!("expected Execution error, got: {other:?}"),
    }
}

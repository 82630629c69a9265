//! HTTP surface tests, run against the router without binding a socket.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use timerboard::api::{build_router, ApiState};
use timerboard::store::{BoardStore, MemoryStore, StoreError};
use tower::ServiceExt;

fn app(store: MemoryStore) -> Router {
    build_router(Arc::new(ApiState::new(Arc::new(store))))
}

fn request(method: Method, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap()
}

fn post_json(uri: &str, value: Value) -> Request<Body> {
    request(Method::POST, uri, Body::from(value.to_string()))
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_cors(response: &Response, origin: &str) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], origin);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET,POST,OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn get_unknown_board_is_empty() {
    let response = app(MemoryStore::new())
        .oneshot(request(Method::GET, "/api/boards/fresh/timers", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response, "*");
    assert_eq!(
        body_json(response).await,
        json!({ "boardId": "fresh", "timers": [] })
    );
}

#[tokio::test]
async fn preflight_echoes_origin() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/boards/kitchen/timers")
        .header(header::ORIGIN, "https://timers.example")
        .body(Body::empty())
        .unwrap();

    let response = app(MemoryStore::new()).oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_cors(&response, "https://timers.example");
}

#[tokio::test]
async fn post_create_persists_board() {
    let store = MemoryStore::new();
    let app = app(store.clone());

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/boards/kitchen/timers",
            json!({ "action": "create", "payload": { "label": "Tea", "durationMs": 5000 } }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response, "*");
    let board = body_json(response).await;
    assert_eq!(board["boardId"], "kitchen");
    assert_eq!(board["timers"][0]["label"], "Tea");
    assert_eq!(board["timers"][0]["state"], "idle");
    assert!(board["timers"][0]["startedAt"].is_null());

    assert!(store.get("board:kitchen").await.unwrap().is_some());

    let response = app
        .oneshot(request(Method::GET, "/api/boards/kitchen/timers", Body::empty()))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, board);
}

#[tokio::test]
async fn post_start_then_reset_round_trip() {
    let app = app(MemoryStore::new());
    let uri = "/api/boards/desk/timers";

    let created = body_json(
        app.clone()
            .oneshot(post_json(uri, json!({ "action": "create", "payload": { "durationMs": 60000 } })))
            .await
            .unwrap(),
    )
    .await;
    let id = created["timers"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(created["timers"][0]["label"], "Timer");

    let started = body_json(
        app.clone()
            .oneshot(post_json(
                uri,
                json!({ "action": "command", "payload": { "id": id, "command": "start" } }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(started["timers"][0]["state"], "running");
    assert!(started["timers"][0]["startedAt"].is_string());

    let reset = body_json(
        app.oneshot(post_json(
            uri,
            json!({ "action": "command", "payload": { "id": id, "command": "reset" } }),
        ))
        .await
        .unwrap(),
    )
    .await;
    assert_eq!(reset["timers"][0]["state"], "idle");
    assert_eq!(reset["timers"][0]["elapsedMs"], 0);
    assert!(reset["timers"][0]["startedAt"].is_null());
}

#[tokio::test]
async fn unknown_action_returns_board_unchanged() {
    let app = app(MemoryStore::new());

    let response = app
        .oneshot(post_json(
            "/api/boards/kitchen/timers",
            json!({ "action": "teleport", "payload": {} }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "boardId": "kitchen", "timers": [] })
    );
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let store = MemoryStore::new();

    for body in ["{\"action\": ", "", "not json"] {
        let response = app(store.clone())
            .oneshot(request(
                Method::POST,
                "/api/boards/kitchen/timers",
                Body::from(body),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors(&response, "*");
        assert!(body_json(response).await["error"].is_string());
    }

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let methods = [
        Method::HEAD,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::TRACE,
        Method::CONNECT,
        Method::from_bytes(b"PURGE").unwrap(),
    ];

    for method in methods {
        let response = app(MemoryStore::new())
            .oneshot(request(method.clone(), "/api/boards/kitchen/timers", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_cors(&response, "*");
    }
}

#[tokio::test]
async fn other_paths_are_not_found() {
    for uri in ["/", "/api/boards/kitchen", "/api/boards/kitchen/timers/extra", "/health"] {
        let response = app(MemoryStore::new())
            .oneshot(request(Method::GET, uri, Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_cors(&response, "*");
    }
}

#[tokio::test]
async fn empty_board_id_is_not_found() {
    let store = MemoryStore::new();
    let uri = "/api/boards//timers";

    let requests = [
        request(Method::GET, uri, Body::empty()),
        post_json(uri, json!({})),
        post_json(uri, json!({ "action": "create" })),
        request(Method::OPTIONS, uri, Body::empty()),
    ];

    for req in requests {
        let method = req.method().clone();
        let response = app(store.clone()).oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
        assert_cors(&response, "*");
    }

    assert!(store.is_empty().await);
}

struct UnavailableStore;

#[async_trait]
impl BoardStore for UnavailableStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Task("store offline".to_string()))
    }

    async fn put(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Task("store offline".to_string()))
    }
}

#[tokio::test]
async fn store_failure_is_server_error() {
    let app = build_router(Arc::new(ApiState::new(Arc::new(UnavailableStore))));

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/boards/kitchen/timers", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response, "*");

    let response = app
        .oneshot(post_json(
            "/api/boards/kitchen/timers",
            json!({ "action": "create" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

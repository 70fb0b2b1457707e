//! HTTP Client Integration Tests
//!
//! Runs `ItemsClient` against an in-process axum server that records
//! every request it receives.

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use items_client::{ClientConfig, Item, ItemError, ItemsBackend, ItemsClient, NewItem, Operation};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    content_type: Option<String>,
    body: Option<Value>,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, method: Method, path: String, headers: &HeaderMap, body: &Bytes) -> Response {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = serde_json::from_slice(body).ok();
        self.requests.lock().unwrap().push(Recorded {
            method,
            path,
            content_type,
            body,
        });
        (self.status, self.body.clone()).into_response()
    }
}

async fn item_handler(
    State(stub): State<Stub>,
    method: Method,
    Path(id): Path<u32>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    stub.record(method, format!("/items/{}", id), &headers, &body)
}

async fn collection_handler(
    State(stub): State<Stub>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    stub.record(method, "/items".to_string(), &headers, &body)
}

async fn serve(stub: Stub) -> ItemsClient {
    let app = Router::new()
        .route("/items", get(collection_handler).post(collection_handler))
        .route("/items/:id", patch(item_handler).delete(item_handler))
        .with_state(stub);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let config = ClientConfig::new(&format!("http://{}", addr)).unwrap();
    ItemsClient::new(config)
}

/// Client pointed at a port nothing listens on
async fn unreachable_client() -> ItemsClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ItemsClient::new(ClientConfig::new(&format!("http://{}", addr)).unwrap())
}

const APPLE: &str = r#"{"id":5,"name":"Apple","category":"produce","isInCart":true}"#;

#[tokio::test]
async fn patch_sends_negated_flag_as_json() {
    let stub = Stub::new(StatusCode::OK, APPLE);
    let client = serve(stub.clone()).await;

    client.set_in_cart(5, true).await.expect("patch failed");
    client.set_in_cart(5, false).await.expect("patch failed");

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::PATCH);
    assert_eq!(requests[0].path, "/items/5");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(requests[0].body, Some(json!({ "isInCart": true })));
    assert_eq!(requests[1].body, Some(json!({ "isInCart": false })));
}

#[tokio::test]
async fn patch_returns_server_item() {
    let stub = Stub::new(StatusCode::OK, APPLE);
    let client = serve(stub).await;

    let updated = client.set_in_cart(5, true).await.expect("patch failed");
    assert_eq!(
        updated,
        Item {
            id: 5,
            name: "Apple".to_string(),
            category: "produce".to_string(),
            is_in_cart: true,
        }
    );
}

#[tokio::test]
async fn patch_not_found_is_rejected() {
    let stub = Stub::new(StatusCode::NOT_FOUND, "not json at all");
    let client = serve(stub).await;

    let err = client.set_in_cart(5, true).await.unwrap_err();
    assert_eq!(
        err,
        ItemError::Rejected {
            operation: Operation::Toggle,
            status: 404
        }
    );
}

#[tokio::test]
async fn patch_with_malformed_body_is_transport_failure() {
    let stub = Stub::new(StatusCode::OK, "{\"id\":");
    let client = serve(stub).await;

    let err = client.set_in_cart(5, true).await.unwrap_err();
    assert!(matches!(
        err,
        ItemError::Transport {
            operation: Operation::Toggle,
            ..
        }
    ));
}

#[tokio::test]
async fn delete_targets_item_path() {
    let stub = Stub::new(StatusCode::OK, "{}");
    let client = serve(stub.clone()).await;

    client.delete_item(7).await.expect("delete failed");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, "/items/7");
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let stub = Stub::new(StatusCode::OK, "");
    let client = serve(stub).await;

    assert!(client.delete_item(7).await.is_ok());
}

#[tokio::test]
async fn delete_with_invalid_json_body_fails() {
    let stub = Stub::new(StatusCode::OK, "<html>");
    let client = serve(stub).await;

    let err = client.delete_item(7).await.unwrap_err();
    assert_eq!(err.operation(), Operation::Delete);
    assert!(matches!(err, ItemError::Transport { .. }));
}

#[tokio::test]
async fn delete_server_error_is_rejected() {
    let stub = Stub::new(StatusCode::INTERNAL_SERVER_ERROR, "");
    let client = serve(stub).await;

    let err = client.delete_item(7).await.unwrap_err();
    assert_eq!(
        err,
        ItemError::Rejected {
            operation: Operation::Delete,
            status: 500
        }
    );
}

#[tokio::test]
async fn connection_refused_is_transport_failure() {
    let client = unreachable_client().await;

    let toggle = client.set_in_cart(1, true).await.unwrap_err();
    assert!(matches!(
        toggle,
        ItemError::Transport {
            operation: Operation::Toggle,
            ..
        }
    ));

    let delete = client.delete_item(1).await.unwrap_err();
    assert!(matches!(
        delete,
        ItemError::Transport {
            operation: Operation::Delete,
            ..
        }
    ));
}

#[tokio::test]
async fn list_and_create_use_collection_path() {
    let list_stub = Stub::new(StatusCode::OK, format!("[{}]", APPLE));
    let client = serve(list_stub.clone()).await;
    let items = client.list_items().await.expect("list failed");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Apple");
    assert_eq!(list_stub.requests()[0].method, Method::GET);

    let create_stub = Stub::new(
        StatusCode::CREATED,
        r#"{"id":9,"name":"Cheese","category":"Dairy","isInCart":false}"#,
    );
    let client = serve(create_stub.clone()).await;
    let created = client
        .create_item(&NewItem::new("Cheese", "Dairy"))
        .await
        .expect("create failed");
    assert_eq!(created.id, 9);

    let requests = create_stub.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/items");
    assert_eq!(
        requests[0].body,
        Some(json!({ "name": "Cheese", "category": "Dairy", "isInCart": false }))
    );
}

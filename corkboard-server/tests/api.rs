//! End-to-end tests driving the router the way an HTTP client would

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use corkboard_server::http::build_router;
use corkboard_server::BoardStore;
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestClient {
    app: Router,
}

impl TestClient {
    fn new() -> Self {
        Self {
            app: build_router(BoardStore::new()),
        }
    }

    async fn raw(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.raw(Method::GET, uri, Body::empty()).await
    }

    async fn create_board(&self, name: &str) -> String {
        let (status, body) = self.json(Method::POST, "/boards", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_owned()
    }

    async fn add_node(&self, board_id: &str, fields: Value) -> String {
        let uri = format!("/boards/{}/nodes", board_id);
        let (status, body) = self.json(Method::POST, &uri, fields).await;
        assert_eq!(status, StatusCode::OK);
        body["nodeId"].as_str().unwrap().to_owned()
    }
}

#[tokio::test]
async fn sprint_board_scenario() {
    let client = TestClient::new();

    let (status, board) = client.json(Method::POST, "/boards", json!({ "name": "Sprint" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["name"], "Sprint");
    let board_id = board["id"].as_str().unwrap().to_owned();

    let (status, node) = client
        .json(
            Method::POST,
            &format!("/boards/{}/nodes", board_id),
            json!({ "text": "Task 1" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let node_id = node["nodeId"].as_str().unwrap().to_owned();
    assert_eq!(
        node,
        json!({ "nodeId": node_id, "text": "Task 1", "x": 50, "y": 50 })
    );

    let (status, full) = client.get(&format!("/boards/{}", board_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(full["name"], "Sprint");
    assert_eq!(full["nodes"].as_object().map(|m| m.len()), Some(1));
    assert_eq!(
        full["nodes"][&node_id],
        json!({ "text": "Task 1", "x": 50, "y": 50 })
    );

    let (status, ack) = client
        .json(
            Method::PUT,
            &format!("/boards/{}/nodes/{}", board_id, node_id),
            json!({ "x": 100 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "success": true }));

    let (_, full) = client.get(&format!("/boards/{}", board_id)).await;
    assert_eq!(
        full["nodes"][&node_id],
        json!({ "text": "Task 1", "x": 100, "y": 50 })
    );
}

#[tokio::test]
async fn created_board_appears_in_list() {
    let client = TestClient::new();
    let id = client.create_board("Retro").await;

    let (status, list) = client.get("/boards").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([{ "id": id, "name": "Retro" }]));
}

#[tokio::test]
async fn missing_or_empty_name_is_rejected() {
    let client = TestClient::new();

    for body in [json!({}), json!({ "name": "" }), json!({ "name": null }), json!({ "name": 42 })] {
        let (status, err) = client.json(Method::POST, "/boards", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err, json!({ "error": "Name required" }));
    }

    let (status, err) = client.raw(Method::POST, "/boards", Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err, json!({ "error": "Name required" }));

    let (_, list) = client.get("/boards").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn invalid_json_is_rejected() {
    let client = TestClient::new();
    let (status, err) = client
        .raw(Method::POST, "/boards", Body::from("{\"name\": "))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err, json!({ "error": "Invalid JSON body" }));
}

#[tokio::test]
async fn unknown_board_is_not_found_everywhere() {
    let client = TestClient::new();
    let not_found = json!({ "error": "Board not found" });

    let (status, err) = client.get("/boards/nope").await;
    assert_eq!((status, err), (StatusCode::NOT_FOUND, not_found.clone()));

    let (status, err) = client.json(Method::POST, "/boards/nope/nodes", json!({})).await;
    assert_eq!((status, err), (StatusCode::NOT_FOUND, not_found.clone()));

    let (status, err) = client
        .json(Method::PUT, "/boards/nope/nodes/nope", json!({ "x": 1 }))
        .await;
    assert_eq!((status, err), (StatusCode::NOT_FOUND, not_found.clone()));

    let (status, err) = client.raw(Method::DELETE, "/boards/nope/nodes/nope", Body::empty()).await;
    assert_eq!((status, err), (StatusCode::NOT_FOUND, not_found));
}

#[tokio::test]
async fn node_without_body_gets_defaults() {
    let client = TestClient::new();
    let board_id = client.create_board("Sprint").await;

    let (status, node) = client
        .raw(Method::POST, &format!("/boards/{}/nodes", board_id), Body::empty())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(node["text"], "New node");
    assert_eq!(node["x"], 50);
    assert_eq!(node["y"], 50);
}

#[tokio::test]
async fn wrong_typed_update_fields_are_ignored() {
    let client = TestClient::new();
    let board_id = client.create_board("Sprint").await;
    let node_id = client
        .add_node(&board_id, json!({ "text": "Task 1", "x": 10, "y": 20 }))
        .await;

    let (status, ack) = client
        .json(
            Method::PUT,
            &format!("/boards/{}/nodes/{}", board_id, node_id),
            json!({ "text": 5, "x": "not a number", "y": 7.5 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "success": true }));

    let (_, board) = client.get(&format!("/boards/{}", board_id)).await;
    assert_eq!(
        board["nodes"][&node_id],
        json!({ "text": "Task 1", "x": 10, "y": 7.5 })
    );
}

#[tokio::test]
async fn update_unknown_node_is_not_found() {
    let client = TestClient::new();
    let board_id = client.create_board("Sprint").await;

    let (status, err) = client
        .json(
            Method::PUT,
            &format!("/boards/{}/nodes/nope", board_id),
            json!({ "text": "x" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err, json!({ "error": "Node not found" }));
}

#[tokio::test]
async fn delete_then_delete_again() {
    let client = TestClient::new();
    let board_id = client.create_board("Sprint").await;
    let node_id = client.add_node(&board_id, json!({})).await;
    let uri = format!("/boards/{}/nodes/{}", board_id, node_id);

    let (status, ack) = client.raw(Method::DELETE, &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "success": true }));

    let (_, board) = client.get(&format!("/boards/{}", board_id)).await;
    assert_eq!(board["nodes"], json!({}));

    let (status, err) = client.raw(Method::DELETE, &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err, json!({ "error": "Node not found" }));
}

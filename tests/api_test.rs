//! End-to-end tests for the HTTP surface, driven through the real filter
//! stack against the in-memory store.

use std::sync::Arc;

use chat_relay::routes::configure_routes;
use chat_relay::store::{MemoryStore, MessageStore};
use serde_json::{json, Value};
use warp::http::StatusCode;

fn routes(
    store: Arc<dyn MessageStore>,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    configure_routes(store)
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body is not JSON")
}

#[tokio::test]
async fn test_create_then_list() {
    let api = routes(Arc::new(MemoryStore::new()));

    let record = json!({
        "id": "msg_1",
        "conversationId": "c1",
        "sender": "You",
        "text": "hi",
        "timestamp": "2024-01-01T00:00:00Z"
    });

    let resp = warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&record)
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp.body())["message"],
        "Message saved successfully"
    );

    let resp = warp::test::request()
        .method("GET")
        .path("/messages")
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body()), json!([record]));

    let resp = warp::test::request()
        .method("GET")
        .path("/messages/conversation/c1")
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body()), json!([record]));
}

#[tokio::test]
async fn test_duplicate_id_rejected() {
    let api = routes(Arc::new(MemoryStore::new()));
    let record = json!({ "id": "msg_1", "text": "first" });

    let resp = warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&record)
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&json!({ "id": "msg_1", "text": "second" }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(resp.body())["error"], "Message ID already exists");

    // The losing write left no trace
    let resp = warp::test::request()
        .method("GET")
        .path("/messages")
        .reply(&api)
        .await;
    let listed = body_json(resp.body());
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["text"], "first");
}

#[tokio::test]
async fn test_create_without_id_rejected() {
    let store = Arc::new(MemoryStore::new());
    let api = routes(store.clone());

    let resp = warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&json!({ "text": "anonymous" }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp.body())["error"], "Message ID is required");

    // No write occurred
    assert!(store.list_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_status_update_round_trip() {
    let api = routes(Arc::new(MemoryStore::new()));

    let record = json!({
        "id": "msg_1",
        "conversationId": "c1",
        "sender": "You",
        "text": "hi",
        "timestamp": "2024-01-01T00:00:00Z"
    });
    warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&record)
        .reply(&api)
        .await;

    let resp = warp::test::request()
        .method("PUT")
        .path("/messages/status/msg_1")
        .json(&json!({ "status": "delivered" }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp.body())["message"],
        "Status updated successfully"
    );

    let resp = warp::test::request()
        .method("GET")
        .path("/messages")
        .reply(&api)
        .await;
    let listed = body_json(resp.body());
    assert_eq!(listed[0]["status"], "delivered");
    // Every other field is unchanged
    assert_eq!(listed[0]["id"], "msg_1");
    assert_eq!(listed[0]["conversationId"], "c1");
    assert_eq!(listed[0]["sender"], "You");
    assert_eq!(listed[0]["text"], "hi");
    assert_eq!(listed[0]["timestamp"], "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_status_update_absent_id() {
    let api = routes(Arc::new(MemoryStore::new()));

    let resp = warp::test::request()
        .method("PUT")
        .path("/messages/status/never_created")
        .json(&json!({ "status": "read" }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp.body())["error"], "Message not found");
}

#[tokio::test]
async fn test_status_update_missing_status() {
    let api = routes(Arc::new(MemoryStore::new()));
    warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&json!({ "id": "msg_1" }))
        .reply(&api)
        .await;

    let resp = warp::test::request()
        .method("PUT")
        .path("/messages/status/msg_1")
        .json(&json!({}))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp.body())["error"],
        "Status is required in the request body"
    );
}

#[tokio::test]
async fn test_conversation_filter() {
    let api = routes(Arc::new(MemoryStore::new()));

    for record in [
        json!({ "id": "msg_1", "conversationId": "c1", "text": "one" }),
        json!({ "id": "msg_2", "conversationId": "c2", "text": "two" }),
        json!({ "id": "msg_3", "conversationId": "c1", "text": "three" }),
    ] {
        warp::test::request()
            .method("POST")
            .path("/messages")
            .json(&record)
            .reply(&api)
            .await;
    }

    let resp = warp::test::request()
        .method("GET")
        .path("/messages/conversation/c1")
        .reply(&api)
        .await;
    let listed = body_json(resp.body());
    assert_eq!(listed.as_array().unwrap().len(), 2);

    // Unknown conversation is an empty success, not a 404
    let resp = warp::test::request()
        .method("GET")
        .path("/messages/conversation/nowhere")
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body()), json!([]));
}

#[tokio::test]
async fn test_unknown_fields_survive_round_trip() {
    let api = routes(Arc::new(MemoryStore::new()));

    let record = json!({
        "id": "msg_1",
        "text": "hi",
        "deliveredTo": ["a", "b"]
    });
    warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&record)
        .reply(&api)
        .await;

    let resp = warp::test::request()
        .method("GET")
        .path("/messages")
        .reply(&api)
        .await;
    assert_eq!(body_json(resp.body())[0]["deliveredTo"], json!(["a", "b"]));
}

#[tokio::test]
async fn test_example_scenario() {
    // POST, list, update to "read", then read back through the
    // conversation filter
    let api = routes(Arc::new(MemoryStore::new()));

    let record = json!({
        "id": "msg_1",
        "conversationId": "c1",
        "sender": "You",
        "text": "hi",
        "timestamp": "2024-01-01T00:00:00Z"
    });

    let resp = warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&record)
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = warp::test::request()
        .method("GET")
        .path("/messages")
        .reply(&api)
        .await;
    assert_eq!(body_json(resp.body()), json!([record]));

    let resp = warp::test::request()
        .method("PUT")
        .path("/messages/status/msg_1")
        .json(&json!({ "status": "read" }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = warp::test::request()
        .method("GET")
        .path("/messages/conversation/c1")
        .reply(&api)
        .await;
    let listed = body_json(resp.body());
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["status"], "read");
}

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use storeapi_api::config::ApiConfig;
use storeapi_inventory::{ItemPayload, ItemRepository};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Same router as prod, seeded with `[{chair, 5}]`, bound to an ephemeral port.
    async fn spawn() -> Self {
        let seed = vec![ItemPayload::new("chair", 5).to_item().unwrap()];
        let repository = Arc::new(ItemRepository::new(seed).unwrap());
        let app = storeapi_api::app::build_app(&ApiConfig::default(), repository);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn list_items(client: &reqwest::Client, srv: &TestServer) -> serde_json::Value {
    let res = client.get(srv.url("/items")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn full_lifecycle_create_update_delete_reset() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create
    let res = client
        .post(srv.url("/item"))
        .json(&json!({ "name": "desk", "amount": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created, json!({ "name": "desk", "amount": 2 }));
    assert_eq!(list_items(&client, &srv).await.as_array().unwrap().len(), 2);

    // Update
    let res = client
        .patch(srv.url("/item"))
        .json(&json!({ "name": "desk", "amount": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["amount"], 9);

    // Delete
    let res = client.delete(srv.url("/item/chair")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        list_items(&client, &srv).await,
        json!([{ "name": "desk", "amount": 9 }])
    );

    // Reset
    let res = client.post(srv.url("/reset")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        list_items(&client, &srv).await,
        json!([{ "name": "chair", "amount": 5 }])
    );
}

#[tokio::test]
async fn get_item_by_name() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/item/chair")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "name": "chair", "amount": 5 }));

    let res = client.get(srv.url("/item/sofa")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Item 'sofa' was not found");
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn create_rejects_duplicates_and_bad_payloads() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let cases = [
        (json!({ "name": " chair ", "amount": 1 }), "duplicate_name"),
        (json!({ "name": "ab", "amount": 1 }), "validation_error"),
        (json!({ "name": "desk!", "amount": 1 }), "validation_error"),
        (json!({ "amount": 1 }), "validation_error"),
        (json!({ "name": "desk" }), "invalid_amount"),
        (json!({ "name": "desk", "amount": 0 }), "invalid_amount"),
        (json!({ "name": "desk", "amount": 1.5 }), "invalid_amount"),
        (json!({ "name": "desk", "amount": "3" }), "invalid_amount"),
        (json!({ "name": "desk", "amount": 1, "color": "red" }), "validation_error"),
    ];

    for (body, code) in cases {
        let res = client.post(srv.url("/item")).json(&body).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload {body}");
        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["code"], code, "payload {body}");
        assert!(err["error"].is_string());
    }

    assert_eq!(
        list_items(&client, &srv).await,
        json!([{ "name": "chair", "amount": 5 }])
    );
}

#[tokio::test]
async fn array_bodies_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/item"))
        .json(&json!(["desk", 3]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .patch(srv.url("/item"))
        .json(&json!(["chair", 9]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["code"], "validation_error");

    assert_eq!(
        list_items(&client, &srv).await,
        json!([{ "name": "chair", "amount": 5 }])
    );
}

#[tokio::test]
async fn update_rejects_unknown_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .patch(srv.url("/item"))
        .json(&json!({ "name": "chair", "amount": 9, "color": "red" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["code"], "validation_error");
    assert!(err["error"].as_str().unwrap().contains("color"));

    let res = client.get(srv.url("/item/chair")).send().await.unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["amount"], 5);
}

#[tokio::test]
async fn get_item_trims_path_name() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/item/%20%20chair%20")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "name": "chair", "amount": 5 }));
}

#[tokio::test]
async fn oversized_amount_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/item"))
        .json(&json!({ "name": "desk", "amount": 9_007_199_254_740_993u64 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["code"], "invalid_amount");
    assert_eq!(err["error"], "\"amount\" must be a safe number");
}

#[tokio::test]
async fn malformed_json_is_a_400_with_error_body() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/item"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["code"], "invalid_json");

    // No content type at all.
    let res = client.patch(srv.url("/item")).body("{}").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_distinguishes_not_found_from_validation() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .patch(srv.url("/item"))
        .json(&json!({ "name": "lamp", "amount": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Name 'lamp' does not exist in DB. Please use POST to add");

    let res = client
        .patch(srv.url("/item"))
        .json(&json!({ "name": "chair", "amount": -2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.get(srv.url("/item/chair")).send().await.unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["amount"], 5);
}

#[tokio::test]
async fn delete_twice_returns_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.delete(srv.url("/item/%20chair%20")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let res = client.delete(srv.url("/item/chair")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn landing_page_and_docs() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.unwrap(),
        "Welcome to the store!\nAll information about API is here: http://localhost:8080/api-docs"
    );

    let res = client.get(srv.url("/api-docs")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc: serde_json::Value = res.json().await.unwrap();
    assert!(doc["paths"]["/item/{name}"].is_object());

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

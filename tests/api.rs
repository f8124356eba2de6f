//! End-to-end tests for the REST surface, served over a real listener with
//! the in-memory store.

use axum::http::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn welcome_text_at_root() {
    let base = common::spawn_app().await;
    let res = reqwest::get(&base).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.unwrap(),
        "Welcome to the Local Issue Reporting API!"
    );
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let base = common::spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/Issues"))
        .json(&common::pothole_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Issue reported successfully");
    let created = body["data"].clone();
    assert_eq!(created["title"], "Pothole");
    assert!(created["createdAt"].is_string());

    let id = created["id"].as_str().unwrap();
    let res = client
        .get(format!("{base}/Issues/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_with_missing_field_is_rejected_without_write() {
    let base = common::spawn_app().await;
    let client = reqwest::Client::new();

    for field in ["title", "description", "location"] {
        let mut payload = common::pothole_payload();
        payload.as_object_mut().unwrap().remove(field);

        let res = client
            .post(format!("{base}/Issues"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "All fields are required");
    }

    // Empty string counts as missing.
    let mut payload = common::pothole_payload();
    payload["title"] = json!("");
    let res = client
        .post(format!("{base}/Issues"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.get(format!("{base}/Issues")).send().await.unwrap();
    let all: Vec<Value> = res.json().await.unwrap();
    assert!(all.is_empty(), "rejected creates must not write");
}

#[tokio::test]
async fn unknown_id_is_not_found_for_get_update_delete() {
    let base = common::spawn_app().await;
    let client = reqwest::Client::new();
    let missing = format!("{base}/Issues/no-such-id");

    let res = client.get(&missing).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Issue not found");

    let res = client
        .put(&missing)
        .json(&json!({ "title": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(&missing).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_applies_fields_and_preserves_identity() {
    let base = common::spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/Issues"))
        .json(&common::pothole_payload())
        .send()
        .await
        .unwrap();
    let created: Value = res.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let res = client
        .put(format!("{base}/Issues/{id}"))
        .json(&json!({ "description": "Repaired" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Issue updated successfully");
    assert_eq!(body["data"]["description"], "Repaired");
    assert_eq!(body["data"]["title"], "Pothole");
    assert_eq!(body["data"]["id"], created["data"]["id"]);
    assert_eq!(body["data"]["createdAt"], created["data"]["createdAt"]);

    // An update with no fields present changes nothing.
    let res = client
        .put(format!("{base}/Issues/{id}"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["description"], "Repaired");
    assert_eq!(body["data"]["createdAt"], created["data"]["createdAt"]);
}

#[tokio::test]
async fn delete_removes_record_permanently() {
    let base = common::spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/Issues"))
        .json(&common::pothole_payload())
        .send()
        .await
        .unwrap();
    let created: Value = res.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let res = client
        .delete(format!("{base}/Issues/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Issue deleted successfully");

    let res = client
        .get(format!("{base}/Issues/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get(format!("{base}/Issues")).send().await.unwrap();
    let all: Vec<Value> = res.json().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn empty_store_lists_empty_array() {
    let base = common::spawn_app().await;

    let res = reqwest::get(format!("{base}/Issues")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let all: Vec<Value> = res.json().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn health_reports_store_ok() {
    let base = common::spawn_app().await;

    let res = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "ok");
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let base = common::spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base}/Issues"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let base = common::spawn_app().await;

    let res = reqwest::get(format!("{base}/Issues")).await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}

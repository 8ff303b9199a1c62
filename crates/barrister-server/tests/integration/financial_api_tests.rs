use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::integration::common::{setup_failing_app, setup_test_app};

#[tokio::test]
async fn amount_keeps_two_decimal_places() {
    let app = setup_test_app();

    let (status, created) = app
        .send(
            "POST",
            "/financial",
            Some(json!({"type": "income", "amount": 1250.5, "category": "fees"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["ok"], true);
    let id = created["id"].as_str().unwrap();

    let (status, tx) = app.send("GET", &format!("/financial?id={id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tx["amount"], "1250.50");
    assert_eq!(tx["type"], "income");
    assert_eq!(tx["category"], "fees");
}

#[tokio::test]
async fn amount_is_rounded_half_away_from_zero() {
    let app = setup_test_app();

    let (_, created) = app
        .send(
            "POST",
            "/financial",
            Some(json!({"type": "expense", "amount": 10.125})),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (_, tx) = app.send("GET", &format!("/financial?id={id}"), None).await;
    assert_eq!(tx["amount"], "10.13");
}

#[tokio::test]
async fn defaults_are_applied() {
    let app = setup_test_app();

    let (_, created) = app
        .send(
            "POST",
            "/financial",
            Some(json!({"type": "expense", "amount": 40})),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (_, tx) = app.send("GET", &format!("/financial?id={id}"), None).await;
    assert_eq!(tx["isConfidential"], false);
    assert_eq!(tx["transactionDate"], tx["createdAt"]);
    assert_eq!(tx["createdAt"], tx["updatedAt"]);
    assert!(tx["description"].is_null());
    assert!(tx["createdBy"].is_null());
}

#[tokio::test]
async fn explicit_date_and_confidentiality_are_kept() {
    let app = setup_test_app();

    let (_, created) = app
        .send(
            "POST",
            "/financial",
            Some(json!({
                "type": "expense",
                "amount": 99.99,
                "transactionDate": "2024-02-29T15:30:00Z",
                "isConfidential": true,
                "createdBy": "partner-4"
            })),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (_, tx) = app.send("GET", &format!("/financial?id={id}"), None).await;
    assert_eq!(tx["transactionDate"], "2024-02-29T15:30:00Z");
    assert_eq!(tx["isConfidential"], true);
    assert_eq!(tx["createdBy"], "partner-4");
}

#[tokio::test]
async fn invalid_amount_is_rejected() {
    let app = setup_test_app();

    let (status, json) = app
        .send(
            "POST",
            "/financial",
            Some(json!({"type": "income", "amount": "12"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"][0]["path"], json!(["amount"]));
    assert_eq!(json["error"][0]["message"], "Expected number, received string");

    let (status, json) = app
        .send(
            "POST",
            "/financial",
            Some(json!({"type": "income", "amount": 1e15})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"][0]["code"], "too_big");
}

#[tokio::test]
async fn list_newest_first_and_delete() {
    let app = setup_test_app();

    let (_, first) = app
        .send("POST", "/financial", Some(json!({"type": "income", "amount": 1})))
        .await;
    let (_, second) = app
        .send("POST", "/financial", Some(json!({"type": "income", "amount": 2})))
        .await;

    let (_, list) = app.send("GET", "/financial", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], second["id"]);
    assert_eq!(list[1]["id"], first["id"]);

    let id = first["id"].as_str().unwrap();
    let (status, json) = app.send("DELETE", &format!("/financial?id={id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"ok": true}));

    let (status, _) = app.send("DELETE", &format!("/financial?id={id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.send("GET", "/financial", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn text_plain_body_is_accepted() {
    let app = setup_test_app();

    let request = Request::post("/financial")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"type": "income", "amount": 75.5}"#))
        .unwrap();
    let (status, created) = app.send_request(request).await;
    assert_eq!(status, StatusCode::OK);

    let id = created["id"].as_str().unwrap();
    let (_, tx) = app.send("GET", &format!("/financial?id={id}"), None).await;
    assert_eq!(tx["amount"], "75.50");
}

#[tokio::test]
async fn duplicated_id_uses_the_first_value() {
    let app = setup_test_app();

    let (_, created) = app
        .send("POST", "/financial", Some(json!({"type": "income", "amount": 3})))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, tx) = app
        .send("GET", &format!("/financial?id={id}&id=zzz"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tx["id"], id);

    let (status, json) = app
        .send("DELETE", &format!("/financial?id=&id={id}"), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "id required"}));
}

#[tokio::test]
async fn delete_without_id_is_rejected() {
    let (status, json) = setup_test_app().send("DELETE", "/financial", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "id required"}));
}

#[tokio::test]
async fn there_is_no_update_route() {
    let (status, _) = setup_test_app()
        .send("PUT", "/financial", Some(json!({"id": "x", "amount": 1})))
        .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn store_failure_is_collapsed() {
    let (status, json) = setup_failing_app()
        .send("DELETE", "/financial?id=abc", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Invalid request"}));
}

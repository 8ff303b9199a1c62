use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::integration::common::{setup_failing_app, setup_test_app};

#[tokio::test]
async fn create_then_get_defaults_status() {
    let app = setup_test_app();

    let (status, created) = app
        .send(
            "POST",
            "/cases",
            Some(json!({
                "caseNumber": "2024-017",
                "title": "Estate of Marlowe",
                "clientName": "Ruth Marlowe",
                "startDate": "2024-03-01"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["ok"], true);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, case) = app.send("GET", &format!("/cases?id={id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(case["id"], id.as_str());
    assert_eq!(case["caseNumber"], "2024-017");
    assert_eq!(case["title"], "Estate of Marlowe");
    assert_eq!(case["clientName"], "Ruth Marlowe");
    assert_eq!(case["status"], "active");
    assert_eq!(case["startDate"], "2024-03-01T00:00:00Z");
    assert!(case["description"].is_null());
    assert!(case["createdAt"].is_string());
}

#[tokio::test]
async fn ids_are_unique() {
    let app = setup_test_app();
    let body = json!({"caseNumber": "1", "title": "A", "clientName": "C"});

    let (_, first) = app.send("POST", "/cases", Some(body.clone())).await;
    let (_, second) = app.send("POST", "/cases", Some(body)).await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn get_unknown_id_returns_null() {
    let app = setup_test_app();

    let (status, json) = app.send("GET", "/cases?id=missing", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = setup_test_app();

    let mut ids = Vec::new();
    for n in 1..=3 {
        let (_, created) = app
            .send(
                "POST",
                "/cases",
                Some(json!({"caseNumber": format!("{n}"), "title": "T", "clientName": "C"})),
            )
            .await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let (status, list) = app.send("GET", "/cases", None).await;
    assert_eq!(status, StatusCode::OK);

    let listed: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn empty_id_lists_everything() {
    let app = setup_test_app();
    app.send(
        "POST",
        "/cases",
        Some(json!({"caseNumber": "1", "title": "T", "clientName": "C"})),
    )
    .await;

    let (status, list) = app.send("GET", "/cases?id=", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_title_reports_its_path() {
    let app = setup_test_app();

    let (status, json) = app
        .send(
            "POST",
            "/cases",
            Some(json!({"caseNumber": "1", "clientName": "C"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let violations = json["error"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["path"], json!(["title"]));
    assert_eq!(violations[0]["code"], "invalid_type");
    assert_eq!(violations[0]["message"], "Required");
}

#[tokio::test]
async fn all_violations_are_reported_together() {
    let app = setup_test_app();

    let (status, json) = app
        .send(
            "POST",
            "/cases",
            Some(json!({"caseNumber": 7, "startDate": "someday"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let paths: Vec<&str> = json["error"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["path"][0].as_str().unwrap())
        .collect();
    for field in ["caseNumber", "title", "clientName", "startDate"] {
        assert!(paths.contains(&field), "missing violation for {field}");
    }
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let app = setup_test_app();

    let (_, created) = app
        .send(
            "POST",
            "/cases",
            Some(json!({
                "caseNumber": "2024-002",
                "title": "Original title",
                "clientName": "Hollis Ltd",
                "description": "Lease dispute"
            })),
        )
        .await;
    let id = created["id"].as_str().unwrap();
    let (_, before) = app.send("GET", &format!("/cases?id={id}"), None).await;

    let (status, updated) = app
        .send("PUT", "/cases", Some(json!({"id": id, "status": "closed"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "closed");

    let (_, after) = app.send("GET", &format!("/cases?id={id}"), None).await;
    assert_eq!(after, updated);

    let mut expected = before.clone();
    expected["status"] = json!("closed");
    assert_eq!(after, expected);
}

#[tokio::test]
async fn update_of_unknown_case_returns_null() {
    let app = setup_test_app();

    let (status, json) = app
        .send("PUT", "/cases", Some(json!({"id": "ghost", "title": "X"})))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

#[tokio::test]
async fn update_without_id_is_a_validation_error() {
    let app = setup_test_app();

    let (status, json) = app
        .send("PUT", "/cases", Some(json!({"title": "X"})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"][0]["path"], json!(["id"]));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = setup_test_app();

    let (_, created) = app
        .send(
            "POST",
            "/cases",
            Some(json!({"caseNumber": "1", "title": "T", "clientName": "C"})),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    for _ in 0..2 {
        let (status, json) = app.send("DELETE", &format!("/cases?id={id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"ok": true}));
    }

    let (_, fetched) = app.send("GET", &format!("/cases?id={id}"), None).await;
    assert!(fetched.is_null());
}

#[tokio::test]
async fn delete_without_id_is_rejected() {
    let app = setup_test_app();

    for uri in ["/cases", "/cases?id="] {
        let (status, json) = app.send("DELETE", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"error": "id required"}));
    }
}

#[tokio::test]
async fn malformed_json_is_an_invalid_request() {
    let app = setup_test_app();

    let request = Request::post("/cases")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = app.send_request(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Invalid request"}));
}

#[tokio::test]
async fn json_body_is_read_whatever_the_content_type() {
    let app = setup_test_app();

    let body = json!({"caseNumber": "9", "title": "Plain", "clientName": "C"});
    let request = Request::post("/cases")
        .header("content-type", "text/plain;charset=UTF-8")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, created) = app.send_request(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["ok"], true);

    let request = Request::put("/cases")
        .body(Body::from(
            json!({"id": created["id"], "status": "closed"}).to_string(),
        ))
        .unwrap();
    let (status, updated) = app.send_request(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "closed");
}

#[tokio::test]
async fn long_free_text_is_accepted() {
    let app = setup_test_app();

    let (status, created) = app
        .send(
            "POST",
            "/cases",
            Some(json!({
                "caseNumber": "1",
                "title": "T",
                "clientName": "C",
                "description": "x".repeat(10_001),
                "assignedLawyerId": "u".repeat(256),
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let id = created["id"].as_str().unwrap();
    let (_, case) = app.send("GET", &format!("/cases?id={id}"), None).await;
    assert_eq!(case["description"].as_str().unwrap().len(), 10_001);
}

#[tokio::test]
async fn duplicated_id_uses_the_first_value() {
    let app = setup_test_app();

    let (_, created) = app
        .send(
            "POST",
            "/cases",
            Some(json!({"caseNumber": "1", "title": "T", "clientName": "C"})),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, case) = app
        .send("GET", &format!("/cases?id={id}&id=other"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(case["id"], id);

    let (status, json) = app
        .send("DELETE", &format!("/cases?id={id}&id=other"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"ok": true}));

    let (_, fetched) = app.send("GET", &format!("/cases?id={id}"), None).await;
    assert!(fetched.is_null());
}

#[tokio::test]
async fn non_object_body_fails_validation() {
    let app = setup_test_app();

    let (status, json) = app.send("POST", "/cases", Some(json!([1, 2]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"][0]["path"], json!([]));
    assert_eq!(json["error"][0]["message"], "Expected object, received array");
}

#[tokio::test]
async fn store_failure_is_collapsed() {
    let app = setup_failing_app();

    let (status, json) = app.send("GET", "/cases", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Invalid request"}));

    let (status, json) = app
        .send(
            "POST",
            "/cases",
            Some(json!({"caseNumber": "1", "title": "T", "clientName": "C"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Invalid request"}));
}

#[tokio::test]
async fn health_reports_storage_state() {
    let (status, json) = setup_test_app().send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "healthy", "database": "ok"}));

    let (status, json) = setup_failing_app().send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json, json!({"status": "unhealthy", "database": "error"}));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, json) = setup_test_app()
        .send("GET", "/api-docs/openapi.json", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "Barrister API");
    assert!(json["paths"]["/firm-settings"]["post"].is_object());
}

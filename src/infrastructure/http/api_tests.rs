//! End-to-end tests driving the router against an in-memory database

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::create_app;
use crate::infrastructure::persistence::SqliteRepository;
use crate::infrastructure::state::AppState;

async fn test_app() -> Router {
    let repository = SqliteRepository::connect("sqlite::memory:", 1)
        .await
        .unwrap();
    create_app(Arc::new(AppState::with_repository(repository)))
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    send_with_headers(app, method, uri, body, &[]).await
}

async fn send_with_headers(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

fn grifo(zone_id: &Value) -> Value {
    json!({
        "name": "Grifo",
        "species": "Gryphon",
        "size": 2.5,
        "dangerLevel": 4,
        "healthStatus": "stable",
        "zoneId": zone_id
    })
}

#[tokio::test]
async fn zone_and_creature_lifecycle() {
    let app = test_app().await;

    // Create zone
    let created = send(
        &app,
        Method::POST,
        "/api/zones",
        Some(json!({"name": "Bosque", "capacity": 80})),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let zone_id = created.body["id"].clone();
    assert_eq!(
        created.headers[header::LOCATION],
        format!("/api/zones/{}", zone_id)
    );

    // Same name, other casing: same zone, no duplicate
    let again = send(
        &app,
        Method::POST,
        "/api/zones",
        Some(json!({"name": "bosque", "capacity": 5})),
    )
    .await;
    assert_eq!(again.status, StatusCode::CREATED);
    assert_eq!(again.body["id"], zone_id);
    assert_eq!(again.body["name"], "Bosque");
    assert_eq!(again.body["capacity"], 80);

    let zones = send(&app, Method::GET, "/api/zones", None).await;
    assert_eq!(zones.body.as_array().unwrap().len(), 1);

    // Creature in that zone
    let creature = send(&app, Method::POST, "/api/creatures", Some(grifo(&zone_id))).await;
    assert_eq!(creature.status, StatusCode::CREATED);
    assert_eq!(creature.body["zone"]["name"], "Bosque");
    let creature_id = creature.body["id"].clone();
    assert_eq!(
        creature.headers[header::LOCATION],
        format!("/api/creatures/{}", creature_id)
    );

    // Occupied zone cannot be deleted
    let blocked = send(&app, Method::DELETE, &format!("/api/zones/{}", zone_id), None).await;
    assert_eq!(blocked.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        blocked.body["message"],
        "Cannot delete zone with assigned creatures"
    );

    // Critical creature cannot be deleted
    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/creatures/{}", creature_id),
        Some(json!({"healthStatus": "critical"})),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["healthStatus"], "critical");
    assert_eq!(updated.body["name"], "Grifo");

    let refused = send(
        &app,
        Method::DELETE,
        &format!("/api/creatures/{}", creature_id),
        None,
    )
    .await;
    assert_eq!(refused.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        refused.body["message"],
        "Cannot delete a creature in critical health"
    );

    let still_there = send(
        &app,
        Method::GET,
        &format!("/api/creatures/{}", creature_id),
        None,
    )
    .await;
    assert_eq!(still_there.status, StatusCode::OK);

    // Recover, delete the creature, then the empty zone
    send(
        &app,
        Method::PUT,
        &format!("/api/creatures/{}", creature_id),
        Some(json!({"healthStatus": "stable"})),
    )
    .await;
    let deleted = send(
        &app,
        Method::DELETE,
        &format!("/api/creatures/{}", creature_id),
        None,
    )
    .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let zone_deleted = send(&app, Method::DELETE, &format!("/api/zones/{}", zone_id), None).await;
    assert_eq!(zone_deleted.status, StatusCode::NO_CONTENT);

    let gone = send(&app, Method::GET, &format!("/api/zones/{}", zone_id), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["message"], format!("Zone not found: {}", zone_id));
}

#[tokio::test]
async fn summary_counts_creatures_per_zone_ordered_by_name() {
    let app = test_app().await;

    let valle = send(&app, Method::POST, "/api/zones", Some(json!({"name": "Valle"}))).await;
    let bosque = send(&app, Method::POST, "/api/zones", Some(json!({"name": "Bosque"}))).await;
    send(&app, Method::POST, "/api/creatures", Some(grifo(&bosque.body["id"]))).await;

    let summary = send(&app, Method::GET, "/api/zones/summary", None).await;
    assert_eq!(summary.status, StatusCode::OK);
    let rows = summary.body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Bosque");
    assert_eq!(rows[0]["creatureCount"], 1);
    assert_eq!(rows[1]["id"], valle.body["id"]);
    assert_eq!(rows[1]["creatureCount"], 0);
}

#[tokio::test]
async fn structural_violations_are_listed_per_field() {
    let app = test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/api/creatures",
        Some(json!({
            "name": "",
            "species": "Ave",
            "size": 0.0,
            "dangerLevel": 6,
            "healthStatus": "stable",
            "zoneId": 1
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Bad Request");
    assert_eq!(response.body["message"], "Validation failed");
    assert_eq!(response.body["path"], "/api/creatures");
    let fields: Vec<&str> = response.body["fieldErrors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["dangerLevel", "name", "size"]);
}

#[tokio::test]
async fn zone_names_match_ignoring_case_beyond_ascii() {
    let app = test_app().await;

    let first = send(&app, Method::POST, "/api/zones", Some(json!({"name": "Fénix"}))).await;
    let second = send(&app, Method::POST, "/api/zones", Some(json!({"name": "FÉNIX"}))).await;

    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.body["id"], first.body["id"]);
    assert_eq!(second.body["name"], "Fénix");

    let zones = send(&app, Method::GET, "/api/zones", None).await;
    assert_eq!(zones.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn null_required_fields_are_field_errors() {
    let app = test_app().await;

    let zone = send(
        &app,
        Method::POST,
        "/api/zones",
        Some(json!({"name": null, "capacity": 3})),
    )
    .await;
    assert_eq!(zone.status, StatusCode::BAD_REQUEST);
    assert_eq!(zone.body["message"], "Validation failed");
    assert_eq!(zone.body["fieldErrors"][0]["field"], "name");
    assert_eq!(
        zone.body["fieldErrors"][0]["message"],
        "Zone name must not be blank"
    );

    let creature = send(
        &app,
        Method::POST,
        "/api/creatures",
        Some(json!({
            "name": "Grifo",
            "species": null,
            "size": 2.5,
            "dangerLevel": 4,
            "healthStatus": null,
            "zoneId": 1
        })),
    )
    .await;
    assert_eq!(creature.status, StatusCode::BAD_REQUEST);
    assert_eq!(creature.body["message"], "Validation failed");
    let fields: Vec<&str> = creature.body["fieldErrors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["healthStatus", "species"]);
}

#[tokio::test]
async fn creature_with_unknown_zone_is_not_found() {
    let app = test_app().await;

    let response = send(&app, Method::POST, "/api/creatures", Some(grifo(&json!(999)))).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Zone not found: 999");
}

#[tokio::test]
async fn blank_zone_rename_is_rejected_and_nothing_changes() {
    let app = test_app().await;
    let zone = send(&app, Method::POST, "/api/zones", Some(json!({"name": "Valle"}))).await;
    let uri = format!("/api/zones/{}", zone.body["id"]);

    let response = send(&app, Method::PUT, &uri, Some(json!({"name": "   "}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Zone name cannot be blank");

    let unchanged = send(&app, Method::GET, &uri, None).await;
    assert_eq!(unchanged.body["name"], "Valle");
}

#[tokio::test]
async fn renaming_onto_another_zone_name_is_a_conflict() {
    let app = test_app().await;
    send(&app, Method::POST, "/api/zones", Some(json!({"name": "Valle"}))).await;
    let bosque = send(&app, Method::POST, "/api/zones", Some(json!({"name": "Bosque"}))).await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/zones/{}", bosque.body["id"]),
        Some(json!({"name": "VALLE"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Zone name already exists");
}

#[tokio::test]
async fn empty_creature_patch_changes_nothing() {
    let app = test_app().await;
    let zone = send(&app, Method::POST, "/api/zones", Some(json!({"name": "Bosque"}))).await;
    let created = send(&app, Method::POST, "/api/creatures", Some(grifo(&zone.body["id"]))).await;

    let patched = send(
        &app,
        Method::PUT,
        &format!("/api/creatures/{}", created.body["id"]),
        Some(json!({})),
    )
    .await;

    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body, created.body);
}

#[tokio::test]
async fn trace_id_follows_inbound_request_id() {
    let app = test_app().await;

    let response = send_with_headers(
        &app,
        Method::GET,
        "/api/creatures/42",
        None,
        &[("x-request-id", "trace-abc")],
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["traceId"], "trace-abc");
    assert_eq!(response.headers["x-request-id"], "trace-abc");
    assert_eq!(response.body["message"], "Creature not found: 42");
}

#[tokio::test]
async fn trace_id_is_generated_when_absent() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/api/zones/42", None).await;

    let trace_id = response.body["traceId"].as_str().unwrap();
    assert!(!trace_id.is_empty());
    assert_eq!(response.headers["x-request-id"], trace_id);
}

#[tokio::test]
async fn blank_request_id_is_replaced_consistently() {
    let app = test_app().await;

    let response = send_with_headers(
        &app,
        Method::GET,
        "/api/zones/42",
        None,
        &[("x-request-id", "   ")],
    )
    .await;

    let trace_id = response.body["traceId"].as_str().unwrap();
    assert!(!trace_id.trim().is_empty());
    assert_eq!(response.headers["x-request-id"], trace_id);
}

#[tokio::test]
async fn malformed_requests_get_the_error_envelope() {
    let app = test_app().await;

    let bad_id = send(&app, Method::GET, "/api/zones/abc", None).await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.body["message"], "Invalid id: abc");

    let bad_type = send(
        &app,
        Method::POST,
        "/api/zones",
        Some(json!({"name": "Valle", "capacity": "many"})),
    )
    .await;
    assert_eq!(bad_type.status, StatusCode::BAD_REQUEST);
    assert!(bad_type.body["traceId"].is_string());

    let unknown = send(&app, Method::GET, "/api/unknown", None).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.body["path"], "/api/unknown");
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, Value::String("OK".to_string()));
}

//! End-to-end tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::adapters::InMemoryStore;
use crate::config::AppConfig;
use crate::{app, AppState};

fn test_app() -> Router {
    test_app_with(AppConfig::default())
}

fn test_app_with(config: AppConfig) -> Router {
    let store = InMemoryStore::new();
    app(AppState::new(&store, &config), &config)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_collection(app: &Router, name: &str) -> Value {
    let (status, body) =
        send(app, Method::POST, "/collections", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn create_prompt(app: &Router, body: Value) -> Value {
    let (status, body) = send(app, Method::POST, "/prompts", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

fn ts(value: &Value) -> chrono::DateTime<chrono::Utc> {
    value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_create_then_get_returns_same_record() {
    let app = test_app();

    let created = create_prompt(
        &app,
        json!({ "title": "Greeting", "content": "Hello {{name}}", "description": "friendly" }),
    )
    .await;

    assert!(created["id"].is_string());
    assert_eq!(created["created_at"], created["updated_at"]);
    assert_eq!(created["collection_id"], Value::Null);

    let uri = format!("/prompts/{}", created["id"].as_str().unwrap());
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_prompt() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/prompts/does-not-exist", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Prompt not found" }));
}

#[tokio::test]
async fn test_create_with_unknown_collection_is_rejected() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/prompts",
        Some(json!({ "title": "T", "content": "C", "collection_id": "missing" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Collection not found" }));

    let (_, list) = send(&app, Method::GET, "/prompts", None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/prompts",
        Some(json!({ "title": "", "content": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<_> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["content", "title"]);

    let (status, body) = send(&app, Method::POST, "/prompts", Some(json!({ "title": "T" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/collections")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_filters_and_sorts_newest_first() {
    let app = test_app();
    let c1 = create_collection(&app, "Work").await;
    let c1_id = c1["id"].as_str().unwrap();

    let first = create_prompt(
        &app,
        json!({ "title": "Weekly report", "content": "x", "collection_id": c1_id }),
    )
    .await;
    let second = create_prompt(
        &app,
        json!({
            "title": "Standup",
            "content": "x",
            "description": "daily REPORT",
            "collection_id": c1_id
        }),
    )
    .await;
    let third = create_prompt(&app, json!({ "title": "Poem", "content": "report" })).await;

    let (status, all) = send(&app, Method::GET, "/prompts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["total"], 3);
    let ids: Vec<_> = all["prompts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].clone())
        .collect();
    assert_eq!(ids, vec![third["id"].clone(), second["id"].clone(), first["id"].clone()]);

    let uri = format!("/prompts?collection_id={c1_id}");
    let (_, in_c1) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(in_c1["total"], 2);

    let (_, searched) = send(&app, Method::GET, "/prompts?search=report", None).await;
    assert_eq!(searched["total"], 2);
    assert_eq!(searched["prompts"][0]["id"], second["id"]);
    assert_eq!(searched["prompts"][1]["id"], first["id"]);

    let (_, empty_params) = send(&app, Method::GET, "/prompts?collection_id=&search=", None).await;
    assert_eq!(empty_params["total"], 3);
}

#[tokio::test]
async fn test_put_replaces_and_refreshes_updated_at() {
    let app = test_app();
    let collection = create_collection(&app, "Docs").await;
    let created = create_prompt(
        &app,
        json!({ "title": "Old", "content": "old", "description": "gone soon" }),
    )
    .await;
    let uri = format!("/prompts/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "title": "New", "content": "new", "collection_id": collection["id"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(ts(&updated["updated_at"]) > ts(&created["updated_at"]));
    assert_eq!(updated["title"], "New");
    assert_eq!(updated["description"], Value::Null);
    assert_eq!(updated["collection_id"], collection["id"]);

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "title": "New", "content": "new", "collection_id": "missing" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/prompts/missing",
        Some(json!({ "title": "New", "content": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_applies_only_supplied_fields() {
    let app = test_app();
    let collection = create_collection(&app, "Docs").await;
    let created = create_prompt(
        &app,
        json!({
            "title": "Title",
            "content": "Body",
            "description": "Desc",
            "collection_id": collection["id"]
        }),
    )
    .await;
    let uri = format!("/prompts/{}", created["id"].as_str().unwrap());

    let (status, patched) =
        send(&app, Method::PATCH, &uri, Some(json!({ "title": "Renamed" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["title"], "Renamed");
    assert_eq!(patched["content"], "Body");
    assert_eq!(patched["description"], "Desc");
    assert_eq!(patched["collection_id"], collection["id"]);
    assert!(ts(&patched["updated_at"]) > ts(&created["updated_at"]));
    assert_eq!(patched["created_at"], created["created_at"]);

    let (status, cleared) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({ "description": null, "collection_id": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["description"], Value::Null);
    assert_eq!(cleared["collection_id"], Value::Null);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({ "collection_id": "missing" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Collection not found");

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "title": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::PATCH, "/prompts/missing", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_empty_collection_id_leaves_link_alone() {
    let app = test_app();
    let collection = create_collection(&app, "Docs").await;
    let created = create_prompt(
        &app,
        json!({ "title": "Title", "content": "Body", "collection_id": collection["id"] }),
    )
    .await;
    let uri = format!("/prompts/{}", created["id"].as_str().unwrap());

    let (status, patched) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({ "title": "Renamed", "collection_id": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["title"], "Renamed");
    assert_eq!(patched["collection_id"], collection["id"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_collection_delete_racing_creates_leaves_no_dangling_prompts() {
    for _ in 0..10 {
        let app = test_app();
        let collection = create_collection(&app, "Racy").await;
        let collection_id = collection["id"].as_str().unwrap().to_string();

        let mut handles = Vec::new();
        for i in 0..20 {
            let app = app.clone();
            let body = json!({
                "title": format!("P{i}"),
                "content": "x",
                "collection_id": collection_id
            });
            handles.push(tokio::spawn(async move {
                send(&app, Method::POST, "/prompts", Some(body)).await.0
            }));
        }
        let delete = {
            let app = app.clone();
            let uri = format!("/collections/{collection_id}");
            tokio::spawn(async move { send(&app, Method::DELETE, &uri, None).await.0 })
        };

        for handle in handles {
            let status = handle.await.unwrap();
            assert!(
                status == StatusCode::CREATED || status == StatusCode::BAD_REQUEST,
                "{status}"
            );
        }
        assert_eq!(delete.await.unwrap(), StatusCode::NO_CONTENT);

        let uri = format!("/prompts?collection_id={collection_id}");
        let (status, listed) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["total"], 0);
    }
}

#[tokio::test]
async fn test_delete_prompt() {
    let app = test_app();
    let created = create_prompt(&app, json!({ "title": "T", "content": "C" })).await;
    let uri = format!("/prompts/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, Method::GET, "/prompts", None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_collection_endpoints() {
    let app = test_app();

    let created = create_collection(&app, "Ideas").await;
    assert!(created["created_at"].is_string());
    assert_eq!(created["description"], Value::Null);

    let (status, list) = send(&app, Method::GET, "/collections", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    assert_eq!(list["collections"][0], created);

    let uri = format!("/collections/{}", created["id"].as_str().unwrap());
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = send(&app, Method::GET, "/collections/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Collection not found" }));

    let (status, _) = send(
        &app,
        Method::POST,
        "/collections",
        Some(json!({ "name": "n".repeat(101) })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::DELETE, "/collections/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_collection_unlinks_prompts() {
    let app = test_app();
    let c1 = create_collection(&app, "C1").await;
    let c1_id = c1["id"].as_str().unwrap();
    let p1 = create_prompt(
        &app,
        json!({ "title": "P1", "content": "x", "collection_id": c1_id }),
    )
    .await;
    let p2 = create_prompt(&app, json!({ "title": "P2", "content": "x" })).await;

    let (_, filtered) =
        send(&app, Method::GET, &format!("/prompts?collection_id={c1_id}"), None).await;
    assert_eq!(filtered["total"], 1);
    assert_eq!(filtered["prompts"][0]["id"], p1["id"]);

    let (status, _) = send(&app, Method::DELETE, &format!("/collections/{c1_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let p1_uri = format!("/prompts/{}", p1["id"].as_str().unwrap());
    let (status, after) = send(&app, Method::GET, &p1_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["collection_id"], Value::Null);
    assert!(ts(&after["updated_at"]) > ts(&p1["updated_at"]));

    let p2_uri = format!("/prompts/{}", p2["id"].as_str().unwrap());
    let (_, untouched) = send(&app, Method::GET, &p2_uri, None).await;
    assert_eq!(untouched, p2);

    let (status, _) = send(&app, Method::GET, &format!("/collections/{c1_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, list) = send(&app, Method::GET, "/collections", None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_prompt_variables() {
    let app = test_app();
    let created = create_prompt(
        &app,
        json!({ "title": "T", "content": "{{greeting}}, {{name}}! Bye {{name}}." }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/prompts/{id}/variables"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prompt_id"], id);
    assert_eq!(body["variables"], json!(["greeting", "name", "name"]));
}

#[tokio::test]
async fn test_strict_content_mode() {
    let app = test_app_with(AppConfig {
        strict_content: true,
        ..AppConfig::default()
    });

    let (status, _) = send(
        &app,
        Method::POST,
        "/prompts",
        Some(json!({ "title": "T", "content": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    create_prompt(&app, json!({ "title": "T", "content": "long enough content" })).await;
}

#[tokio::test]
async fn test_openapi_document_toggle() {
    let app = test_app();
    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/prompts/{id}"].is_object());
    assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));

    let app = test_app_with(AppConfig {
        swagger_ui: false,
        ..AppConfig::default()
    });
    let (status, _) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_is_permissive() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header("origin", "https://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

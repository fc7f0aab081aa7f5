//! HTTP-level integration tests for the `/projects` resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over an in-memory store.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, create_page, create_project, delete_auth, get_auth, post_json_auth,
    put_json_auth, token_for,
};
use pagewatch_db::memory::MemoryStore;
use serde_json::json;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_fresh_uuid_and_echoes_fields() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(store.clone());
    let user = Uuid::new_v4();
    let token = token_for(user);

    let response = post_json_auth(
        app,
        "/api/v1/projects",
        json!({ "name": "Storefront", "wpt_api_key": "abc123", "is_active": false }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(Uuid::parse_str(json["uuid"].as_str().unwrap()).is_ok());
    assert_eq!(json["name"], "Storefront");
    assert_eq!(json["wpt_api_key"], "abc123");
    assert_eq!(json["is_active"], false);
    assert_eq!(json["members"], json!([user.to_string()]));
    assert_eq!(json["pages"], json!([]));
    assert_eq!(store.project_count().await, 1);
}

#[tokio::test]
async fn create_assigns_distinct_uuids() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let token = token_for(Uuid::new_v4());

    let first = create_project(app.clone(), &token, "One").await;
    let second = create_project(app, &token, "Two").await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn create_without_name_is_a_field_error() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(store.clone());
    let token = token_for(Uuid::new_v4());

    let response = post_json_auth(app, "/api/v1/projects", json!({}), &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["name"], json!(["This field is required."]));
    assert_eq!(store.project_count().await, 0);
}

#[tokio::test]
async fn create_with_malformed_json_reports_non_field_error() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(store.clone());
    let token = token_for(Uuid::new_v4());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/projects")
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["non_field_errors"].is_array());
    assert_eq!(store.project_count().await, 0);
}

#[tokio::test]
async fn create_with_wrong_field_type_is_rejected() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let token = token_for(Uuid::new_v4());

    let response = post_json_auth(
        app,
        "/api/v1/projects",
        json!({ "name": "Typed", "is_active": "yes" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn creator_can_read_their_project() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let token = token_for(Uuid::new_v4());
    let id = create_project(app.clone(), &token, "Mine").await;

    let response = get_auth(app, &format!("/api/v1/projects/{id}"), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["uuid"], id.as_str());
    assert_eq!(json["name"], "Mine");
}

#[tokio::test]
async fn detail_includes_page_summaries() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let token = token_for(Uuid::new_v4());
    let id = create_project(app.clone(), &token, "With pages").await;
    let page_id = create_page(app.clone(), &token, &id, "Home").await;

    let response = get_auth(app, &format!("/api/v1/projects/{id}"), &token).await;
    let json = body_json(response).await;

    assert_eq!(json["pages"], json!([{ "uuid": page_id, "name": "Home" }]));
}

#[tokio::test]
async fn list_only_returns_member_projects() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let alice = token_for(Uuid::new_v4());
    let bob = token_for(Uuid::new_v4());

    create_project(app.clone(), &alice, "Alice 1").await;
    create_project(app.clone(), &alice, "Alice 2").await;
    create_project(app.clone(), &bob, "Bob 1").await;

    let response = get_auth(app, "/api/v1/projects", &alice).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(!names.contains(&"Bob 1"));
}

#[tokio::test]
async fn missing_project_returns_404() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let token = token_for(Uuid::new_v4());

    let response = get_auth(
        app,
        &format!("/api/v1/projects/{}", Uuid::new_v4()),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_project_id_returns_400() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let token = token_for(Uuid::new_v4());

    let response = get_auth(app, "/api/v1/projects/not-a-uuid", &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Non-members
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_member_is_forbidden_everywhere_and_nothing_changes() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(store.clone());
    let owner = token_for(Uuid::new_v4());
    let stranger = token_for(Uuid::new_v4());

    let id = create_project(app.clone(), &owner, "Private").await;
    let page_id = create_page(app.clone(), &owner, &id, "Home").await;
    let project_uri = format!("/api/v1/projects/{id}");
    let page_uri = format!("{project_uri}/pages/{page_id}");

    let responses = vec![
        get_auth(app.clone(), &project_uri, &stranger).await,
        put_json_auth(app.clone(), &project_uri, json!({ "name": "Hijacked" }), &stranger).await,
        delete_auth(app.clone(), &project_uri, &stranger).await,
        get_auth(app.clone(), &format!("{project_uri}/pages"), &stranger).await,
        post_json_auth(
            app.clone(),
            &format!("{project_uri}/pages"),
            json!({ "name": "Sneaky", "url": "https://example.com/" }),
            &stranger,
        )
        .await,
        get_auth(app.clone(), &page_uri, &stranger).await,
        put_json_auth(
            app.clone(),
            &page_uri,
            json!({ "name": "Sneaky", "url": "https://example.com/" }),
            &stranger,
        )
        .await,
        delete_auth(app.clone(), &page_uri, &stranger).await,
        get_auth(app.clone(), &format!("{project_uri}/members"), &stranger).await,
        post_json_auth(
            app.clone(),
            &format!("{project_uri}/members"),
            json!({ "user": Uuid::new_v4() }),
            &stranger,
        )
        .await,
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    assert_eq!(store.project_count().await, 1);
    assert_eq!(store.page_count().await, 1);

    let json = body_json(get_auth(app, &project_uri, &owner).await).await;
    assert_eq!(json["name"], "Private");
    assert_eq!(json["members"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_all_editable_fields() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let token = token_for(Uuid::new_v4());
    let id = create_project(app.clone(), &token, "Before").await;
    let uri = format!("/api/v1/projects/{id}");

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "name": "After", "wpt_api_key": "key", "is_active": false }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "After");
    assert_eq!(json["is_active"], false);

    // Omitted optional fields fall back to their defaults.
    let response = put_json_auth(app, &uri, json!({ "name": "Again" }), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["wpt_api_key"], serde_json::Value::Null);
    assert_eq!(json["is_active"], true);
}

#[tokio::test]
async fn update_missing_project_returns_404_without_creating() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(store.clone());
    let token = token_for(Uuid::new_v4());

    let response = put_json_auth(
        app,
        &format!("/api/v1/projects/{}", Uuid::new_v4()),
        json!({ "name": "Ghost" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.project_count().await, 0);
}

#[tokio::test]
async fn update_with_blank_name_keeps_stored_value() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let token = token_for(Uuid::new_v4());
    let id = create_project(app.clone(), &token, "Keep me").await;
    let uri = format!("/api/v1/projects/{id}");

    let response = put_json_auth(app.clone(), &uri, json!({ "name": "  " }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(!json["fields"].as_object().unwrap().is_empty());

    let json = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(json["name"], "Keep me");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_twice_then_404_and_pages_are_gone() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(store.clone());
    let token = token_for(Uuid::new_v4());
    let id = create_project(app.clone(), &token, "Doomed").await;
    create_page(app.clone(), &token, &id, "Home").await;
    create_page(app.clone(), &token, &id, "About").await;
    let uri = format!("/api/v1/projects/{id}");

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(store.page_count().await, 0);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

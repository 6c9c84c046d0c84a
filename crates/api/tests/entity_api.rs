//! HTTP-level integration tests for the content hierarchy endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Course CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_course_returns_201(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": "Spanish A1", "price": 29.99}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Spanish A1");
    assert_eq!(json["data"]["price"], 29.99);
    assert_eq!(json["data"]["isActive"], true);
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_course_by_id(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": "Get Me"}),
        &token,
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/courses/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_course_returns_404(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_course_partial(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": "Original", "price": 10.0}),
        &token,
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/courses/{id}"),
        serde_json::json!({"name": "Updated"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Updated");
    // Fields omitted from the PUT body keep their stored values.
    assert_eq!(json["data"]["price"], 10.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_course_returns_204(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": "Delete Me"}),
        &token,
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/courses/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/courses/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_list_is_paginated_with_counts(pool: PgPool) {
    let token = admin_token(&pool).await;
    for i in 0..3 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/courses",
            serde_json::json!({"name": format!("Course {i}")}),
            &token,
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses?page=1&limit=2", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["total"], 3);
    assert_eq!(json["pagination"]["pages"], 2);
    assert_eq!(json["data"][0]["unitCount"], 0);
}

// ---------------------------------------------------------------------------
// Hierarchy: units, topics, groups, sessions
// ---------------------------------------------------------------------------

async fn create_course(pool: &PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let resp = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": "Parent Course"}),
        token,
    )
    .await;
    body_json(resp).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_hierarchy_via_api(pool: PgPool) {
    let token = admin_token(&pool).await;
    let course_id = create_course(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let unit = body_json(
        post_json(
            app,
            "/api/v1/units",
            serde_json::json!({"courseId": course_id, "name": "Unit 1"}),
            &token,
        )
        .await,
    )
    .await;
    let unit_id = unit["data"]["id"].as_i64().unwrap();
    assert_eq!(unit["data"]["sequence"], 0);

    let app = common::build_test_app(pool.clone());
    let topic = body_json(
        post_json(
            app,
            "/api/v1/topics",
            serde_json::json!({"unitId": unit_id, "name": "Greetings"}),
            &token,
        )
        .await,
    )
    .await;
    let topic_id = topic["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let group = body_json(
        post_json(
            app,
            "/api/v1/session-groups",
            serde_json::json!({"topicId": topic_id, "name": "Basics"}),
            &token,
        )
        .await,
    )
    .await;
    let group_id = group["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let session = body_json(
        post_json(
            app,
            "/api/v1/sessions",
            serde_json::json!({
                "sessionGroupId": group_id,
                "name": "Hello",
                "sessionType": "lesson",
                "cefrLevel": "A1",
                "screens": [{
                    "sequence": 0,
                    "actions": [{
                        "type": "reading",
                        "sequence": 0,
                        "words": [{"text": "Hola"}]
                    }]
                }]
            }),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(session["data"]["cefrLevel"], "A1");
    assert_eq!(session["data"]["screens"][0]["actions"][0]["type"], "reading");
    assert_eq!(
        session["data"]["screens"][0]["actions"][0]["words"][0]["text"],
        "Hola"
    );

    // Parent-scoped listing carries child counts.
    let app = common::build_test_app(pool);
    let units = body_json(
        get(
            app,
            &format!("/api/v1/units?courseId={course_id}"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(units["data"].as_array().unwrap().len(), 1);
    assert_eq!(units["data"][0]["topicCount"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_unit_under_missing_course_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/units",
        serde_json::json!({"courseId": 424242, "name": "Orphan"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_course_name_returns_400(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": ""}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_price_returns_400(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"name": "Cheap", "price": -1.0}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_cefr_level_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let course_id = create_course(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let unit_id = body_json(
        post_json(
            app,
            "/api/v1/units",
            serde_json::json!({"courseId": course_id, "name": "U"}),
            &token,
        )
        .await,
    )
    .await["data"]["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let topic_id = body_json(
        post_json(
            app,
            "/api/v1/topics",
            serde_json::json!({"unitId": unit_id, "name": "T"}),
            &token,
        )
        .await,
    )
    .await["data"]["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let group_id = body_json(
        post_json(
            app,
            "/api/v1/session-groups",
            serde_json::json!({"topicId": topic_id, "name": "G"}),
            &token,
        )
        .await,
    )
    .await["data"]["id"]
        .as_i64()
        .unwrap();

    // "Z9" is not a CEFR level; deserialization fails before any handler runs.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/sessions",
        serde_json::json!({
            "sessionGroupId": group_id,
            "name": "Bad level",
            "cefrLevel": "Z9"
        }),
        &token,
    )
    .await;
    assert!(response.status().is_client_error());
}

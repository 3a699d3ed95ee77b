//! Behavior when the database is unreachable.
//!
//! Each test closes the pool before sending a request, so every query fails
//! with `PoolClosed`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use helloauth_core::session::format_token;
use helloauth_core::types::SessionId;
use sqlx::PgPool;

fn well_formed_token() -> String {
    format_token(SessionId::new_v4())
}

fn assert_sanitized_500(status: StatusCode, json: &serde_json::Value) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_reports_failure_in_body(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = post_json(
        app,
        "/api/v1/auth/logout",
        serde_json::json!({ "session_token": well_formed_token() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["logout_success"], false);
    assert_eq!(json["message"], "Logout failed.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validate_returns_sanitized_500(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = post_json(
        app,
        "/api/v1/auth/validate",
        serde_json::json!({ "token": well_formed_token() }),
    )
    .await;
    let status = response.status();
    assert_sanitized_500(status, &body_json(response).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_token_is_rejected_without_the_store(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = post_json(
        app,
        "/api/v1/auth/validate",
        serde_json::json!({ "token": "token-1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Invalid token format.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_command_returns_sanitized_500(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = post_json(
        app,
        "/api/v1/cli/helloworld",
        serde_json::json!({ "token": well_formed_token(), "command": "hello" }),
    )
    .await;
    let status = response.status();
    assert_sanitized_500(status, &body_json(response).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_returns_sanitized_500(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "a@x.com", "password": "pw123" }),
    )
    .await;
    let status = response.status();
    assert_sanitized_500(status, &body_json(response).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bearer_auth_returns_sanitized_500(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get_auth(app, "/api/v1/users/1", &well_formed_token()).await;
    let status = response.status();
    assert_sanitized_500(status, &body_json(response).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_degraded(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = common::get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

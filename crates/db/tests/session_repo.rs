//! Integration tests for the session and command log repositories.

use chrono::{Duration, Utc};
use helloauth_core::roles::Role;
use helloauth_core::types::SessionId;
use helloauth_db::models::cli_log::CreateCliLog;
use helloauth_db::models::session::CreateSession;
use helloauth_db::models::user::{CreateUser, User};
use helloauth_db::repositories::{CliLogRepo, SessionRepo, UserRepo};
use sqlx::PgPool;

async fn create_user(pool: &PgPool, email: &str, role: Role) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            role,
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_session_stores_given_timestamps(pool: PgPool) {
    let user = create_user(&pool, "stamp@x.com", Role::User).await;
    // Whole seconds, so the value survives Postgres' microsecond precision.
    let created_at = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let expires_at = created_at + Duration::hours(24);

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            created_at,
            expires_at: Some(expires_at),
        },
    )
    .await
    .unwrap();

    assert_eq!(session.created_at, created_at);
    assert_eq!(session.expires_at, Some(expires_at));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_session_generates_distinct_ids(pool: PgPool) {
    let user = create_user(&pool, "multi@x.com", Role::User).await;
    let input = CreateSession {
        user_id: user.id,
        created_at: Utc::now(),
        expires_at: Some(Utc::now() + Duration::hours(24)),
    };

    let first = SessionRepo::create(&pool, &input).await.unwrap();
    let second = SessionRepo::create(&pool, &input).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.user_id, user.id);
    assert_eq!(
        SessionRepo::list_for_user(&pool, user.id).await.unwrap().len(),
        2
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_session_for_missing_user_fails(pool: PgPool) {
    let result = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: 777_777,
            created_at: Utc::now(),
            expires_at: Some(Utc::now()),
        },
    )
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    // foreign_key_violation
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_with_owner_returns_role(pool: PgPool) {
    let admin = create_user(&pool, "boss@x.com", Role::Admin).await;
    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: admin.id,
            created_at: Utc::now(),
            expires_at: None,
        },
    )
    .await
    .unwrap();

    let owner = SessionRepo::find_with_owner(&pool, session.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.session_id, session.id);
    assert_eq!(owner.user_id, admin.id);
    assert_eq!(owner.role, Role::Admin);
    assert!(owner.expires_at.is_none());

    assert!(SessionRepo::find_with_owner(&pool, SessionId::new_v4())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_session_reports_whether_it_existed(pool: PgPool) {
    let user = create_user(&pool, "bye@x.com", Role::User).await;
    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            created_at: Utc::now(),
            expires_at: Some(Utc::now() + Duration::hours(1)),
        },
    )
    .await
    .unwrap();

    assert!(SessionRepo::delete(&pool, session.id).await.unwrap());
    assert!(!SessionRepo::delete(&pool, session.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_expired_keeps_live_sessions(pool: PgPool) {
    let user = create_user(&pool, "reap@x.com", Role::User).await;
    let now = Utc::now();

    let live = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            created_at: Utc::now(),
            expires_at: Some(now + Duration::hours(1)),
        },
    )
    .await
    .unwrap();
    for expires_at in [Some(now - Duration::hours(1)), Some(now), None] {
        SessionRepo::create(
            &pool,
            &CreateSession {
                user_id: user.id,
                created_at: Utc::now(),
                expires_at,
            },
        )
        .await
        .unwrap();
    }

    let deleted = SessionRepo::delete_expired(&pool, now).await.unwrap();
    assert_eq!(deleted, 3);

    let remaining = SessionRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, live.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cli_log_appends_in_order(pool: PgPool) {
    let user = create_user(&pool, "cli@x.com", Role::User).await;
    let start = Utc::now();

    for (offset, command) in ["hello", "xyz"].into_iter().enumerate() {
        CliLogRepo::create(
            &pool,
            &CreateCliLog {
                user_id: user.id,
                command: command.to_string(),
                executed_at: start + Duration::seconds(offset as i64),
            },
        )
        .await
        .unwrap();
    }

    let logs = CliLogRepo::list_for_user(&pool, user.id).await.unwrap();
    let commands: Vec<_> = logs.iter().map(|l| l.command.as_str()).collect();
    assert_eq!(commands, ["hello", "xyz"]);
    assert_eq!(CliLogRepo::count_for_user(&pool, user.id).await.unwrap(), 2);
}

//! Public greeting.

use axum::Json;
use helloauth_core::commands::HELLO_RESPONSE;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HelloWorldResponse {
    pub message: &'static str,
}

/// GET /api/v1/hello-world
pub async fn get_hello_world() -> Json<HelloWorldResponse> {
    Json(HelloWorldResponse {
        message: HELLO_RESPONSE,
    })
}

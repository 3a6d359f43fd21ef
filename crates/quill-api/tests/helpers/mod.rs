//! Test helpers para quill-api.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod client;

pub use assertions::*;
pub use client::{TestClient, TestResponse};

use quill_api::AppState;
use quill_api::auth::TokenService;
use quill_cache::CacheConfig;
use quill_store::MemoryBackend;

/// Secret compartido por los tests; los tokens forjados a mano deben
/// firmarse con este mismo valor.
pub const TEST_JWT_SECRET: &str = "quill-test-secret";

/// Crea un TestClient con estado fresco (store y cache vacios).
pub fn client() -> TestClient {
    let state = AppState::from_memory_backend(
        MemoryBackend::new(),
        &CacheConfig::default(),
        TokenService::new(TEST_JWT_SECRET, 3600),
    );

    TestClient::new(quill_api::create_router_with_state(state))
}

/// Registra un usuario y retorna su token.
pub async fn register(client: &TestClient, name: &str, email: &str) -> String {
    let response = client
        .post_json(
            "/register",
            serde_json::json!({
                "name": name,
                "email": email,
                "password": "password123",
            }),
        )
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["token"]
        .as_str()
        .expect("register response should carry a token")
        .to_string()
}

/// Crea un post y retorna su id.
pub async fn create_post(client: &TestClient, token: &str, title: &str, content: &str) -> i64 {
    let response = client
        .post_json_auth(
            "/posts",
            serde_json::json!({ "title": title, "content": content }),
            token,
        )
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["data"]["id"]
        .as_i64()
        .expect("create response should carry the post id")
}

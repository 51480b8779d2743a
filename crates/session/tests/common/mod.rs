//! Shared fixtures for session tests

#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jobboard_core::{AppConfig, MemoryStorage};
use jobboard_session::AuthSessionManager;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Unsigned token whose payload is `claims`
pub fn token_with_claims(claims: &Value) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.{}.c2lnbmF0dXJl",
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

pub fn token_with_role(role: &str) -> String {
    token_with_claims(&json!({"token_type": "access", "user_id": 7, "role": role}))
}

pub fn manager(server: &MockServer, storage: MemoryStorage) -> AuthSessionManager<MemoryStorage> {
    let config = AppConfig::new(server.uri()).unwrap();
    AuthSessionManager::new(&config, storage).unwrap()
}

pub async fn mount_token(server: &MockServer, access: &str, refresh: &str) {
    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": access, "refresh": refresh})),
        )
        .mount(server)
        .await;
}

pub async fn mount_profile(server: &MockServer, id: u64, email: &str, role: &str) {
    Mock::given(method("GET"))
        .and(path("/accounts/me/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": id, "email": email, "role": role})),
        )
        .mount(server)
        .await;
}

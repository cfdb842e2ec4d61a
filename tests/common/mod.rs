//! Shared fixtures for the router integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use admin_session::{
    AppState,
    cache::AdminSession,
    config::{Config, OAuthConfig},
    router::create_router,
    session::{MemorySessionStore, SessionStore, SessionStoreError},
};
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Cookie header for the session seeded as `abc123`.
pub const SEEDED_COOKIE: &str = "admin_session=abc123";

pub fn test_config(is_production: bool) -> Config {
    Config {
        server_host: "127.0.0.1".into(),
        server_port: 0,
        is_production,
        redis_url: None,
        session_ttl_secs: 3600,
        admin_password_hash: bcrypt::hash(ADMIN_PASSWORD, 4).unwrap(),
        oauth: OAuthConfig {
            authorize_url: "https://idp.example.com/oauth/authorize".parse().unwrap(),
            client_id: "admin-dashboard".into(),
            callback_base_url: "https://admin.example.com".parse().unwrap(),
            scopes: vec!["openid".into(), "profile".into()],
        },
    }
}

pub fn app_with(store: Arc<dyn SessionStore>, is_production: bool) -> Router {
    app_with_config(store, test_config(is_production))
}

pub fn app_with_config(store: Arc<dyn SessionStore>, config: Config) -> Router {
    create_router(AppState {
        config,
        sessions: store,
    })
}

pub async fn seed_session(store: &MemorySessionStore, token: &str) {
    store.create(token, &AdminSession::new(3600)).await.unwrap();
}

pub fn post(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Store whose backend is always unreachable.
pub struct UnreachableStore;

#[async_trait]
impl SessionStore for UnreachableStore {
    async fn create(&self, _: &str, _: &AdminSession) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Backend("connection refused".into()))
    }

    async fn get(&self, _: &str) -> Result<Option<AdminSession>, SessionStoreError> {
        Err(SessionStoreError::Backend("connection refused".into()))
    }

    async fn set_oauth_state(&self, _: &str, _: &str) -> Result<bool, SessionStoreError> {
        Err(SessionStoreError::Backend("connection refused".into()))
    }

    async fn remove(&self, _: &str) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Backend("connection refused".into()))
    }
}

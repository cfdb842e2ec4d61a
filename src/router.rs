use axum::{
    Json, Router,
    routing::{get, post},
};

use crate::{AppState, middleware::log_errors, routes};

/// Admin session routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(routes::admin::login))
        .route("/api/admin/logout", post(routes::admin::logout))
        .route("/api/admin/session", get(routes::admin::session_status))
}

/// OAuth login routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/api/auth/login", post(routes::auth::login))
}

// Main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({ "status": "ok" })) }),
        )
        .merge(admin_routes())
        .merge(auth_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}

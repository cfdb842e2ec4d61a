use axum::extract::{Json, State};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    AppState,
    error::AppError,
    oauth::issue_oauth_state,
    session::{SessionValidation, validate_session},
};

use super::model::LoginResponse;

/// Starts the OAuth flow for a logged-in admin: binds a fresh CSRF state to
/// the session and returns the provider authorization URL.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<LoginResponse>, AppError> {
    let validation = validate_session(&state.sessions, &jar)
        .await
        .map_err(|e| AppError::internal("Login initiation", e))?;

    let SessionValidation::Valid(mut handle) = validation else {
        return Err(AppError::Unauthorized("Admin session required"));
    };

    let login = issue_oauth_state(&mut handle, &state.config.oauth)
        .await
        .map_err(|e| AppError::internal("Login initiation", e))?;

    Ok(Json(login.into()))
}

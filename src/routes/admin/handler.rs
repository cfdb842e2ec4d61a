use axum::extract::{Json, State};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    AppState,
    error::AppError,
    session::{
        SessionValidation, authenticate_admin, clear_session_cookie, session_cookie,
        session_token, terminate_session, validate_session,
    },
};

use super::model::{AdminLoginRequest, SessionStatusResponse, SuccessResponse};

/// Checks the admin password and sets the session cookie.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<AdminLoginRequest>,
) -> Result<(CookieJar, Json<SuccessResponse>), AppError> {
    let token = authenticate_admin(
        &state.sessions,
        &state.config.admin_password_hash,
        &req.password,
        state.config.session_ttl_secs,
    )
    .await
    .map_err(|e| AppError::internal("Admin login", e))?
    .ok_or(AppError::Unauthorized("Invalid password"))?;

    let cookie = session_cookie(
        &token,
        state.config.session_ttl_secs,
        state.config.is_production,
    );

    Ok((jar.add(cookie), Json(SuccessResponse { success: true })))
}

/// Ends the current session. Succeeds whether or not a session existed; the
/// cookie is always cleared.
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<SuccessResponse>), AppError> {
    let token = session_token(&jar);

    terminate_session(&state.sessions, token.as_deref())
        .await
        .map_err(|e| AppError::internal("Logout", e))?;

    let jar = jar.add(clear_session_cookie(state.config.is_production));

    Ok((jar, Json(SuccessResponse { success: true })))
}

#[axum::debug_handler]
pub async fn session_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<SessionStatusResponse>, AppError> {
    match validate_session(&state.sessions, &jar)
        .await
        .map_err(|e| AppError::internal("Session check", e))?
    {
        SessionValidation::Valid(handle) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            expires_at: handle.session().expires_at,
        })),
        SessionValidation::Invalid => Err(AppError::Unauthorized("Admin session required")),
    }
}

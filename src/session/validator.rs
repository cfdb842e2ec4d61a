use std::sync::Arc;

use axum_extra::extract::cookie::CookieJar;

use crate::cache::keys::session_fingerprint;
use crate::cache::AdminSession;

use super::cookie::session_token;
use super::{SessionStore, SessionStoreError};

/// Outcome of checking the request's session cookie.
pub enum SessionValidation {
    Valid(SessionHandle),
    Invalid,
}

impl SessionValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionValidation::Valid(_))
    }
}

/// A live admin session looked up for the current request.
pub struct SessionHandle {
    token: String,
    session: AdminSession,
    store: Arc<dyn SessionStore>,
}

impl SessionHandle {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    /// Binds a CSRF state to this session, replacing any earlier one.
    pub async fn set_state(&mut self, value: &str) -> Result<(), SessionStoreError> {
        if !self.store.set_oauth_state(&self.token, value).await? {
            return Err(SessionStoreError::NotFound);
        }
        self.session.oauth_state = Some(value.to_string());
        Ok(())
    }
}

/// Resolves the session cookie against the store. Absence is not an error;
/// only a failing store is.
pub async fn validate_session(
    store: &Arc<dyn SessionStore>,
    jar: &CookieJar,
) -> Result<SessionValidation, SessionStoreError> {
    let Some(token) = session_token(jar) else {
        return Ok(SessionValidation::Invalid);
    };

    match store.get(&token).await? {
        Some(session) => Ok(SessionValidation::Valid(SessionHandle {
            token,
            session,
            store: Arc::clone(store),
        })),
        None => {
            tracing::debug!(
                "No live session for cookie {}",
                session_fingerprint(&token)
            );
            Ok(SessionValidation::Invalid)
        }
    }
}

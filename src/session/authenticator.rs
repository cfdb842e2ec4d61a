use std::sync::Arc;

use crate::cache::AdminSession;
use crate::cache::keys::session_fingerprint;
use crate::utils::{generate_session_token, verify_password};

use super::{SessionStore, SessionStoreError};

#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("admin password hash is unusable: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("password verification task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Checks the admin password and opens a session on success.
///
/// Returns the new session token, or `None` when the password is wrong.
pub async fn authenticate_admin(
    store: &Arc<dyn SessionStore>,
    password_hash: &str,
    password: &str,
    ttl_secs: u64,
) -> Result<Option<String>, AuthenticationError> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();
    // bcrypt blocks; run it off the async workers
    let matches =
        tokio::task::spawn_blocking(move || verify_password(&password, &password_hash)).await??;

    if !matches {
        tracing::warn!("Rejected admin login attempt");
        return Ok(None);
    }

    let token = generate_session_token();
    store.create(&token, &AdminSession::new(ttl_secs)).await?;
    tracing::info!("Admin session {} created", session_fingerprint(&token));

    Ok(Some(token))
}

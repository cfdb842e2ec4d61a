use async_trait::async_trait;

use crate::cache::AdminSession;

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session no longer exists")]
    NotFound,
    #[error("session backend error: {0}")]
    Backend(String),
    #[error("session record is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<redis::RedisError> for SessionStoreError {
    fn from(e: redis::RedisError) -> Self {
        SessionStoreError::Backend(e.to_string())
    }
}

/// Persistence for admin sessions, keyed by the opaque cookie token.
///
/// Implementations must treat `remove` of an unknown token as success and
/// must not return expired sessions from `get`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, token: &str, session: &AdminSession) -> Result<(), SessionStoreError>;

    async fn get(&self, token: &str) -> Result<Option<AdminSession>, SessionStoreError>;

    /// Overwrites the CSRF state on an existing session, keeping its expiry.
    /// Returns `false` when no such session exists.
    async fn set_oauth_state(&self, token: &str, state: &str) -> Result<bool, SessionStoreError>;

    async fn remove(&self, token: &str) -> Result<(), SessionStoreError>;
}

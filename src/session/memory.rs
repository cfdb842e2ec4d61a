use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::keys::session_key;
use crate::cache::AdminSession;

use super::{SessionStore, SessionStoreError};

/// Process-local session store. Sessions do not survive a restart.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, AdminSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops every expired record and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = chrono::Utc::now().timestamp();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.is_live(now));
        before - sessions.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, token: &str, session: &AdminSession) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .insert(session_key(token), session.clone());
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<AdminSession>, SessionStoreError> {
        let now = chrono::Utc::now().timestamp();
        Ok(self
            .sessions
            .read()
            .await
            .get(&session_key(token))
            .filter(|s| s.is_live(now))
            .cloned())
    }

    async fn set_oauth_state(&self, token: &str, state: &str) -> Result<bool, SessionStoreError> {
        let now = chrono::Utc::now().timestamp();
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session_key(token)) {
            Some(session) if session.is_live(now) => {
                session.oauth_state = Some(state.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn remove(&self, token: &str) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&session_key(token));
        Ok(())
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient, ExistenceCheck, SetExpiry, SetOptions};

use crate::cache::keys::session_key;
use crate::cache::models::session::AdminSession;
use crate::session::{SessionStore, SessionStoreError};

/// Redis-backed session store
#[derive(Clone)]
pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
}

impl RedisSessionStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    async fn read(&self, token: &str) -> Result<Option<AdminSession>, SessionStoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(session_key(token)).await?;

        match result {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Replaces an existing record without touching its TTL. Returns `false`
    /// when the key is gone, in which case nothing is written.
    async fn overwrite_existing(
        &self,
        token: &str,
        session: &AdminSession,
    ) -> Result<bool, SessionStoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let json = serde_json::to_string(session)?;
        let options = SetOptions::default()
            .conditional_set(ExistenceCheck::XX)
            .with_expiration(SetExpiry::KEEPTTL);
        let reply: redis::Value = conn.set_options(session_key(token), json, options).await?;

        Ok(!matches!(reply, redis::Value::Nil))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, token: &str, session: &AdminSession) -> Result<(), SessionStoreError> {
        let ttl = session.remaining_ttl(chrono::Utc::now().timestamp());
        if ttl == 0 {
            return Ok(());
        }

        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let json = serde_json::to_string(session)?;
        let _: () = conn.set_ex(session_key(token), json, ttl).await?;

        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<AdminSession>, SessionStoreError> {
        let now = chrono::Utc::now().timestamp();
        Ok(self.read(token).await?.filter(|s| s.is_live(now)))
    }

    async fn set_oauth_state(&self, token: &str, state: &str) -> Result<bool, SessionStoreError> {
        let now = chrono::Utc::now().timestamp();

        match self.read(token).await? {
            Some(mut session) if session.is_live(now) => {
                session.oauth_state = Some(state.to_string());
                // XX: a logout between the read and this write must win
                self.overwrite_existing(token, &session).await
            }
            _ => Ok(false),
        }
    }

    async fn remove(&self, token: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn.del(session_key(token)).await?;

        Ok(())
    }
}

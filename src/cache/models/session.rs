use serde::{Deserialize, Serialize};

/// Admin session record as stored in the cache
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub created_at: i64, // Unix timestamp
    pub expires_at: i64, // Unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_state: Option<String>,
}

impl AdminSession {
    /// New session starting now and living for `ttl_secs`.
    pub fn new(ttl_secs: u64) -> Self {
        let now = chrono::Utc::now().timestamp();
        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            created_at: now,
            expires_at: now.saturating_add(ttl),
            oauth_state: None,
        }
    }

    pub fn is_live(&self, now: i64) -> bool {
        now < self.expires_at
    }

    /// Seconds left before expiry, zero once expired.
    pub fn remaining_ttl(&self, now: i64) -> u64 {
        self.expires_at.saturating_sub(now).max(0) as u64
    }
}

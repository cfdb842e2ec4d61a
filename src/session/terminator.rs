use std::sync::Arc;

use crate::cache::keys::session_fingerprint;

use super::{SessionStore, SessionStoreError};

/// Deletes the session behind `token`, if any. Unknown and absent tokens
/// succeed; only a failing store is reported.
pub async fn terminate_session(
    store: &Arc<dyn SessionStore>,
    token: Option<&str>,
) -> Result<(), SessionStoreError> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Ok(());
    };

    store.remove(token).await?;
    tracing::info!("Admin session {} terminated", session_fingerprint(token));

    Ok(())
}

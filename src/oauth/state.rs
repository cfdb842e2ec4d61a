//! CSRF state issuance for the OAuth authorization-code flow.
//!
//! The issuer only generates and binds the state; matching it against the
//! provider callback happens elsewhere.

use url::Url;

use crate::config::OAuthConfig;
use crate::session::{SessionHandle, SessionStoreError};
use crate::utils::generate_oauth_state;

#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("failed to bind state to session: {0}")]
    Store(#[from] SessionStoreError),
}

/// Provider authorization URL plus the state embedded in it.
#[derive(Debug, Clone)]
pub struct OAuthLogin {
    pub auth_url: String,
    pub state: String,
}

/// Generates a fresh state, stores it on the session (replacing any earlier
/// state) and builds the provider authorization URL.
pub async fn issue_oauth_state(
    handle: &mut SessionHandle,
    config: &OAuthConfig,
) -> Result<OAuthLogin, OAuthError> {
    let state = generate_oauth_state();
    handle.set_state(&state).await?;

    let redirect_uri = config.redirect_uri();
    let auth_url = authorization_url(config, &redirect_uri, &state);

    Ok(OAuthLogin { auth_url, state })
}

fn authorization_url(config: &OAuthConfig, redirect_uri: &Url, state: &str) -> String {
    let scope = config.scopes.join(" ");

    let mut url = config.authorize_url.clone();
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", redirect_uri.as_str())
        .append_pair("state", state)
        .append_pair("scope", &scope);

    url.into()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_extra::extract::cookie::{Cookie, CookieJar};

    use super::*;
    use crate::cache::AdminSession;
    use crate::session::{
        MemorySessionStore, SESSION_COOKIE, SessionStore, SessionValidation, validate_session,
    };

    fn test_config() -> OAuthConfig {
        OAuthConfig {
            authorize_url: "https://idp.example.com/oauth/authorize".parse().unwrap(),
            client_id: "dashboard".into(),
            callback_base_url: "https://admin.example.com".parse().unwrap(),
            scopes: vec!["openid".into(), "email".into()],
        }
    }

    async fn handle_for(memory: &Arc<MemorySessionStore>, token: &str) -> SessionHandle {
        memory.create(token, &AdminSession::new(3600)).await.unwrap();
        let store: Arc<dyn SessionStore> = memory.clone();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, token.to_string()));
        match validate_session(&store, &jar).await.unwrap() {
            SessionValidation::Valid(handle) => handle,
            SessionValidation::Invalid => panic!("session should be valid"),
        }
    }

    #[test]
    fn authorization_url_carries_flow_parameters() {
        let config = test_config();
        let redirect = config.redirect_uri();
        let url = authorization_url(&config, &redirect, "abc");

        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(parsed.path(), "/oauth/authorize");
        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(pairs.contains(&("client_id".into(), "dashboard".into())));
        assert!(pairs.contains(&(
            "redirect_uri".into(),
            "https://admin.example.com/api/auth/callback".into()
        )));
        assert!(pairs.contains(&("state".into(), "abc".into())));
        assert!(pairs.contains(&("scope".into(), "openid email".into())));
    }

    #[tokio::test]
    async fn issued_state_is_bound_to_session() {
        let memory = Arc::new(MemorySessionStore::new());
        let mut handle = handle_for(&memory, "abc123").await;

        let login = issue_oauth_state(&mut handle, &test_config()).await.unwrap();

        assert!(!login.state.is_empty());
        assert!(login.auth_url.contains(&format!("state={}", login.state)));
        let stored = memory.get("abc123").await.unwrap().unwrap();
        assert_eq!(stored.oauth_state, Some(login.state));
    }

    #[tokio::test]
    async fn latest_state_wins() {
        let memory = Arc::new(MemorySessionStore::new());
        let mut handle = handle_for(&memory, "abc123").await;
        let config = test_config();

        let first = issue_oauth_state(&mut handle, &config).await.unwrap();
        let second = issue_oauth_state(&mut handle, &config).await.unwrap();

        assert_ne!(first.state, second.state);
        let stored = memory.get("abc123").await.unwrap().unwrap();
        assert_eq!(stored.oauth_state, Some(second.state));
    }
}

use std::env;
use std::time::Duration;

use url::Url;

/// Path the OAuth provider redirects back to after authorization.
pub const OAUTH_CALLBACK_PATH: &str = "/api/auth/callback";

const DEFAULT_SCOPES: &str = "openid,profile,email";
const DEFAULT_SESSION_TTL_HOURS: u64 = 8;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid URL in {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{0} must be an absolute http(s) URL")]
    NotABaseUrl(&'static str),
    #[error("{name} is out of range: {value}")]
    OutOfRange { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub authorize_url: Url,
    pub client_id: String,
    pub callback_base_url: Url,
    pub scopes: Vec<String>,
}

impl OAuthConfig {
    /// Redirect URI sent to the provider: the callback path appended to the
    /// base URL's own path.
    pub fn redirect_uri(&self) -> Url {
        let mut url = self.callback_base_url.clone();
        let path = format!(
            "{}{}",
            url.path().trim_end_matches('/'),
            OAUTH_CALLBACK_PATH
        );
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub is_production: bool,
    pub redis_url: Option<String>,
    pub session_ttl_secs: u64,
    pub admin_password_hash: String,
    pub oauth: OAuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "::".into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            is_production: env::var("APP_ENV")
                .map(|v| is_production_env(&v))
                .unwrap_or(false),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            session_ttl_secs: session_ttl_secs(env::var("SESSION_TTL").ok().as_deref())?,
            admin_password_hash: required("ADMIN_PASSWORD_HASH")?,
            oauth: OAuthConfig {
                authorize_url: required_url("OAUTH_AUTHORIZE_URL")?,
                client_id: required("OAUTH_CLIENT_ID")?,
                callback_base_url: required_base_url("OAUTH_CALLBACK_BASE_URL")?,
                scopes: parse_scopes(
                    &env::var("OAUTH_SCOPES").unwrap_or_else(|_| DEFAULT_SCOPES.into()),
                ),
            },
        })
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn required_url(name: &'static str) -> Result<Url, ConfigError> {
    required(name)?
        .parse()
        .map_err(|source| ConfigError::InvalidUrl { name, source })
}

fn required_base_url(name: &'static str) -> Result<Url, ConfigError> {
    let url = required_url(name)?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABaseUrl(name));
    }
    Ok(url)
}

/// Session lifetime in seconds from `SESSION_TTL` hours. Unset or unparsable
/// values fall back to the default; values that overflow are rejected.
fn session_ttl_secs(value: Option<&str>) -> Result<u64, ConfigError> {
    let hours = value
        .and_then(parse_hours)
        .unwrap_or(DEFAULT_SESSION_TTL_HOURS);

    hours
        .checked_mul(3600)
        .filter(|secs| i64::try_from(*secs).is_ok())
        .ok_or_else(|| ConfigError::OutOfRange {
            name: "SESSION_TTL",
            value: value.unwrap_or_default().to_string(),
        })
}

fn parse_hours(value: &str) -> Option<u64> {
    value.trim().trim_end_matches('h').parse().ok()
}

fn is_production_env(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("production")
}

fn parse_scopes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

use bcrypt::verify;
use rand::Rng;
use rand::distr::Alphanumeric;

const SESSION_TOKEN_LEN: usize = 64;

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

/// Cryptographically random session token, safe for use as a cookie value.
pub fn generate_session_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// One-time OAuth CSRF state.
pub fn generate_oauth_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

use sha2::{Digest, Sha256};

/// Key prefix for admin sessions
const ADMIN_SESSION_PREFIX: &str = "admin_session:";

/// Store key for a session token. The raw token never appears in the store.
pub fn session_key(token: &str) -> String {
    format!("{}{:x}", ADMIN_SESSION_PREFIX, Sha256::digest(token.as_bytes()))
}

/// Short, log-safe identifier for a session token.
pub fn session_fingerprint(token: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(token.as_bytes()));
    digest[..12].to_string()
}

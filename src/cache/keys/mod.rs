/// Cache key helpers
pub mod session_keys;

pub use session_keys::{session_fingerprint, session_key};

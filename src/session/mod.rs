//! Admin session lifecycle: creation, validation and termination.

pub mod authenticator;
pub mod cookie;
pub mod memory;
pub mod store;
pub mod terminator;
pub mod validator;

pub use authenticator::{AuthenticationError, authenticate_admin};
pub use cookie::{SESSION_COOKIE, clear_session_cookie, session_cookie, session_token};
pub use memory::MemorySessionStore;
pub use store::{SessionStore, SessionStoreError};
pub use terminator::terminate_session;
pub use validator::{SessionHandle, SessionValidation, validate_session};

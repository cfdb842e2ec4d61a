pub mod state;

pub use state::{OAuthError, OAuthLogin, issue_oauth_state};

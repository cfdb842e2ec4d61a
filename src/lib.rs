use std::sync::Arc;

use config::Config;
use session::SessionStore;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod oauth;
pub mod router;
pub mod routes;
pub mod session;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<dyn SessionStore>,
}

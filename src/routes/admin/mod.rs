mod handler;
mod model;

pub use handler::{login, logout, session_status};
pub use model::{AdminLoginRequest, SessionStatusResponse, SuccessResponse};

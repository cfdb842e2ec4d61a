// Redis-backed persistence for admin sessions

pub mod keys;
pub mod models;
pub mod operations;

pub use models::session::AdminSession;
pub use operations::session::RedisSessionStore;

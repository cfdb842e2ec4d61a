use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::error;

/// Logs the request line of every 5xx response. The cause is logged where the
/// error is turned into a response; the body is passed through untouched.
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    if response.status().is_server_error() {
        error!("{} {} -> {}", method, path, response.status());
    }

    response
}

//! Middleware for the diagnostics server

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

/// Structured access log: one line per request recording method, path, and
/// the resulting status.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    debug!(
        "Http Server: {} {} -> {}",
        method,
        path,
        response.status().as_u16()
    );
    response
}

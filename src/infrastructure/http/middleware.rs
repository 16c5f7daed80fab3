//! HTTP Middleware
//!
//! Logs failed responses with their method and path. Provider failures are
//! additionally logged with their cause in the error mapping; this layer
//! catches everything else (404s, rejected bodies).

use axum::{extract::Request, middleware::Next, response::Response};

/// Log 4xx/5xx responses.
pub async fn log_failed_responses(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(%method, path, status = status.as_u16(), "Request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, path, status = status.as_u16(), "Request rejected");
    }

    response
}

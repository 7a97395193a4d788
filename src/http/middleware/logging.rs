//! Request logging stage.
//!
//! Logs method and path, then buffers the whole body so it can be logged and
//! handed on unchanged. A body that fails to read is logged and forwarded as
//! empty, with its `Content-Length` dropped to match; the request itself never
//! fails here.

use axum::{
    body::{Body, Bytes},
    http::{header, Request},
    middleware::Next,
    response::Response,
};

pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();

    tracing::info!(method = %parts.method, path = %parts.uri.path(), "Incoming request");

    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read request body");
            parts.headers.remove(header::CONTENT_LENGTH);
            Bytes::new()
        }
    };

    tracing::info!(body = %String::from_utf8_lossy(&bytes), "Request body");

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

//! Responses generated by the proxy itself.
//!
//! Everything else is relayed from the upstream unchanged apart from
//! hop-by-hop stripping and, when enabled, CORS headers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Returned when the upstream exchange fails at the network level.
pub fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
}

/// Empty answer to an absorbed CORS preflight.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_error_is_5xx() {
        let response = bad_gateway();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.status().is_server_error());
    }

    #[test]
    fn no_content_status() {
        assert_eq!(no_content().status(), StatusCode::NO_CONTENT);
    }
}

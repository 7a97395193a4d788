//! Header manipulation.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers in both directions
//! - Record the client IP in `X-Forwarded-For`
//! - Apply the permissive CORS header set
//!
//! # Design Decisions
//! - Header names and values are static, so no runtime parsing can fail
//! - CORS values overwrite any the upstream sent rather than duplicating them

use axum::http::header::{
    HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONNECTION, PROXY_AUTHENTICATE,
    PROXY_AUTHORIZATION, TE, TRAILER, TRANSFER_ENCODING, UPGRADE,
};

pub static X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

static KEEP_ALIVE: HeaderName = HeaderName::from_static("keep-alive");
static PROXY_CONNECTION: HeaderName = HeaderName::from_static("proxy-connection");

pub static CORS_ALLOW_ORIGIN: HeaderValue = HeaderValue::from_static("*");
pub static CORS_ALLOW_METHODS: HeaderValue =
    HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS");
pub static CORS_ALLOW_HEADERS: HeaderValue =
    HeaderValue::from_static("Content-Type, Authorization");

/// Headers that are only meaningful for a single connection.
fn hop_by_hop_headers() -> [HeaderName; 9] {
    [
        CONNECTION,
        KEEP_ALIVE.clone(),
        PROXY_CONNECTION.clone(),
        PROXY_AUTHENTICATE,
        PROXY_AUTHORIZATION,
        TE,
        TRAILER,
        TRANSFER_ENCODING,
        UPGRADE,
    ]
}

/// Remove hop-by-hop headers, including any named in `Connection`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|token| HeaderName::from_bytes(token.trim().as_bytes()).ok())
        .collect();

    for name in listed {
        headers.remove(name);
    }
    for name in hop_by_hop_headers() {
        headers.remove(name);
    }
}

/// Set the three CORS headers.
pub fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS.clone());
}

/// Set `X-Forwarded-For` to `client_ip`, or drop it when the IP is unknown.
pub fn set_forwarded_for(headers: &mut HeaderMap, client_ip: Option<&str>) {
    match client_ip.and_then(|ip| HeaderValue::from_str(ip).ok()) {
        Some(value) => {
            headers.insert(X_FORWARDED_FOR.clone(), value);
        }
        None => {
            headers.remove(&X_FORWARDED_FOR);
        }
    }
}

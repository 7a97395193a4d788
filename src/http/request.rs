//! Request rewriting before forwarding.
//!
//! # Responsibilities
//! - Point the request URI at the upstream (scheme + authority)
//! - Set `Host` to the upstream authority
//! - Record the client IP in `X-Forwarded-For`
//! - Strip hop-by-hop headers
//!
//! # Design Decisions
//! - Path and query are never touched
//! - An unparseable remote address omits `X-Forwarded-For`; the request is
//!   still forwarded

use axum::body::Body;
use axum::http::{header, uri::PathAndQuery, HeaderValue, Request, Uri, Version};

use crate::config::TargetUrl;
use crate::http::headers::{set_forwarded_for, strip_hop_by_hop};

/// Host component of a `host:port` or `[ipv6]:port` address.
///
/// Returns `None` when the address has no port, unbalanced brackets, or an
/// unbracketed IPv6 literal.
pub fn split_host_port(addr: &str) -> Option<&str> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, after) = rest.split_once(']')?;
        let port = after.strip_prefix(':')?;
        if host.contains('[') || port.contains(':') || port.contains(']') {
            return None;
        }
        return Some(host);
    }

    let (host, port) = addr.rsplit_once(':')?;
    if host.contains(':') || host.contains('[') || host.contains(']') || port.contains(']') {
        return None;
    }
    Some(host)
}

/// Rewrite `request` in place so it targets `target`.
///
/// `remote_addr` is the peer address of the inbound connection as text.
pub fn rewrite_request(request: &mut Request<Body>, target: &TargetUrl, remote_addr: Option<&str>) {
    let path_and_query = request
        .uri()
        .path_and_query()
        .cloned()
        .unwrap_or_else(|| PathAndQuery::from_static("/"));

    let mut parts = request.uri().clone().into_parts();
    parts.scheme = Some(target.scheme().clone());
    parts.authority = Some(target.authority().clone());
    parts.path_and_query = Some(path_and_query);

    // scheme, authority and path are all set, so this cannot fail
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
    *request.version_mut() = Version::HTTP_11;

    let headers = request.headers_mut();
    strip_hop_by_hop(headers);

    if let Ok(host) = HeaderValue::from_str(target.authority().as_str()) {
        headers.insert(header::HOST, host);
    }

    let client_ip = remote_addr.and_then(split_host_port);
    if client_ip.is_none() {
        tracing::debug!(
            remote_addr = ?remote_addr,
            "Unparseable remote address, omitting X-Forwarded-For"
        );
    }
    set_forwarded_for(headers, client_ip);
}

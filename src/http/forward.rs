//! Forwarding engine.
//!
//! Sends the rewritten request to the upstream and relays the answer.
//! Any client-level failure (refused connection, DNS, TLS, reset) becomes a
//! `502 Bad Gateway`; there is no retry.

use axum::body::Body;
use axum::http::{Request, Response};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::config::TargetUrl;
use crate::http::headers::strip_hop_by_hop;
use crate::http::request::rewrite_request;
use crate::http::response::bad_gateway;

/// Pooled HTTP/HTTPS client used for every upstream exchange.
pub type UpstreamClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Build the upstream client. Plain and TLS targets share one connector.
pub fn build_client() -> UpstreamClient {
    let mut http = HttpConnector::new();
    http.enforce_http(false);

    let https = HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .wrap_connector(http);

    Client::builder(TokioExecutor::new()).build(https)
}

/// Forwards requests to the single configured upstream.
#[derive(Clone)]
pub struct Forwarder {
    client: UpstreamClient,
    target: TargetUrl,
}

impl Forwarder {
    pub fn new(client: UpstreamClient, target: TargetUrl) -> Self {
        Self { client, target }
    }

    /// Rewrite, send and relay one request.
    pub async fn forward(
        &self,
        mut request: Request<Body>,
        remote_addr: Option<&str>,
    ) -> Response<Body> {
        let method = request.method().clone();
        let path = request.uri().path().to_string();

        rewrite_request(&mut request, &self.target, remote_addr);

        match self.client.request(request).await {
            Ok(response) => {
                let (mut parts, body) = response.into_parts();
                strip_hop_by_hop(&mut parts.headers);

                tracing::debug!(
                    method = %method,
                    path = %path,
                    status = parts.status.as_u16(),
                    "Upstream responded"
                );

                Response::from_parts(parts, Body::new(body))
            }
            Err(e) => {
                tracing::error!(
                    method = %method,
                    path = %path,
                    target = %self.target,
                    error = %e,
                    "Upstream request failed"
                );
                bad_gateway()
            }
        }
    }
}

impl std::fmt::Debug for Forwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forwarder").field("target", &self.target).finish()
    }
}

//! CORS stage.
//! Absorbs preflight requests and decorates every other response.

use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};

use crate::http::headers::apply_cors;
use crate::http::response::no_content;

pub async fn cors(request: Request<Body>, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        tracing::debug!(path = %request.uri().path(), "Answering CORS preflight");
        let mut response = no_content();
        apply_cors(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors(response.headers_mut());
    response
}

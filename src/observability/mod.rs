//! Observability subsystem.
//!
//! Structured logging through `tracing`; request spans come from
//! `tower_http::trace::TraceLayer` in the HTTP server.

pub mod logging;

//! Request stages wrapped around the forwarding handler.
//!
//! Order, outermost first:
//! ```text
//! TraceLayer → cors (only with --withCors) → logging → forward
//! ```
//! A stage either short-circuits with its own response (CORS preflight) or
//! hands the request on via `Next`.

pub mod cors;
pub mod logging;

pub use cors::cors;
pub use logging::log_request;

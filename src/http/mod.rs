//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request stages)
//!     → middleware/ (CORS preflight, request logging)
//!     → request.rs (rewrite URI, Host, X-Forwarded-For)
//!     → forward.rs (upstream exchange)
//!     → response.rs / relayed upstream response
//!     → Send to client
//! ```

pub mod forward;
pub mod headers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use forward::Forwarder;
pub use server::HttpServer;

//! Single-host HTTP reverse proxy library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::{ProxyConfig, TargetUrl};
pub use http::HttpServer;
pub use lifecycle::Shutdown;

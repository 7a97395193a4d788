//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line
//!     → cli.rs (parse flags)
//!     → schema.rs (ProxyConfig, typed protocol)
//!     → validation.rs (resolve TargetUrl)
//!     → ProxyConfig + TargetUrl (validated, immutable)
//!     → passed explicitly into the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; there is no reload path
//! - Every field except the target host has a default
//! - Any configuration error is fatal before a listener is bound

pub mod cli;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::{default_port, ProxyConfig, TargetProtocol};
pub use validation::{resolve_target, ConfigError, TargetUrl};

//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! sourceAddr:sourcePort
//!     → listener.rs (resolve + bind)
//!     → Hand off to HTTP layer (one task per connection)
//! ```
//!
//! # Design Decisions
//! - No admission control; the OS accept backlog is the only backpressure
//! - A bind failure is fatal

pub mod listener;

pub use listener::{bind, ListenerError};

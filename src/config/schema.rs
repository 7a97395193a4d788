//! Configuration schema definitions.
//!
//! A single [`ProxyConfig`] value describes the whole process: where to
//! listen, where to forward, and whether CORS headers are injected.

use std::fmt;
use std::str::FromStr;

use axum::http::uri::Scheme;

use crate::config::validation::{resolve_target, ConfigError, TargetUrl};

/// Scheme used to reach the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetProtocol {
    /// Plain HTTP.
    #[default]
    Plain,
    /// HTTP over TLS.
    Secure,
}

impl TargetProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetProtocol::Plain => "http",
            TargetProtocol::Secure => "https",
        }
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            TargetProtocol::Plain => Scheme::HTTP,
            TargetProtocol::Secure => Scheme::HTTPS,
        }
    }
}

impl FromStr for TargetProtocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(TargetProtocol::Plain),
            "https" => Ok(TargetProtocol::Secure),
            other => Err(ConfigError::InvalidProtocol(other.to_string())),
        }
    }
}

impl fmt::Display for TargetProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port used when none is configured for the given protocol.
pub fn default_port(protocol: TargetProtocol) -> &'static str {
    match protocol {
        TargetProtocol::Plain => "80",
        TargetProtocol::Secure => "443",
    }
}

/// Root configuration for the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Upstream host name or address. Required.
    pub target_host: String,

    /// Upstream port. `None` or empty selects the protocol default.
    pub target_port: Option<String>,

    /// Upstream scheme.
    pub target_protocol: TargetProtocol,

    /// Address the listener binds to.
    pub source_addr: String,

    /// Port the listener binds to.
    pub source_port: String,

    /// Inject permissive CORS headers and absorb preflight requests.
    pub with_cors: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            target_host: String::new(),
            target_port: None,
            target_protocol: TargetProtocol::Plain,
            source_addr: "localhost".to_string(),
            source_port: "80".to_string(),
            with_cors: false,
        }
    }
}

impl ProxyConfig {
    /// Configured target port, or the protocol default when unset or empty.
    pub fn effective_target_port(&self) -> &str {
        match self.target_port.as_deref() {
            Some(port) if !port.is_empty() => port,
            _ => default_port(self.target_protocol),
        }
    }

    /// `addr:port` the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.source_addr, self.source_port)
    }

    /// Resolve the upstream URL this configuration forwards to.
    pub fn target_url(&self) -> Result<TargetUrl, ConfigError> {
        resolve_target(self)
    }
}

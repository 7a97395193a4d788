//! Configuration validation and target resolution.
//!
//! # Responsibilities
//! - Reject a missing target host or unknown protocol
//! - Compose `scheme://host:port` and check it is a valid absolute URL
//! - Produce the immutable [`TargetUrl`] shared by every request
//!
//! # Design Decisions
//! - Runs once at startup; failures are fatal before any socket is bound
//! - The port is always explicit in the resolved authority, even when it
//!   is the scheme default

use std::fmt;
use std::str::FromStr;

use axum::http::uri::{Authority, Scheme};
use url::Url;

use crate::config::schema::ProxyConfig;

/// Error type for configuration problems detected at startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--targetHost is required")]
    MissingTargetHost,

    #[error("--targetProtocol must be 'http' or 'https' (got '{0}')")]
    InvalidProtocol(String),

    #[error("invalid target URL '{url}': {reason}")]
    InvalidTargetUrl { url: String, reason: String },
}

impl ConfigError {
    fn invalid_url(url: &str, reason: impl fmt::Display) -> Self {
        ConfigError::InvalidTargetUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// The upstream every request is forwarded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    scheme: Scheme,
    authority: Authority,
}

impl TargetUrl {
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// `host:port` of the upstream, also used as the outbound `Host` header.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}

/// Resolve the target URL from a configuration.
pub fn resolve_target(config: &ProxyConfig) -> Result<TargetUrl, ConfigError> {
    if config.target_host.is_empty() {
        return Err(ConfigError::MissingTargetHost);
    }

    let raw = format!(
        "{}://{}:{}",
        config.target_protocol,
        config.target_host,
        config.effective_target_port()
    );

    let parsed = Url::parse(&raw).map_err(|e| ConfigError::invalid_url(&raw, e))?;

    // Anything beyond scheme://host:port means the host value smuggled in a
    // path, query or credentials.
    if parsed.path() != "/"
        || parsed.query().is_some()
        || parsed.fragment().is_some()
        || !parsed.username().is_empty()
        || parsed.password().is_some()
    {
        return Err(ConfigError::invalid_url(
            &raw,
            "target host must not contain a path, query or credentials",
        ));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| ConfigError::invalid_url(&raw, "missing host"))?;
    let port = parsed
        .port_or_known_default()
        .ok_or_else(|| ConfigError::invalid_url(&raw, "missing port"))?;

    let authority = Authority::from_str(&format!("{host}:{port}"))
        .map_err(|e| ConfigError::invalid_url(&raw, e))?;

    Ok(TargetUrl {
        scheme: config.target_protocol.scheme(),
        authority,
    })
}

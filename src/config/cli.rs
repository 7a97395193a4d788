//! Command-line flags.
//!
//! Flag names keep their historical camelCase spelling (`--targetHost`, ...).
//! Required-host and protocol checks are done here rather than by clap so a
//! bad configuration exits with status 1 instead of clap's usage status.

use clap::{CommandFactory, Parser};

use crate::config::schema::{ProxyConfig, TargetProtocol};
use crate::config::validation::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "http-proxy")]
#[command(
    about = "HTTP Proxy",
    long_about = "HTTP Proxy\n\nThis tool starts an HTTP proxy server that forwards all incoming requests\nto a specified target host and port using the specified protocol."
)]
pub struct Cli {
    /// Target host to proxy to (required)
    #[arg(long = "targetHost", value_name = "host")]
    pub target_host: Option<String>,

    /// Target port to proxy to (default: 80 or 443 based on protocol)
    #[arg(long = "targetPort", value_name = "port")]
    pub target_port: Option<String>,

    /// Target protocol (http or https)
    #[arg(long = "targetProtocol", value_name = "proto", default_value = "http")]
    pub target_protocol: String,

    /// Source address to bind to
    #[arg(long = "sourceAddr", value_name = "addr", default_value = "localhost")]
    pub source_addr: String,

    /// Source port to listen on
    #[arg(long = "sourcePort", value_name = "port", default_value = "80")]
    pub source_port: String,

    /// Enable automatic CORS headers
    #[arg(long = "withCors")]
    pub with_cors: bool,
}

impl Cli {
    /// Convert parsed flags into a [`ProxyConfig`].
    pub fn into_config(self) -> Result<ProxyConfig, ConfigError> {
        let target_host = self.target_host.unwrap_or_default();
        if target_host.is_empty() {
            return Err(ConfigError::MissingTargetHost);
        }

        let target_protocol: TargetProtocol = self.target_protocol.parse()?;

        Ok(ProxyConfig {
            target_host,
            target_port: self.target_port.filter(|p| !p.is_empty()),
            target_protocol,
            source_addr: self.source_addr,
            source_port: self.source_port,
            with_cors: self.with_cors,
        })
    }

    /// Rendered help text, printed alongside configuration errors.
    pub fn usage() -> String {
        Cli::command().render_long_help().to_string()
    }
}

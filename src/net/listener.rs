//! TCP listener binding.

use tokio::net::TcpListener;

use crate::config::ProxyConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the configured source address.
///
/// Host names such as `localhost` are resolved before binding.
pub async fn bind(config: &ProxyConfig) -> Result<TcpListener, ListenerError> {
    let address = config.bind_address();

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ListenerError::Bind {
            address: address.clone(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(addr: &str, port: &str) -> ProxyConfig {
        ProxyConfig {
            target_host: "example.com".into(),
            source_addr: addr.into(),
            source_port: port.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let listener = bind(&config("127.0.0.1", "0")).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn address_in_use_is_an_error() {
        let first = bind(&config("127.0.0.1", "0")).await.unwrap();
        let port = first.local_addr().unwrap().port().to_string();

        let err = bind(&config("127.0.0.1", &port)).await.unwrap_err();
        assert!(err.to_string().contains(&format!("127.0.0.1:{port}")));
    }

    #[tokio::test]
    async fn invalid_port_is_an_error() {
        assert!(bind(&config("127.0.0.1", "not-a-port")).await.is_err());
    }
}

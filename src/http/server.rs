//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the catch-all forwarding handler
//! - Wire up the request stages (trace, CORS, logging)
//! - Serve on a bound listener until shutdown is signalled

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware,
    response::Response,
    routing::any,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ProxyConfig, TargetUrl};
use crate::http::forward::{build_client, Forwarder};
use crate::http::middleware::{cors, log_request};

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
    target: TargetUrl,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails if the target URL cannot be resolved.
    pub fn new(config: ProxyConfig) -> Result<Self, ConfigError> {
        let target = config.target_url()?;

        let state = AppState {
            forwarder: Arc::new(Forwarder::new(build_client(), target.clone())),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            target,
        })
    }

    /// Build the Axum router with all request stages.
    /// The last layer added runs first.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(middleware::from_fn(log_request));

        if config.with_cors {
            router = router.layer(middleware::from_fn(cors));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            cors = self.config.with_cors,
            "HTTP proxy starting on http://{}",
            addr
        );
        tracing::info!(upstream = %self.target, "Forwarding all requests to {}", self.target);

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, without connection info.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// The resolved upstream.
    pub fn target(&self) -> &TargetUrl {
        &self.target
    }
}

/// Forward every request to the upstream.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    state.forwarder.forward(request, remote_addr.as_deref()).await
}

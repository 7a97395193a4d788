//! Single-host HTTP reverse proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌─────────────────────────────────────────────────┐
//!                    │                   HTTP PROXY                    │
//!                    │                                                 │
//!  Client Request    │  ┌──────────┐   ┌────────┐   ┌─────────┐        │
//!  ──────────────────┼─▶│ listener │──▶│  CORS  │──▶│ logging │──┐     │
//!                    │  └──────────┘   └────────┘   └─────────┘  │     │
//!                    │                 (optional)                ▼     │
//!                    │                              ┌───────────────┐  │
//!  Client Response   │                              │   forwarder   │──┼──▶ Upstream
//!  ◀─────────────────┼──────────────────────────────│ rewrite/relay │◀─┼───
//!                    │                              └───────────────┘  │
//!                    └─────────────────────────────────────────────────┘
//! ```

use clap::Parser;

use http_proxy::config::Cli;
use http_proxy::lifecycle::{signals, Shutdown};
use http_proxy::net;
use http_proxy::observability::logging;
use http_proxy::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init();

    // Configuration errors exit with status 1 before anything is bound.
    let server = match cli.into_config().and_then(HttpServer::new) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", Cli::usage());
            std::process::exit(1);
        }
    };

    tracing::info!(
        bind_address = %server.config().bind_address(),
        upstream = %server.target(),
        with_cors = server.config().with_cors,
        "Configuration loaded"
    );

    let listener = match net::bind(server.config()).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            return Err(e.into());
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            signals::wait_for_shutdown_signal().await;
            shutdown.trigger();
        }
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

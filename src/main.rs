//! Forwarding Gateway
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │               FORWARDING GATEWAY             │
//!     Client Request     │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!     ───────────────────┼─▶│  axum    │──▶│ handlers │──▶│ upstream │──┼───▶ Upstream
//!                        │  │ + layers │   │          │   │  client  │  │     Service
//!     Client Response    │  └──────────┘   └──────────┘   └──────────┘  │
//!     ◀──────────────────┼──── verbatim relay, or 500 {"detail": ...} ◀─┼────
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! Configuration comes from `SPRING_BACKEND_URL`, `API_KEY` and `PORT`,
//! optionally layered over a TOML file named by `GATEWAY_CONFIG`.

use std::sync::Arc;

use tokio::net::TcpListener;

use forwarding_gateway::config::load_from_env;
use forwarding_gateway::lifecycle::{signals, Shutdown};
use forwarding_gateway::observability::init_logging;
use forwarding_gateway::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;

    init_logging(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.listener.port,
        "Starting forwarding gateway"
    );
    tracing::info!(upstream = %config.upstream.base_url, "Connecting to upstream");

    let bind_address = config.listener.bind_address();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    signals::forward_signals(shutdown.clone());

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

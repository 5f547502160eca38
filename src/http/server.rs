//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, CORS, body limit, request ID)
//! - Serve on a listener until shutdown is triggered
//! - Own the shared upstream client and release it after the server drains

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get, post, MethodRouter},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::request::UuidRequestId;
use crate::lifecycle::ShutdownListener;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// HTTP server for the forwarding gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
    upstream: Arc<UpstreamClient>,
}

impl HttpServer {
    /// Create a new HTTP server, building the shared upstream client.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let upstream = Arc::new(UpstreamClient::new(&config.upstream)?);

        let state = AppState {
            upstream: upstream.clone(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            upstream,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/proxy", any(handlers::proxy_root_redirect))
            .route("/proxy/", proxy_methods())
            .route("/proxy/{*path}", proxy_methods())
            .route("/api/process", post(handlers::process))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(CorsLayer::very_permissive()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.upstream.base_url(),
            credential_configured = self.config.upstream.credential().is_some(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");

        match Arc::try_unwrap(self.upstream) {
            Ok(client) => {
                drop(client);
                tracing::info!("Upstream client released");
            }
            Err(shared) => {
                tracing::warn!(
                    references = Arc::strong_count(&shared),
                    "Upstream client still referenced after shutdown"
                );
            }
        }

        Ok(())
    }

    /// A clone of the fully layered router, for serving or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

fn proxy_methods() -> MethodRouter<AppState> {
    get(handlers::proxy)
        .post(handlers::proxy)
        .put(handlers::proxy)
        .delete(handlers::proxy)
        .patch(handlers::proxy)
}

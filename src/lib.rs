//! Forwarding Gateway Library
//!
//! A thin reverse proxy in front of a single upstream service: `/proxy/*`
//! relays requests with an injected bearer credential, `/api/process`
//! timestamps a JSON payload before posting it upstream.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, CORS, body limit)
//!     → handlers.rs (health | proxy | process)
//!     → request.rs (path extraction, target URL, header sanitization)
//!     → upstream client
//!     → response.rs (verbatim relay or synthesized 500)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::UpstreamResponse;
pub use server::{AppState, HttpServer};

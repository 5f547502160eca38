//! Upstream communication subsystem.
//!
//! # Data Flow
//! ```text
//! /proxy/{path}:
//!     ForwardRequest
//!     → client.rs (target URL, header sanitization, credential, 30s deadline)
//!     → shared reqwest::Client → upstream
//!     → UpstreamResponse (verbatim) or GatewayError::UpstreamUnreachable
//!
//! /api/process:
//!     JSON object
//!     → process.rs (enrich with processed/original/timestamp)
//!     → fresh reqwest::Client → {base}/api/processed-data
//!     → (status, JSON) or GatewayError::Processing
//! ```
//!
//! # Design Decisions
//! - No retries, no circuit breaking: one outbound call per inbound call
//! - The two forwarding paths stay separate; only `/proxy/*` uses the shared client

pub mod client;
pub mod error;
pub mod process;

pub use client::{ForwardRequest, UpstreamClient, FORWARD_TIMEOUT};
pub use error::GatewayError;

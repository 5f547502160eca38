//! Observability subsystem.
//!
//! Structured logging only; the request ID set by the HTTP layer is logged
//! by every handler so one request can be followed end to end.

pub mod logging;

pub use logging::init_logging;

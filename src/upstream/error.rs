//! Gateway error taxonomy.

/// Failures surfaced to callers as synthesized responses.
///
/// Upstream 4xx/5xx responses are not errors; they are relayed verbatim.
/// The two payload variants reject a request before any upstream call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Transport-level failure while forwarding (refused, timeout, DNS, TLS).
    #[error("Error communicating with backend: {0}")]
    UpstreamUnreachable(String),

    /// Any failure during the process-and-forward round trip.
    #[error("{0}")]
    Processing(String),

    /// A declared content type that is not JSON.
    #[error("Unsupported content type {0:?}, expected application/json")]
    UnsupportedMediaType(String),

    /// A body that does not parse as a JSON object.
    #[error("Invalid JSON object: {0}")]
    InvalidPayload(String),
}

impl GatewayError {
    pub fn unreachable(err: &reqwest::Error) -> Self {
        GatewayError::UpstreamUnreachable(describe(err))
    }

    pub fn processing(err: &reqwest::Error) -> Self {
        GatewayError::Processing(describe(err))
    }
}

/// Render an error with its source chain, e.g.
/// `error sending request for url (...): client error (Connect): Connection refused`.
pub fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = inner.source();
    }
    out
}

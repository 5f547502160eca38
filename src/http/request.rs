//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Extract the forwarded path from the raw request URI
//! - Build the upstream target URL
//! - Sanitize headers and inject the upstream credential
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Paths are forwarded still percent-encoded, without normalization
//! - All inbound headers except `host` pass through; multi-valued headers are kept

use axum::http::{
    header::{AUTHORIZATION, HOST},
    HeaderMap, HeaderValue, Request, Uri,
};
use tower_http::request_id::{MakeRequestId, RequestId};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Route prefix for the generic forwarder.
pub const PROXY_PREFIX: &str = "/proxy/";

/// Generates a UUID v4 request ID for requests that arrive without one.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Read the request ID assigned by the request ID layer.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// The part of the URI path after `/proxy/`, exactly as received.
pub fn proxied_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix(PROXY_PREFIX)
        .or_else(|| path.strip_prefix("/proxy"))
        .unwrap_or(path)
}

/// `base + "/" + path`, plus the original query string if any.
pub fn target_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base_url, path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Strip `host` and, when a credential is configured, overwrite `Authorization`.
pub fn sanitize_headers(mut headers: HeaderMap, credential: Option<&str>) -> HeaderMap {
    headers.remove(HOST);

    if let Some(key) = credential {
        match HeaderValue::from_str(&format!("Bearer {}", key)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!("API key contains characters not valid in a header; not injected");
            }
        }
    }

    headers
}

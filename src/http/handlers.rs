//! Route handlers: health, generic forwarding, and process-and-forward.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use std::time::Instant;

use crate::http::request::{proxied_path, request_id};
use crate::http::server::AppState;
use crate::upstream::process::{enrich, parse_payload};
use crate::upstream::ForwardRequest;

/// Fixed health payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// `GET /health`. Never touches the upstream.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "python-backend",
    })
}

/// `/proxy/{*path}` for GET, POST, PUT, DELETE and PATCH.
pub async fn proxy(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers).to_string();
    let path = proxied_path(&uri).to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Proxying request"
    );

    let request = ForwardRequest {
        method: method.clone(),
        path,
        query: uri.query().map(str::to_owned),
        headers,
        body,
    };

    match state.upstream.forward(request).await {
        Ok(response) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                status = %response.status,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Upstream responded"
            );
            response.into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, method = %method, error = %e, "Upstream error");
            e.into_response()
        }
    }
}

/// Bare `/proxy`: 307 to `/proxy/`, keeping the query string.
pub async fn proxy_root_redirect(uri: Uri) -> Redirect {
    match uri.query() {
        Some(query) => Redirect::temporary(&format!("/proxy/?{}", query)),
        None => Redirect::temporary("/proxy/"),
    }
}

/// `POST /api/process`. Enriches the JSON object and posts it upstream.
///
/// A missing content type is accepted; the body is parsed as JSON regardless.
pub async fn process(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let request_id = request_id(&headers).to_string();
    let payload = match parse_payload(headers.get(CONTENT_TYPE), &body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Rejected process payload");
            return e.into_response();
        }
    };
    let enriched = enrich(payload, chrono::Utc::now());

    match state.upstream.submit_processed(&enriched).await {
        Ok((status, body)) => {
            tracing::debug!(request_id = %request_id, status = %status, "Processed data forwarded");
            (status, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Process-and-forward failed");
            e.into_response()
        }
    }
}

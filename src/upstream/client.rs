//! Outbound HTTP client for the single configured upstream.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, Method, StatusCode};
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::http::request::{sanitize_headers, target_url};
use crate::http::response::UpstreamResponse;
use crate::upstream::error::GatewayError;
use crate::upstream::process::PROCESSED_DATA_PATH;

/// Deadline for one forwarded call, covering connect, send and body read.
pub const FORWARD_TIMEOUT: Duration = Duration::from_secs(30);

/// An inbound request reduced to what gets forwarded.
#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    /// Path relative to the upstream base, without a leading `/`.
    pub path: String,
    /// Raw query string, without the `?`.
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Long-lived client shared by every forwarded request.
///
/// `reqwest::Client` pools connections internally and is safe for
/// concurrent use, so handlers share it through `Arc` without locking.
#[derive(Debug)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    credential: Option<String>,
}

impl UpstreamClient {
    /// Build the shared client. Called once at startup.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(FORWARD_TIMEOUT)
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            credential: config.credential().map(str::to_owned),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward one request and read the whole upstream response.
    ///
    /// Exactly one outbound call is made. Any transport failure, including
    /// the timeout, becomes `GatewayError::UpstreamUnreachable`.
    pub async fn forward(&self, request: ForwardRequest) -> Result<UpstreamResponse, GatewayError> {
        let url = target_url(&self.base_url, &request.path, request.query.as_deref());
        let headers = sanitize_headers(request.headers, self.credential.as_deref());

        tracing::debug!(method = %request.method, url = %url, "Forwarding to upstream");

        let response = self
            .client
            .request(request.method, &url)
            .headers(headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| GatewayError::unreachable(&e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::unreachable(&e))?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }

    /// POST an enriched payload to the fixed processed-data path.
    ///
    /// Uses a fresh client with default settings, independent of the shared
    /// forwarding client, and returns the upstream status with its JSON body.
    pub async fn submit_processed(&self, payload: &Value) -> Result<(StatusCode, Value), GatewayError> {
        let url = format!("{}{}", self.base_url, PROCESSED_DATA_PATH);
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| GatewayError::processing(&e))?;

        let response = client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(payload)
            .send()
            .await
            .map_err(|e| GatewayError::processing(&e))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::processing(&e))?;

        Ok((status, body))
    }
}

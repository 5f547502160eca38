//! Payload enrichment for the process-and-forward endpoint.

use axum::http::HeaderValue;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::upstream::error::GatewayError;

/// Fixed upstream path receiving enriched payloads.
pub const PROCESSED_DATA_PATH: &str = "/api/processed-data";

/// True for `application/json` and `application/*+json`, ignoring parameters.
fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Parse an inbound body as a JSON object.
///
/// Only a declared non-JSON content type is refused; an absent one is not.
pub fn parse_payload(content_type: Option<&HeaderValue>, body: &[u8]) -> Result<Map<String, Value>, GatewayError> {
    if let Some(value) = content_type {
        let text = String::from_utf8_lossy(value.as_bytes());
        if !is_json_content_type(&text) {
            return Err(GatewayError::UnsupportedMediaType(text.into_owned()));
        }
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(GatewayError::InvalidPayload("expected a JSON object".to_string())),
        Err(e) => Err(GatewayError::InvalidPayload(e.to_string())),
    }
}

/// Wrap an arbitrary JSON object as `{processed, original, timestamp}`.
///
/// The payload is kept as an opaque value so unknown shapes pass through intact.
pub fn enrich(payload: Map<String, Value>, now: DateTime<Utc>) -> Value {
    let mut enriched = Map::new();
    enriched.insert("processed".to_string(), Value::Bool(true));
    enriched.insert("original".to_string(), Value::Object(payload));
    enriched.insert(
        "timestamp".to_string(),
        Value::String(now.to_rfc3339_opts(SecondsFormat::Micros, true)),
    );
    Value::Object(enriched)
}

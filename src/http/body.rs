//! Lenient JSON body extraction.
//!
//! Mirrors a permissive JSON body parser:
//! - no body, or a non-JSON content type, decodes as the empty object
//! - a top-level array is read as an object keyed by index (`"0"`, `"1"`, ...)
//! - invalid JSON, a scalar top-level value, or an oversized body is a fault
//!
//! Route inputs use `Option<Value>` fields so any value shape is echoed as-is.

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Request body decoded without validation.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T> FromRequest<AppState> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(is_json_content_type)
            .unwrap_or(false);

        if !is_json {
            return Ok(JsonBody(T::default()));
        }

        let limit = state.config.limits.max_body_bytes;
        let bytes = axum::body::to_bytes(req.into_body(), limit)
            .await
            .map_err(|e| ApiError::BodyRead(e.to_string()))?;

        decode(&bytes).map(JsonBody)
    }
}

/// Decode raw body bytes with the leniency rules above.
pub fn decode<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| ApiError::MalformedBody(e.to_string()))
        }
        Value::Array(items) => {
            let indexed = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect();
            serde_json::from_value(Value::Object(indexed))
                .map_err(|e| ApiError::MalformedBody(e.to_string()))
        }
        other => Err(ApiError::MalformedBody(format!(
            "expected an object or array, got {}",
            other
        ))),
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Field deserializer that keeps an explicit `null` as `Some(Value::Null)`.
///
/// Use with `#[serde(default, deserialize_with = "keep_null")]`: absent
/// fields stay `None` and are left out of the echo, `null` is echoed back.
pub fn keep_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

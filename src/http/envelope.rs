//! Uniform JSON response envelope.
//!
//! Success bodies carry `success: true` with `data`, `message` or both.
//! Failure bodies carry `success: false`, a message, and optionally the
//! `blocked` flag or a development-only `error` detail.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message sent for every unhandled fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Successful response wrapper.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Envelope<T = ()> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// `{success: true, data}`
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// `{success: true, message, data}`
    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// `{success: true, message}`
    pub fn message(message: &'static str) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Failure response body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Failure {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            blocked: None,
            error: None,
        }
    }

    pub fn blocked(mut self) -> Self {
        self.blocked = Some(true);
        self
    }

    /// Generic 500 body, with the raw detail only when the caller allows it.
    pub fn internal(detail: Option<String>) -> Self {
        Self {
            error: detail,
            ..Self::new(INTERNAL_ERROR_MESSAGE)
        }
    }
}

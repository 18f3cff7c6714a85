//! Handler error type and its mapping onto failure envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use thiserror::Error;

use crate::http::envelope::Failure;

/// Raw fault message attached to 5xx responses.
///
/// The error-envelope middleware decides whether it reaches the client.
#[derive(Debug, Clone)]
pub struct FaultDetail(pub String);

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Assinatura vencida. Renovar para continuar usando o sistema.")]
    SubscriptionExpired,

    #[error("Rota não encontrada")]
    NotFound,

    #[error("Tempo limite da requisição excedido")]
    Timeout,

    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::SubscriptionExpired => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::MalformedBody(_) | ApiError::BodyRead(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Build an internal fault from a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "handler panicked".to_string()
        };
        ApiError::Internal(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let mut response = (status, Json(Failure::internal(None))).into_response();
            response.extensions_mut().insert(FaultDetail(self.to_string()));
            return response;
        }

        let body = match self {
            ApiError::SubscriptionExpired => Failure::new(self.to_string()).blocked(),
            _ => Failure::new(self.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

/// Response hook for the panic-catching layer.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::from_panic(payload).into_response()
}

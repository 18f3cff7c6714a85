//! Fallback error layer.
//!
//! Wraps the whole route table. Every response that carries a
//! [`FaultDetail`] (handler errors and caught panics alike) is logged here,
//! and in development mode its body is rebuilt with the raw detail.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::config::Environment;
use crate::http::envelope::Failure;
use crate::http::error::FaultDetail;
use crate::http::request::RequestIdExt;

pub async fn error_envelope(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request.request_id().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let Some(FaultDetail(detail)) = response.extensions_mut().remove::<FaultDetail>() else {
        return response;
    };

    tracing::error!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        error = %detail,
        "Unhandled request fault"
    );

    if environment.exposes_error_detail() {
        let status = response.status();
        return (status, Json(Failure::internal(Some(detail)))).into_response();
    }

    response
}

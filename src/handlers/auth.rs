//! Login and registration.
//!
//! Login is a literal comparison against one credential pair and hands back
//! a fixed token. Registration echoes the user with a generated id; the
//! password is accepted and never returned.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::handlers::Created;
use crate::http::body::keep_null;
use crate::http::{ApiError, AppState, JsonBody};

const ADMIN_EMAIL: &str = "admin@erp.com";
const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_TOKEN: &str = "fake-jwt-token-123";

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "keep_null")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "keep_null")]
    pub password: Option<Value>,
}

impl LoginRequest {
    fn is_admin(&self) -> bool {
        str_field(&self.email) == Some(ADMIN_EMAIL) && str_field(&self.password) == Some(ADMIN_PASSWORD)
    }
}

fn str_field(field: &Option<Value>) -> Option<&str> {
    field.as_ref().and_then(Value::as_str)
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: u64,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: &'static str,
    pub user: SessionUser,
}

pub async fn login(JsonBody(req): JsonBody<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
    if !req.is_admin() {
        tracing::info!("Login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(LoginResponse {
        success: true,
        token: ADMIN_TOKEN,
        user: SessionUser {
            id: 1,
            name: "Administrador",
            email: ADMIN_EMAIL,
            role: "admin",
        },
    }))
}

/// Registration input. Unknown keys, including `password`, are dropped.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub module: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: Created<RegisterRequest>,
}

pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Json<RegisterResponse> {
    let user = Created::new(state.next_id(), req);
    tracing::debug!(user_id = user.id, "User registered");

    Json(RegisterResponse {
        success: true,
        message: "Usuário criado com sucesso",
        user,
    })
}

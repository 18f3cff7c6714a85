//! Service banner and health check.

use axum::Json;
use serde::Serialize;

use crate::handlers::now_rfc3339;

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

pub async fn banner() -> Json<Banner> {
    Json(Banner {
        message: "ERP API está rodando! 🚀",
        version: env!("CARGO_PKG_VERSION"),
        status: "online",
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: now_rfc3339(),
    })
}

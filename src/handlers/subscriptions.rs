//! Subscription status and validation.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::body::keep_null;
use crate::http::{ApiError, Envelope, JsonBody};

const BLOCKED_STATUS: &str = "blocked";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSnapshot {
    pub user_id: String,
    pub plan: &'static str,
    pub status: &'static str,
    pub expires_at: &'static str,
    pub days_remaining: u32,
}

impl SubscriptionSnapshot {
    fn for_user(user_id: String) -> Self {
        Self {
            user_id,
            plan: "professional",
            status: "active",
            expires_at: "2025-12-31",
            days_remaining: 36,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.status == BLOCKED_STATUS
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCheck {
    pub success: bool,
    pub data: SubscriptionSnapshot,
    pub is_blocked: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(rename = "userId", default, deserialize_with = "keep_null")]
    pub user_id: Option<Value>,
}

pub async fn check(Path(user_id): Path<String>) -> Json<SubscriptionCheck> {
    let data = SubscriptionSnapshot::for_user(user_id);
    let is_blocked = data.is_blocked();

    Json(SubscriptionCheck {
        success: true,
        data,
        is_blocked,
    })
}

/// Every subscription is currently treated as valid.
///
/// There is no subscription store to consult; the rejection path in
/// [`validate`] stays wired but cannot trigger until one exists.
fn is_subscription_valid(_user_id: Option<&Value>) -> bool {
    true
}

pub async fn validate(JsonBody(req): JsonBody<ValidateRequest>) -> Result<Envelope, ApiError> {
    if !is_subscription_valid(req.user_id.as_ref()) {
        tracing::warn!(user_id = ?req.user_id, "Subscription expired");
        return Err(ApiError::SubscriptionExpired);
    }

    Ok(Envelope::message("Assinatura ativa"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_check_snapshot() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/subscriptions/check/u-42", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "data": {
                    "userId": "u-42",
                    "plan": "professional",
                    "status": "active",
                    "expiresAt": "2025-12-31",
                    "daysRemaining": 36
                },
                "isBlocked": false
            })
        );
    }

    #[test]
    fn test_blocked_flag_follows_status() {
        let mut snapshot = SubscriptionSnapshot::for_user("1".into());
        assert!(!snapshot.is_blocked());
        snapshot.status = "blocked";
        assert!(snapshot.is_blocked());
    }

    #[tokio::test]
    async fn test_validate_always_active() {
        let app = test_app();
        for payload in [Some(json!({"userId": 5})), Some(json!({})), None] {
            let (status, body) = send(&app, Method::POST, "/api/subscriptions/validate", payload).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"success": true, "message": "Assinatura ativa"}));
        }
    }
}

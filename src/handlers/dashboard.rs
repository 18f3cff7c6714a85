//! Dashboard aggregates.

use serde::{Serialize, Serializer};

use crate::http::Envelope;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: u32,
    pub active_subscriptions: u32,
    #[serde(serialize_with = "whole_as_integer")]
    pub monthly_revenue: f64,
    pub pending_payments: u32,
}

const STATS: DashboardStats = DashboardStats {
    total_clients: 45,
    active_subscriptions: 12,
    monthly_revenue: 1680.00,
    pending_payments: 3,
};

/// Write whole amounts without a fractional part, so `1680.0` goes out as `1680`.
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub async fn stats() -> Envelope<DashboardStats> {
    Envelope::ok(STATS)
}

#[cfg(test)]
mod tests {
    use crate::http::testing::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_stats() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/dashboard/stats", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["totalClients"], json!(45));
        assert_eq!(body["data"]["activeSubscriptions"], json!(12));
        assert_eq!(body["data"]["monthlyRevenue"], json!(1680));
        assert_eq!(body["data"]["pendingPayments"], json!(3));
    }

    #[test]
    fn test_revenue_drops_fraction_only_when_whole() {
        let text = serde_json::to_string(&super::STATS).unwrap();
        assert!(text.contains("\"monthlyRevenue\":1680,"), "{}", text);

        let mut stats = super::STATS;
        stats.monthly_revenue = 1680.5;
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["monthlyRevenue"], json!(1680.5));
    }
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `erp_http_requests_total` (counter): requests by method, route, status
//! - `erp_http_request_duration_seconds` (histogram): latency distribution
//!
//! Without an installed recorder the macros are no-ops, so handlers and
//! tests never depend on the exporter.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];

    metrics::counter!("erp_http_requests_total", &labels).increment(1);
    metrics::histogram!("erp_http_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

//! Prometheus metrics for monitoring the standings server.
//!
//! Metrics are exposed in Prometheus text format on a dedicated listener when
//! one is configured. Without an installed exporter every call is a no-op.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use lt_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::http_requests_total("GET", "/api/v1/groups/{group_id}/standings", 200);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
///
/// `path` should be the matched route template, not the raw URI.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

// ============================================================================
// Standings Metrics
// ============================================================================

/// Increment the computation counter for `kind` (`group` or `top_scorers`).
pub fn standings_computed_total(kind: &str, success: bool) {
    metrics::counter!("standings_computed_total",
        "kind" => kind.to_string(),
        "success" => success.to_string()
    )
    .increment(1);
}

/// Record computation duration in milliseconds.
pub fn standings_computation_duration_ms(kind: &str, duration_ms: f64) {
    metrics::histogram!("standings_computation_duration_ms",
        "kind" => kind.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Snapshot Metrics
// ============================================================================

/// Increment the snapshot replacement counter.
pub fn snapshot_replacements_total() {
    metrics::counter!("snapshot_replacements_total").increment(1);
}

/// Set the number of matches in the current snapshot.
pub fn snapshot_matches(count: usize) {
    metrics::gauge!("snapshot_matches").set(count as f64);
}

//! Structured logging configuration.
//!
//! `log` records emitted by the standings library are forwarded into the same
//! subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Computations slower than this are logged at warn level
const SLOW_COMPUTATION_MS: u64 = 250;

/// Initialize structured logging
///
/// Log levels are configurable via the RUST_LOG env var and default to `info`.
///
/// # Example
///
/// ```no_run
/// use lt_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn"));

    // Console layer
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a finished standings computation
///
/// # Arguments
///
/// * `operation` - Computation name (e.g. `group_standings`)
/// * `scope` - Group or tournament id the computation ran for
/// * `request_id` - Correlation id of the triggering request
/// * `duration_ms` - Duration in milliseconds
///
/// # Example
///
/// ```
/// use lt_server::logging::log_computation;
///
/// log_computation("group_standings", "3f1c", "req-1", 4);
/// ```
pub fn log_computation(operation: &str, scope: &str, request_id: &str, duration_ms: u64) {
    if duration_ms > SLOW_COMPUTATION_MS {
        tracing::warn!(
            operation = operation,
            scope = scope,
            request_id = request_id,
            duration_ms = duration_ms,
            "PERFORMANCE: Slow computation"
        );
    } else {
        tracing::debug!(
            operation = operation,
            scope = scope,
            request_id = request_id,
            duration_ms = duration_ms,
            "Computation finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_computation() {
        // Just ensure it doesn't panic
        log_computation("group_standings", "group", "req", 5);
        log_computation("top_scorers", "tournament", "req", 2_000);
    }
}

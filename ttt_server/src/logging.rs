//! Structured logging configuration.
//!
//! The core library logs through the `log` facade; the subscriber installed
//! here picks those records up through its `tracing-log` bridge.

use tictactoe::ConnectionId;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log levels are configurable via the RUST_LOG env var.
///
/// # Example
///
/// ```no_run
/// use ttt_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn"));

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

/// Log a WebSocket lifecycle event with structured data
///
/// # Example
///
/// ```
/// use tictactoe::ConnectionId;
/// use ttt_server::logging::log_connection_event;
///
/// log_connection_event("connected", ConnectionId::new(), None);
/// ```
pub fn log_connection_event(event_type: &str, connection: ConnectionId, detail: Option<&str>) {
    tracing::info!(
        event_type = event_type,
        connection_id = %connection,
        detail = detail,
        "WebSocket {}",
        event_type
    );
}

/// Log how long an operation took, warning when it is slow
pub fn log_slow_operation(operation: &str, duration_ms: u64) {
    if duration_ms > 250 {
        tracing::warn!(
            operation = operation,
            duration_ms = duration_ms,
            "PERFORMANCE: Slow operation"
        );
    } else {
        tracing::trace!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation timing"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_connection_event() {
        // Just ensure it doesn't panic
        log_connection_event("connected", ConnectionId::new(), None);
        log_connection_event("closed", ConnectionId::new(), Some("client went away"));
    }

    #[test]
    fn test_log_slow_operation() {
        log_slow_operation("health_check", 5);
        log_slow_operation("health_check", 2000);
    }
}

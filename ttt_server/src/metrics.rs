//! Prometheus metrics for monitoring server health and activity.
//!
//! Metrics are exposed in Prometheus text format on `METRICS_BIND` when set.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ttt_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::websocket_connections_active(10);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tictactoe::{GameResult, ServerEvent, Symbol};

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
// WebSocket Metrics
// ============================================================================

/// Set current active WebSocket connections count.
pub fn websocket_connections_active(count: usize) {
    metrics::gauge!("websocket_connections_active").set(count as f64);
}

/// Increment total WebSocket connections counter.
pub fn websocket_connections_total() {
    metrics::counter!("websocket_connections_total").increment(1);
}

/// Increment WebSocket messages sent counter.
pub fn websocket_messages_sent() {
    metrics::counter!("websocket_messages_sent").increment(1);
}

/// Increment WebSocket messages received counter.
pub fn websocket_messages_received() {
    metrics::counter!("websocket_messages_received").increment(1);
}

/// Increment rate limit hits counter.
pub fn rate_limit_hits_total(endpoint: &str) {
    metrics::counter!("rate_limit_hits_total",
        "endpoint" => endpoint.to_string()
    )
    .increment(1);
}

// ============================================================================
// Game Metrics
// ============================================================================

/// Increment games started counter.
pub fn games_started_total() {
    metrics::counter!("games_started_total").increment(1);
}

/// Increment per-player game results counter.
pub fn game_results_total(result: GameResult) {
    metrics::counter!("game_results_total",
        "result" => result.to_string()
    )
    .increment(1);
}

/// Set current held sessions count.
pub fn active_games(count: usize) {
    metrics::gauge!("active_games").set(count as f64);
}

/// Set current registered players count.
pub fn active_players(count: usize) {
    metrics::gauge!("active_players").set(count as f64);
}

/// Update game metrics from an outbound event.
///
/// Each game produces one X-side `GameStart`, so that one counts the game.
pub fn observe_event(event: &ServerEvent) {
    match event {
        ServerEvent::GameStart {
            symbol: Symbol::X, ..
        } => games_started_total(),
        ServerEvent::GameEnd { result, .. } => game_results_total(*result),
        ServerEvent::LobbyUpdate(lobby) => {
            active_games(lobby.active_game_count);
            active_players(lobby.players.len());
        }
        _ => {}
    }
}

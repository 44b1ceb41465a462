//! HTTP/WebSocket API for the tic-tac-toe server.
//!
//! # Endpoints Overview
//!
//! - `GET /health` - Server health status
//! - `GET /ws` - WebSocket connection carrying the game protocol
//! - anything else - static files from the configured directory
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ttt_server::api::{AppState, create_router};
//! use tictactoe::CoordinatorConfig;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let state = AppState::launch(CoordinatorConfig::default(), 10);
//! let app = create_router(state, "public");
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively; the bundled client is served from the
//! same origin anyway.

pub mod throttle;
pub mod websocket;

use crate::{
    hub::{ConnectionHub, spawn_dispatcher},
    logging::log_slow_operation,
};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use serde_json::json;
use std::{path::Path, sync::Arc, time::Instant};
use tictactoe::{CoordinatorActor, CoordinatorConfig, CoordinatorHandle};
use tokio::sync::mpsc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Application state shared across all HTTP handlers and WebSocket connections.
///
/// Cloned for each request; both fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Front door to the coordinator actor
    pub coordinator: CoordinatorHandle,
    /// Live connections awaiting coordinator output
    pub hub: Arc<ConnectionHub>,
    /// WebSocket messages accepted per connection per second
    pub ws_burst_limit: usize,
}

impl AppState {
    /// Spawn the coordinator actor and the hub dispatcher.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn launch(config: CoordinatorConfig, ws_burst_limit: usize) -> Self {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (actor, coordinator) = CoordinatorActor::new(config, outbound_tx);
        let hub = Arc::new(ConnectionHub::new());

        tokio::spawn(actor.run());
        spawn_dispatcher(hub.clone(), outbound_rx);

        Self {
            coordinator,
            hub,
            ws_burst_limit,
        }
    }
}

/// Create the API router with all endpoints and middleware.
///
/// ```text
/// GET  /health   - Health check
/// GET  /ws       - WebSocket upgrade
/// GET  /*        - Static client from `static_dir`
/// ```
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ws", get(websocket::websocket_handler))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// Asks the coordinator for a lobby snapshot, which proves the actor is
/// alive and processing its inbox.
///
/// # Response
///
/// Returns `200 OK` if the coordinator answers, or `503 Service Unavailable`.
///
/// ```bash
/// curl http://localhost:3001/health
/// # {"status":"healthy","players":2,"activeGames":1,"connections":2,...}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let lobby = state.coordinator.lobby_snapshot().await;
    log_slow_operation("health_check", started.elapsed().as_millis() as u64);

    let connections = state.hub.connection_count().await;
    let timestamp = chrono::Utc::now().to_rfc3339();

    match lobby {
        Ok(lobby) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "players": lobby.players.len(),
                "activeGames": lobby.active_game_count,
                "connections": connections,
                "timestamp": timestamp,
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "version": env!("CARGO_PKG_VERSION"),
                "error": e,
                "connections": connections,
                "timestamp": timestamp,
            })),
        ),
    }
}

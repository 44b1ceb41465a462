//! Tic-tac-toe server: one coordinator actor behind an axum WebSocket API.

use anyhow::Error;
use log::{info, warn};
use pico_args::Arguments;
use std::{net::SocketAddr, path::PathBuf};
use ttt_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging, metrics,
};

const HELP: &str = "\
Run a multiplayer tic-tac-toe server

USAGE:
  ttt_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:3001]
  --static     DIR         Directory with the web client  [default: env STATIC_DIR or public]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  STATIC_DIR               Directory with the web client
  METRICS_BIND             Prometheus exporter address (disabled when unset)
  SESSION_LINGER_MS        Delay before a finished game is removed  [default: 1000]
  LEADERBOARD_SIZE         Leaderboard entries in lobby updates  [default: 10]
  MAX_CHAT_LENGTH          Chat messages are cut to this many characters  [default: 500]
  MAX_NAME_LENGTH          Longest accepted display name  [default: 32]
  COORDINATOR_INBOX_CAPACITY  Queued coordinator messages before senders wait  [default: 256]
  WS_BURST_LIMIT           Messages per connection per second  [default: 10]
  RUST_LOG                 Log filter  [default: info,tower_http=warn]
";

struct Args {
    bind: Option<SocketAddr>,
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        static_dir: pargs.opt_value_from_str("--static")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {:?}", remaining);
    }

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.static_dir)?;
    config.validate()?;

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        info!("Prometheus metrics exposed at http://{}/metrics", metrics_bind);
    }

    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} does not exist; only the API will be served",
            config.static_dir.display()
        );
    }

    let state = AppState::launch(config.coordinator.clone(), config.ws_burst_limit);
    let coordinator = state.coordinator.clone();
    let app = api::create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");
    if let Err(e) = coordinator.close().await {
        warn!("Coordinator did not shut down cleanly: {}", e);
    }

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::HELP;

    #[test]
    fn test_help_lists_every_environment_variable() {
        for var in [
            "SERVER_BIND",
            "STATIC_DIR",
            "METRICS_BIND",
            "SESSION_LINGER_MS",
            "LEADERBOARD_SIZE",
            "COORDINATOR_INBOX_CAPACITY",
            "MAX_CHAT_LENGTH",
            "MAX_NAME_LENGTH",
            "WS_BURST_LIMIT",
            "RUST_LOG",
        ] {
            assert!(HELP.contains(var), "{var} missing from --help");
        }
    }
}

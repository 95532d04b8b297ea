//! League standings HTTP server.
//!
//! Loads a snapshot from disk (or starts empty), then serves group tables and
//! top scorers computed from it.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Error;
use league_table::{Snapshot, StandingsEngine};
use lt_server::{api, config::ServerConfig, logging, metrics};
use pico_args::Arguments;
use tracing::{info, warn};

const HELP: &str = "\
Run a league standings server

USAGE:
  lt_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:7878]
  --snapshot   PATH        Snapshot JSON loaded at startup  [default: env SNAPSHOT_PATH or empty]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  SNAPSHOT_PATH            Snapshot JSON file
  METRICS_BIND             Prometheus listener address (disabled when unset)
  POINTS_FOR_WIN           League points for a win  [default: 3]
  POINTS_FOR_DRAW          League points for a draw  [default: 1]
  POINTS_FOR_LOSS          League points for a loss  [default: 0]
  YELLOW_CARD_WEIGHT       Fair-play penalty for a yellow card  [default: 1]
  RED_CARD_WEIGHT          Fair-play penalty for a red or second yellow  [default: 3]
  LEADERBOARD_LIMIT        Group leaderboard size  [default: 10]
  RUST_LOG                 Log filter  [default: info]
";

struct Args {
    bind: Option<SocketAddr>,
    snapshot: Option<PathBuf>,
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
        snapshot: pargs.opt_value_from_str("--snapshot")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.snapshot)?;
    config.validate()?;

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        info!("Prometheus metrics exported on http://{}/metrics", metrics_bind);
    }

    let snapshot = match &config.snapshot_path {
        Some(path) => {
            let snapshot = Snapshot::from_path(path)?;
            info!(
                "Loaded snapshot {} ({} groups, {} matches)",
                path.display(),
                snapshot.groups.len(),
                snapshot.matches.len()
            );
            snapshot
        }
        None => {
            warn!("No snapshot configured, starting empty; PUT /api/v1/snapshot to load one");
            Snapshot::new()
        }
    };
    metrics::snapshot_matches(snapshot.matches.len());

    let engine = StandingsEngine::new(config.standings)?;
    let app = api::create_router(api::AppState::new(engine, snapshot));

    info!("Starting HTTP server on {}", config.bind);
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

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}

//! HTTP API for the standings server.
//!
//! # Modules
//!
//! - [`standings`]: Group tables and tournament top scorers
//! - [`snapshot`]: Replacing the in-memory snapshot
//! - [`request_id`]: Request correlation and request metrics
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                                          - Health check
//! GET  /api/v1/groups/{group_id}/standings              - Group table and leaderboards
//! GET  /api/v1/tournaments/{tournament_id}/top-scorers  - Tournament top scorers (?top=N)
//! PUT  /api/v1/snapshot                                 - Replace the snapshot
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use league_table::{Snapshot, StandingsEngine};
//! use lt_server::api::{AppState, create_router};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(StandingsEngine::default(), Snapshot::new());
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:7878").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod request_id;
pub mod snapshot;
pub mod standings;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
};
use league_table::{Snapshot, StandingsEngine};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request. Handlers hold the snapshot read guard for one
/// computation; only the replace endpoint takes the write guard.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<StandingsEngine>,
    pub snapshot: Arc<RwLock<Snapshot>>,
}

impl AppState {
    pub fn new(engine: StandingsEngine, snapshot: Snapshot) -> Self {
        Self {
            engine: Arc::new(engine),
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let v1_routes = create_v1_router();

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", v1_routes)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create API v1 router with all versioned endpoints.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/groups/{group_id}/standings",
            get(standings::get_group_standings),
        )
        .route(
            "/tournaments/{tournament_id}/top-scorers",
            get(standings::get_tournament_top_scorers),
        )
        .route("/snapshot", put(snapshot::replace_snapshot))
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:7878/health
/// # {"status":"healthy","version":"0.1.0","snapshot":{"groups":4,...},"timestamp":"..."}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let summary = snapshot::SnapshotSummary::from(&*state.snapshot.read().await);

    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "snapshot": summary,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}

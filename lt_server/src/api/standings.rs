//! Standings API handlers.
//!
//! # Examples
//!
//! Group table:
//! ```bash
//! curl http://localhost:7878/api/v1/groups/6f9619ff-8b86-d011-b42d-00cf4fc964ff/standings
//! ```
//!
//! Tournament top five scorers:
//! ```bash
//! curl "http://localhost:7878/api/v1/tournaments/6f9619ff-8b86-d011-b42d-00cf4fc964ff/top-scorers?top=5"
//! ```

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use league_table::{GroupStandings, PlayerStanding, StandingsError};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use super::AppState;
use super::request_id::RequestId;
use crate::{logging, metrics};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Deserialize)]
pub struct TopScorersQuery {
    /// Maximum number of entries; the full list when absent
    pub top: Option<usize>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn standings_error(err: StandingsError) -> ApiError {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    error_response(status, err.client_message())
}

fn parse_id(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, format!("Invalid {} id", what)))
}

fn record_computation<T>(
    kind: &str,
    scope: &str,
    request_id: &RequestId,
    start: Instant,
    result: &Result<T, StandingsError>,
) {
    let elapsed = start.elapsed();
    metrics::standings_computed_total(kind, result.is_ok());
    metrics::standings_computation_duration_ms(kind, elapsed.as_secs_f64() * 1000.0);
    logging::log_computation(kind, scope, request_id.as_str(), elapsed.as_millis() as u64);
}

/// Get the standings table and leaderboards of a group.
///
/// # Errors
///
/// - `400 Bad Request`: `group_id` is not a UUID
/// - `404 Not Found`: Group is not in the snapshot
pub async fn get_group_standings(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    request_id: RequestId,
) -> Result<Json<GroupStandings>, ApiError> {
    let group_id = parse_id(&group_id, "group")?;

    let start = Instant::now();
    let result = {
        let snapshot = state.snapshot.read().await;
        state.engine.compute_group_standings(&snapshot, group_id)
    };
    record_computation("group", &group_id.to_string(), &request_id, start, &result);

    result.map(Json).map_err(standings_error)
}

/// Get the top scorers of a tournament across all its matches.
///
/// # Errors
///
/// - `400 Bad Request`: `tournament_id` is not a UUID or `top` is not a number
/// - `404 Not Found`: Tournament is not in the snapshot
pub async fn get_tournament_top_scorers(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
    Query(query): Query<TopScorersQuery>,
    request_id: RequestId,
) -> Result<Json<Vec<PlayerStanding>>, ApiError> {
    let tournament_id = parse_id(&tournament_id, "tournament")?;

    let start = Instant::now();
    let result = {
        let snapshot = state.snapshot.read().await;
        state
            .engine
            .compute_tournament_top_scorers(&snapshot, tournament_id, query.top)
    };
    record_computation(
        "top_scorers",
        &tournament_id.to_string(),
        &request_id,
        start,
        &result,
    );

    result.map(Json).map_err(standings_error)
}

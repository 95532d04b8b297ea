//! Snapshot replacement handler.
//!
//! Whoever owns storage pushes a fresh snapshot here; later requests compute
//! against it.
//!
//! ```bash
//! curl -X PUT http://localhost:7878/api/v1/snapshot \
//!   -H "Content-Type: application/json" \
//!   -d @snapshot.json
//! ```

use axum::{Json, extract::State};
use league_table::Snapshot;
use serde::Serialize;

use super::AppState;
use crate::metrics;

/// Entity counts of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub tournaments: usize,
    pub groups: usize,
    pub teams: usize,
    pub players: usize,
    pub matches: usize,
}

impl From<&Snapshot> for SnapshotSummary {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            tournaments: snapshot.tournaments.len(),
            groups: snapshot.groups.len(),
            teams: snapshot.teams.len(),
            players: snapshot.players.len(),
            matches: snapshot.matches.len(),
        }
    }
}

/// Replace the in-memory snapshot.
///
/// # Response
///
/// Returns `200 OK` with the counts of the new snapshot. A malformed body is
/// rejected by the JSON extractor before the current snapshot is touched.
pub async fn replace_snapshot(
    State(state): State<AppState>,
    Json(snapshot): Json<Snapshot>,
) -> Json<SnapshotSummary> {
    let summary = SnapshotSummary::from(&snapshot);

    *state.snapshot.write().await = snapshot;

    metrics::snapshot_replacements_total();
    metrics::snapshot_matches(summary.matches);
    tracing::info!(
        tournaments = summary.tournaments,
        groups = summary.groups,
        matches = summary.matches,
        "Snapshot replaced"
    );

    Json(summary)
}

//! Snapshot module: the immutable, fully loaded tournament data a standings
//! computation runs against.
//!
//! A [`Snapshot`] bundles tournaments, groups, teams, players and matches with
//! their goal and card events. It is produced by whatever collaborator owns
//! storage and is only ever read by the engine.
//!
//! ## Example
//!
//! ```
//! use league_table::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::from_json_str(r#"{"tournaments": [], "groups": []}"#).unwrap();
//! assert!(snapshot.matches.is_empty());
//! ```

pub mod models;

pub use models::{
    CardEvent, CardKind, GoalEvent, GoalKind, Group, GroupId, MatchId, MatchRecord, MatchStatus,
    Player, PlayerId, Team, TeamId, Tournament, TournamentId,
};

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Snapshot loading errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot JSON is malformed
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Fully loaded tournament data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Roster of a group, in roster order. Unknown team ids are skipped.
    pub fn group_teams(&self, group: &Group) -> Vec<Team> {
        group
            .team_ids
            .iter()
            .filter_map(|id| self.team(*id).cloned())
            .collect()
    }

    /// All matches of a tournament across group and knockout stages
    pub fn tournament_matches(&self, tournament_id: TournamentId) -> Vec<MatchRecord> {
        self.matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id)
            .cloned()
            .collect()
    }
}

//! Standings module: league tables and player leaderboards for group stages.
//!
//! This module provides the ranking engine:
//! - Score derivation with own goals credited to the opponent
//! - Per-team aggregation (results, goals, cards, fair-play)
//! - Primary ordering by points, goal difference, goals for and name
//! - Head-to-head mini-league resolution of tied runs
//! - Top-scorer and most-carded leaderboards, per group and per tournament
//!
//! Every computation is a pure function of a [`Snapshot`](crate::snapshot::Snapshot):
//! no I/O, no shared state, and identical input always gives identical output.
//!
//! ## Example
//!
//! ```
//! use league_table::snapshot::{Group, Snapshot};
//! use league_table::standings::StandingsEngine;
//! use uuid::Uuid;
//!
//! let group = Group {
//!     id: Uuid::new_v4(),
//!     tournament_id: Uuid::new_v4(),
//!     name: "Group A".to_string(),
//!     team_ids: vec![],
//! };
//! let snapshot = Snapshot {
//!     groups: vec![group.clone()],
//!     ..Default::default()
//! };
//!
//! let engine = StandingsEngine::default();
//! let table = engine.compute_group_standings(&snapshot, group.id).unwrap();
//! assert!(table.standings.is_empty());
//! ```

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod errors;
pub mod leaderboard;
pub mod models;
pub mod ranking;
pub mod score;

pub use config::StandingsConfig;
pub use engine::{StandingsEngine, group_standings};
pub use leaderboard::Directory;
pub use errors::{StandingsError, StandingsResult};
pub use models::{GroupStandings, PlayerStanding, TeamStanding};
pub use score::{MatchResult, Score};

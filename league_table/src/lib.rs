//! # League Table
//!
//! Deterministic league standings for group-stage tournaments.
//!
//! This library turns an already-loaded snapshot of teams, matches, goals and
//! cards into a ranked standings table plus player leaderboards. It performs no
//! I/O of its own; fetching the snapshot is the caller's job.
//!
//! ## Pipeline
//!
//! - **Score**: derive each match's score from goal events (own goals count
//!   for the opponent)
//! - **Aggregate**: fold finished group matches into per-team totals
//! - **Rank**: order by points, goal difference, goals for, then name
//! - **Head-to-head**: re-order teams level on points, goal difference and
//!   goals for by a mini-league of their mutual matches
//! - **Leaderboards**: top scorers and most-carded players
//!
//! ## Core Modules
//!
//! - [`snapshot`]: Input data model and JSON loading
//! - [`standings`]: The ranking engine and its value objects
//!
//! ## Example
//!
//! ```
//! use league_table::{Snapshot, StandingsEngine};
//! use uuid::Uuid;
//!
//! let engine = StandingsEngine::default();
//! let missing = engine.compute_group_standings(&Snapshot::new(), Uuid::new_v4());
//! assert!(missing.is_err());
//! ```

/// Snapshot data model.
pub mod snapshot;
pub use snapshot::{Snapshot, SnapshotError};

/// Standings engine, tie-breaking and leaderboards.
pub mod standings;
pub use standings::{
    GroupStandings, PlayerStanding, StandingsConfig, StandingsEngine, StandingsError,
    StandingsResult, TeamStanding,
};

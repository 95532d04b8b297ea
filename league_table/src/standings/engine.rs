//! Standings engine: resolves the requested scope in a snapshot and runs the
//! aggregation, ranking and leaderboard pipeline.

use super::aggregate;
use super::config::StandingsConfig;
use super::errors::{StandingsError, StandingsResult};
use super::leaderboard::{self, Directory};
use super::models::{GroupStandings, PlayerStanding};
use super::ranking;
use crate::snapshot::{Group, GroupId, MatchRecord, Snapshot, Team, TournamentId};
use log::debug;

/// Compute a group's table and leaderboards.
///
/// `teams` is the group roster and decides who appears in the table.
/// `directory` resolves player and team names for the leaderboards and may
/// know teams outside the roster. `matches` may contain anything; only
/// finished matches recorded against `group` with both teams assigned are
/// counted.
pub fn group_standings(
    group: &Group,
    teams: &[Team],
    matches: &[MatchRecord],
    directory: &Directory<'_>,
    config: &StandingsConfig,
) -> GroupStandings {
    let counted = aggregate::counted_matches(matches, group.id);
    debug!(
        "Computing standings for {} ({} teams, {} counted matches)",
        group.name,
        teams.len(),
        counted.len()
    );

    let standings = aggregate::aggregate(teams, &counted, config);
    let standings = ranking::rank(standings, &counted, config);

    let boards = leaderboard::build_leaderboards(&counted, directory, config.leaderboard_limit);

    GroupStandings {
        group_id: group.id,
        group_name: group.name.clone(),
        standings,
        top_scorers: boards.top_scorers,
        most_cards: boards.most_cards,
    }
}

/// Standings engine
#[derive(Debug, Clone, Default)]
pub struct StandingsEngine {
    config: StandingsConfig,
}

impl StandingsEngine {
    /// Create an engine with validated scoring rules
    pub fn new(config: StandingsConfig) -> StandingsResult<Self> {
        config.validate().map_err(StandingsError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StandingsConfig {
        &self.config
    }

    /// Compute standings and leaderboards for one group of the snapshot
    pub fn compute_group_standings(
        &self,
        snapshot: &Snapshot,
        group_id: GroupId,
    ) -> StandingsResult<GroupStandings> {
        let group = snapshot
            .group(group_id)
            .ok_or(StandingsError::GroupNotFound(group_id))?;
        let roster = snapshot.group_teams(group);
        let directory = Directory::new(&snapshot.players, &snapshot.teams);

        Ok(group_standings(
            group,
            &roster,
            &snapshot.matches,
            &directory,
            &self.config,
        ))
    }

    /// Tournament-wide top scorers across all stages, optionally capped at `top_n`
    pub fn compute_tournament_top_scorers(
        &self,
        snapshot: &Snapshot,
        tournament_id: TournamentId,
        top_n: Option<usize>,
    ) -> StandingsResult<Vec<PlayerStanding>> {
        let tournament = snapshot
            .tournament(tournament_id)
            .ok_or(StandingsError::TournamentNotFound(tournament_id))?;
        let matches = snapshot.tournament_matches(tournament.id);
        debug!(
            "Computing top scorers for {} over {} matches",
            tournament.name,
            matches.len()
        );

        let directory = Directory::new(&snapshot.players, &snapshot.teams);
        Ok(leaderboard::tournament_top_scorers(
            &matches, &directory, top_n,
        ))
    }
}

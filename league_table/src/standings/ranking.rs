//! Table ordering: primary ranking and head-to-head tie resolution.
//!
//! The primary order is `(points desc, goal difference desc, goals for desc,
//! team name asc)`. Teams still level on the first three keys form a tied run
//! which is re-ordered by a mini-league of the matches played among its
//! members only. Resolution permutes each run in place, so no team ever leaves
//! the index range of its run.

use super::config::StandingsConfig;
use super::models::TeamStanding;
use super::score::{self, MatchResult};
use crate::snapshot::{MatchRecord, TeamId};
use log::debug;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::ops::Range;

/// Primary comparator. Team id is the last key so the order stays total even
/// when two teams share a name.
pub fn compare_primary(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| compare_name(a, b))
}

/// Alphabetical comparator
pub fn compare_name(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    a.team_name
        .cmp(&b.team_name)
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Maximal runs of adjacent teams sharing the same primary triple.
/// Only runs of two or more teams are returned.
pub fn tied_runs(standings: &[TeamStanding]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;

    for idx in 1..=standings.len() {
        let run_continues =
            idx < standings.len() && standings[idx].primary_key() == standings[start].primary_key();
        if run_continues {
            continue;
        }
        if idx - start >= 2 {
            runs.push(start..idx);
        }
        start = idx;
    }

    runs
}

/// Mini-league totals for one team inside one tied run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct MiniStanding {
    points: u32,
    goals_for: u32,
    goals_against: u32,
}

impl MiniStanding {
    fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    fn record(&mut self, scored: u32, conceded: u32, config: &StandingsConfig) {
        self.goals_for += scored;
        self.goals_against += conceded;
        self.points += config.points_for(MatchResult::from_goals(scored, conceded));
    }
}

// No name key: equal mini keys keep the primary order.
fn compare_mini(a: &MiniStanding, b: &MiniStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Re-order one tied run by its mini-league. Returns whether any intra-run
/// match existed.
fn resolve_run(
    run: &mut [TeamStanding],
    matches: &[&MatchRecord],
    config: &StandingsConfig,
) -> bool {
    let members: HashSet<TeamId> = run.iter().map(|s| s.team_id).collect();

    let intra_run: Vec<(TeamId, TeamId, score::Score)> = matches
        .iter()
        .filter_map(|m| {
            let (home, away) = m.teams()?;
            if !(members.contains(&home) && members.contains(&away)) {
                return None;
            }
            score::match_score(m).map(|s| (home, away, s))
        })
        .collect();

    if intra_run.is_empty() {
        return false;
    }

    let mut mini: HashMap<TeamId, MiniStanding> =
        members.iter().map(|id| (*id, MiniStanding::default())).collect();

    for (home, away, s) in &intra_run {
        if let Some(entry) = mini.get_mut(home) {
            entry.record(s.home, s.away, config);
        }
        if let Some(entry) = mini.get_mut(away) {
            entry.record(s.away, s.home, config);
        }
    }

    // sort_by is stable
    run.sort_by(|a, b| {
        let empty = MiniStanding::default();
        let mini_a = mini.get(&a.team_id).unwrap_or(&empty);
        let mini_b = mini.get(&b.team_id).unwrap_or(&empty);
        compare_mini(mini_a, mini_b)
    });

    true
}

/// Resolve every tied run of a primary-sorted table in place
pub fn resolve_head_to_head(
    standings: &mut [TeamStanding],
    matches: &[&MatchRecord],
    config: &StandingsConfig,
) {
    let runs = tied_runs(standings);
    let mut resolved = 0;

    for range in runs.iter().cloned() {
        if resolve_run(&mut standings[range], matches, config) {
            resolved += 1;
        }
    }

    debug!(
        "Head-to-head: {} tied runs, {} resolved by mini-league",
        runs.len(),
        resolved
    );
}

/// Assign `rank = index + 1` to a final ordering
pub fn assign_ranks(standings: &mut [TeamStanding]) {
    for (idx, standing) in standings.iter_mut().enumerate() {
        standing.rank = idx + 1;
    }
}

/// Produce the final table from aggregated standings.
///
/// With no finished matches the table is simply alphabetical.
pub fn rank(
    mut standings: Vec<TeamStanding>,
    matches: &[&MatchRecord],
    config: &StandingsConfig,
) -> Vec<TeamStanding> {
    if matches.is_empty() {
        standings.sort_by(compare_name);
    } else {
        standings.sort_by(compare_primary);
        resolve_head_to_head(&mut standings, matches, config);
    }

    assign_ranks(&mut standings);
    standings
}

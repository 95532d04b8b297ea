//! Match score derivation from raw goal events.
//!
//! Own goals are stored against the scorer's own team but count for the
//! opponent. The score is re-derived from the events every time it is needed.

use crate::snapshot::{GoalEvent, MatchRecord, TeamId};

/// Result of a match from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn from_goals(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => MatchResult::Win,
            std::cmp::Ordering::Equal => MatchResult::Draw,
            std::cmp::Ordering::Less => MatchResult::Loss,
        }
    }
}

/// Final score of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Goals credited to `team_id` in a match against `opponent_id`
pub fn goals_for_team(goals: &[GoalEvent], team_id: TeamId, opponent_id: TeamId) -> u32 {
    goals
        .iter()
        .filter(|g| {
            (g.team_id == team_id && !g.kind.is_own_goal())
                || (g.team_id == opponent_id && g.kind.is_own_goal())
        })
        .count() as u32
}

/// Score of a match given its participants
pub fn score(goals: &[GoalEvent], home_id: TeamId, away_id: TeamId) -> Score {
    Score {
        home: goals_for_team(goals, home_id, away_id),
        away: goals_for_team(goals, away_id, home_id),
    }
}

/// Score of a match record, `None` while either side is unassigned
pub fn match_score(record: &MatchRecord) -> Option<Score> {
    let (home, away) = record.teams()?;
    Some(score(&record.goals, home, away))
}

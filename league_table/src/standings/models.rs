//! Standings value objects returned by the engine.

use super::config::StandingsConfig;
use super::score::MatchResult;
use crate::snapshot::{GroupId, PlayerId, Team, TeamId};
use serde::{Deserialize, Serialize};

/// Per-team totals for one group, plus the final table position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    /// Team ID
    pub team_id: TeamId,
    /// Team name
    pub team_name: String,
    /// Finished matches played
    pub played: u32,
    /// Finished matches played at home
    pub home_played: u32,
    /// Finished matches played away
    pub away_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Goals for minus goals against, kept in step by [`TeamStanding::record_result`]
    pub goal_difference: i32,
    pub points: u32,
    /// Yellow cards (second yellows included)
    pub yellow_cards: u32,
    /// Red cards (second yellows included)
    pub red_cards: u32,
    /// Disciplinary penalty total, informational only
    pub fair_play: u32,
    /// 1-indexed table position, 0 until ordering is final
    pub rank: usize,
}

impl TeamStanding {
    /// Create an empty standing for a team
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            played: 0,
            home_played: 0,
            away_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            yellow_cards: 0,
            red_cards: 0,
            fair_play: 0,
            rank: 0,
        }
    }

    /// Record one finished match from this team's point of view
    pub fn record_result(
        &mut self,
        scored: u32,
        conceded: u32,
        at_home: bool,
        config: &StandingsConfig,
    ) {
        self.played += 1;
        if at_home {
            self.home_played += 1;
        } else {
            self.away_played += 1;
        }

        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;

        let result = MatchResult::from_goals(scored, conceded);
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Draw => self.draws += 1,
            MatchResult::Loss => self.losses += 1,
        }
        self.points += config.points_for(result);
    }

    /// Primary ranking triple; teams sharing it form a head-to-head cluster
    pub fn primary_key(&self) -> (u32, i32, u32) {
        (self.points, self.goal_difference, self.goals_for)
    }
}

/// Per-player tallies for the leaderboards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team_name: String,
    /// Goals scored, own goals excluded
    pub goals: u32,
    /// Yellow and second-yellow cards
    pub yellow_cards: u32,
    /// Red and second-yellow cards
    pub red_cards: u32,
}

impl PlayerStanding {
    pub fn new(player_id: PlayerId, player_name: String, team_name: String) -> Self {
        Self {
            player_id,
            player_name,
            team_name,
            goals: 0,
            yellow_cards: 0,
            red_cards: 0,
        }
    }

    pub fn has_cards(&self) -> bool {
        self.yellow_cards > 0 || self.red_cards > 0
    }
}

/// Full output of a group standings computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group_id: GroupId,
    pub group_name: String,
    /// Final table, ordered by rank
    pub standings: Vec<TeamStanding>,
    pub top_scorers: Vec<PlayerStanding>,
    pub most_cards: Vec<PlayerStanding>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn team(name: &str) -> Team {
        Team {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_record_result_win_draw_loss() {
        let config = StandingsConfig::default();
        let mut standing = TeamStanding::new(&team("Red"));
        standing.record_result(2, 1, true, &config);
        standing.record_result(0, 0, false, &config);
        standing.record_result(1, 4, false, &config);

        assert_eq!(standing.played, 3);
        assert_eq!(standing.home_played, 1);
        assert_eq!(standing.away_played, 2);
        assert_eq!((standing.wins, standing.draws, standing.losses), (1, 1, 1));
        assert_eq!(standing.goals_for, 3);
        assert_eq!(standing.goals_against, 5);
        assert_eq!(standing.goal_difference, -2);
        assert_eq!(standing.points, 4);
        assert_eq!(standing.primary_key(), (4, -2, 3));
    }

    #[test]
    fn test_new_standing_is_empty() {
        let standing = TeamStanding::new(&team("Blue"));
        assert_eq!(standing.team_name, "Blue");
        assert_eq!(standing.played, 0);
        assert_eq!(standing.rank, 0);
    }

    #[test]
    fn test_player_has_cards() {
        let mut player = PlayerStanding::new(Uuid::new_v4(), "Ann".to_string(), "Red".to_string());
        assert!(!player.has_cards());
        player.red_cards = 1;
        assert!(player.has_cards());
    }
}

//! Standings scoring rules.

use super::score::MatchResult;
use serde::{Deserialize, Serialize};

/// Points, disciplinary weights and leaderboard size used by one computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsConfig {
    /// League points for a win (default: 3)
    pub points_for_win: u32,

    /// League points for a draw (default: 1)
    pub points_for_draw: u32,

    /// League points for a loss (default: 0)
    pub points_for_loss: u32,

    /// Fair-play penalty for a yellow card (default: 1)
    pub yellow_card_weight: u32,

    /// Fair-play penalty for a red or second yellow card (default: 3)
    pub red_card_weight: u32,

    /// Maximum entries in the group top-scorer and most-carded lists (default: 10)
    pub leaderboard_limit: usize,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            points_for_win: 3,
            points_for_draw: 1,
            points_for_loss: 0,
            yellow_card_weight: 1,
            red_card_weight: 3,
            leaderboard_limit: 10,
        }
    }
}

impl StandingsConfig {
    /// League points awarded for a result
    pub fn points_for(&self, result: MatchResult) -> u32 {
        match result {
            MatchResult::Win => self.points_for_win,
            MatchResult::Draw => self.points_for_draw,
            MatchResult::Loss => self.points_for_loss,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.points_for_draw >= self.points_for_win {
            return Err(format!(
                "points_for_draw ({}) must be less than points_for_win ({})",
                self.points_for_draw, self.points_for_win
            ));
        }

        if self.points_for_loss > self.points_for_draw {
            return Err(format!(
                "points_for_loss ({}) must not exceed points_for_draw ({})",
                self.points_for_loss, self.points_for_draw
            ));
        }

        if self.leaderboard_limit == 0 {
            return Err("leaderboard_limit must be greater than 0".to_string());
        }

        Ok(())
    }
}

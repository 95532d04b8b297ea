//! Player leaderboards: top scorers and most-carded players.

use super::models::PlayerStanding;
use crate::snapshot::{MatchRecord, Player, PlayerId, Team, TeamId};
use std::collections::HashMap;

/// Name lookups for players and their teams
pub struct Directory<'a> {
    players: HashMap<PlayerId, &'a Player>,
    teams: HashMap<TeamId, &'a Team>,
}

impl<'a> Directory<'a> {
    pub fn new(players: &'a [Player], teams: &'a [Team]) -> Self {
        Self {
            players: players.iter().map(|p| (p.id, p)).collect(),
            teams: teams.iter().map(|t| (t.id, t)).collect(),
        }
    }

    fn team_name(&self, team_id: TeamId) -> String {
        self.teams
            .get(&team_id)
            .map(|t| t.name.clone())
            .unwrap_or_default()
    }

    /// Fresh standing for a player. Players missing from the directory keep an
    /// empty name and take the team name of the event that mentioned them.
    fn standing(&self, player_id: PlayerId, event_team_id: TeamId) -> PlayerStanding {
        match self.players.get(&player_id) {
            Some(player) => PlayerStanding::new(
                player_id,
                player.name.clone(),
                self.team_name(player.team_id),
            ),
            None => PlayerStanding::new(player_id, String::new(), self.team_name(event_team_id)),
        }
    }
}

/// Per-player tallies in first-appearance order
struct PlayerTally<'d, 'a> {
    directory: &'d Directory<'a>,
    standings: Vec<PlayerStanding>,
    index: HashMap<PlayerId, usize>,
}

impl<'d, 'a> PlayerTally<'d, 'a> {
    fn new(directory: &'d Directory<'a>) -> Self {
        Self {
            directory,
            standings: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn entry(&mut self, player_id: PlayerId, event_team_id: TeamId) -> &mut PlayerStanding {
        let idx = match self.index.get(&player_id) {
            Some(idx) => *idx,
            None => {
                let idx = self.standings.len();
                self.standings
                    .push(self.directory.standing(player_id, event_team_id));
                self.index.insert(player_id, idx);
                idx
            }
        };
        &mut self.standings[idx]
    }

    fn count_goals(&mut self, record: &MatchRecord) {
        for goal in record.goals.iter().filter(|g| !g.kind.is_own_goal()) {
            self.entry(goal.player_id, goal.team_id).goals += 1;
        }
    }

    fn count_cards(&mut self, record: &MatchRecord) {
        for card in &record.cards {
            let standing = self.entry(card.player_id, card.team_id);
            if card.kind.counts_as_yellow() {
                standing.yellow_cards += 1;
            }
            if card.kind.counts_as_red() {
                standing.red_cards += 1;
            }
        }
    }

    fn into_standings(self) -> Vec<PlayerStanding> {
        self.standings
    }
}

/// Goal scorers ordered by goals, most first. Equal tallies keep
/// first-appearance order.
fn rank_scorers(standings: &[PlayerStanding], limit: Option<usize>) -> Vec<PlayerStanding> {
    let mut scorers: Vec<PlayerStanding> =
        standings.iter().filter(|p| p.goals > 0).cloned().collect();
    scorers.sort_by(|a, b| b.goals.cmp(&a.goals));
    if let Some(limit) = limit {
        scorers.truncate(limit);
    }
    scorers
}

/// Booked players ordered by red cards, then yellow cards
fn rank_carded(standings: &[PlayerStanding], limit: usize) -> Vec<PlayerStanding> {
    let mut carded: Vec<PlayerStanding> =
        standings.iter().filter(|p| p.has_cards()).cloned().collect();
    carded.sort_by(|a, b| {
        b.red_cards
            .cmp(&a.red_cards)
            .then_with(|| b.yellow_cards.cmp(&a.yellow_cards))
    });
    carded.truncate(limit);
    carded
}

/// Group leaderboards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboards {
    pub top_scorers: Vec<PlayerStanding>,
    pub most_cards: Vec<PlayerStanding>,
}

/// Build the top-scorer and most-carded lists from a set of counted matches
pub fn build_leaderboards(
    matches: &[&MatchRecord],
    directory: &Directory<'_>,
    limit: usize,
) -> Leaderboards {
    let mut tally = PlayerTally::new(directory);
    for record in matches {
        tally.count_goals(record);
        tally.count_cards(record);
    }
    let standings = tally.into_standings();

    Leaderboards {
        top_scorers: rank_scorers(&standings, Some(limit)),
        most_cards: rank_carded(&standings, limit),
    }
}

/// Tournament-wide scorer list over all finished matches, group or knockout
pub fn tournament_top_scorers(
    matches: &[MatchRecord],
    directory: &Directory<'_>,
    top_n: Option<usize>,
) -> Vec<PlayerStanding> {
    let mut tally = PlayerTally::new(directory);
    for record in matches.iter().filter(|m| m.is_finished()) {
        tally.count_goals(record);
    }
    rank_scorers(&tally.into_standings(), top_n)
}

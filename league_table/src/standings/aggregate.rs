//! Team statistics aggregation over a group's finished matches.

use super::config::StandingsConfig;
use super::models::TeamStanding;
use super::score;
use crate::snapshot::{CardKind, GroupId, MatchRecord, Team, TeamId};
use log::debug;
use std::collections::HashMap;

/// Matches that count for a group table: finished, recorded against the group,
/// and with both participants assigned
pub fn counted_matches(matches: &[MatchRecord], group_id: GroupId) -> Vec<&MatchRecord> {
    matches
        .iter()
        .filter(|m| m.is_finished() && m.is_in_group(group_id) && m.teams().is_some())
        .collect()
}

/// Team standings arena keyed by team id
///
/// Standings live in roster order in a `Vec`; the map holds each team's index.
pub struct StandingsTable {
    standings: Vec<TeamStanding>,
    index: HashMap<TeamId, usize>,
}

impl StandingsTable {
    /// Create an empty table for a roster. Repeated team ids are kept once.
    pub fn new(teams: &[Team]) -> Self {
        let mut standings = Vec::with_capacity(teams.len());
        let mut index = HashMap::with_capacity(teams.len());

        for team in teams {
            if index.contains_key(&team.id) {
                continue;
            }
            index.insert(team.id, standings.len());
            standings.push(TeamStanding::new(team));
        }

        Self { standings, index }
    }

    fn get_mut(&mut self, team_id: TeamId) -> Option<&mut TeamStanding> {
        self.index
            .get(&team_id)
            .copied()
            .map(|idx| &mut self.standings[idx])
    }

    /// Fold one finished match into the table
    pub fn record_match(&mut self, record: &MatchRecord, config: &StandingsConfig) {
        let (Some((home_id, away_id)), Some(s)) = (record.teams(), score::match_score(record)) else {
            return;
        };

        if let Some(home) = self.get_mut(home_id) {
            home.record_result(s.home, s.away, true, config);
        }
        if let Some(away) = self.get_mut(away_id) {
            away.record_result(s.away, s.home, false, config);
        }

        for card in &record.cards {
            let Some(standing) = self.get_mut(card.team_id) else {
                continue;
            };
            match card.kind {
                CardKind::Yellow => {
                    standing.yellow_cards += 1;
                    standing.fair_play += config.yellow_card_weight;
                }
                CardKind::SecondYellow => {
                    standing.yellow_cards += 1;
                    standing.red_cards += 1;
                    standing.fair_play += config.red_card_weight;
                }
                CardKind::Red => {
                    standing.red_cards += 1;
                    standing.fair_play += config.red_card_weight;
                }
            }
        }
    }

    /// Standings in roster order
    pub fn into_standings(self) -> Vec<TeamStanding> {
        self.standings
    }
}

/// Aggregate per-team totals from finished matches, in roster order
pub fn aggregate(
    teams: &[Team],
    matches: &[&MatchRecord],
    config: &StandingsConfig,
) -> Vec<TeamStanding> {
    let mut table = StandingsTable::new(teams);
    for record in matches {
        table.record_match(record, config);
    }

    debug!(
        "Aggregated {} finished matches for {} teams",
        matches.len(),
        teams.len()
    );

    table.into_standings()
}

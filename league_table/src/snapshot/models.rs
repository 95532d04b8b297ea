//! Snapshot data models: the already-loaded input of a standings computation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tournament ID type
pub type TournamentId = Uuid;

/// Group ID type
pub type GroupId = Uuid;

/// Team ID type
pub type TeamId = Uuid;

/// Player ID type
pub type PlayerId = Uuid;

/// Match ID type
pub type MatchId = Uuid;

/// Match lifecycle status. Only `Finished` matches count towards standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
    Cancelled,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::Live => write!(f, "live"),
            MatchStatus::Finished => write!(f, "finished"),
            MatchStatus::Postponed => write!(f, "postponed"),
            MatchStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Kind of goal event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalKind {
    Regular,
    Penalty,
    /// Recorded against the scorer's own team, credited to the opponent
    #[serde(rename = "OWNGOAL")]
    OwnGoal,
    Foul,
}

impl GoalKind {
    pub fn is_own_goal(self) -> bool {
        self == GoalKind::OwnGoal
    }
}

/// Kind of card event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardKind {
    Yellow,
    /// Counts as a yellow and a sending-off at the same time
    #[serde(rename = "SECONDYELLOW")]
    SecondYellow,
    Red,
}

impl CardKind {
    /// Whether the card adds to a yellow tally
    pub fn counts_as_yellow(self) -> bool {
        matches!(self, CardKind::Yellow | CardKind::SecondYellow)
    }

    /// Whether the card adds to a red tally
    pub fn counts_as_red(self) -> bool {
        matches!(self, CardKind::Red | CardKind::SecondYellow)
    }
}

/// Goal scored during a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    /// Team the event is recorded against (the scorer's own team for own goals)
    pub team_id: TeamId,
    /// Scoring player
    pub player_id: PlayerId,
    /// Goal kind
    pub kind: GoalKind,
    /// Match minute
    pub minute: u16,
}

impl GoalEvent {
    pub fn new(team_id: TeamId, player_id: PlayerId, kind: GoalKind, minute: u16) -> Self {
        Self {
            team_id,
            player_id,
            kind,
            minute,
        }
    }
}

/// Card shown during a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEvent {
    /// Team of the booked player
    pub team_id: TeamId,
    /// Booked player
    pub player_id: PlayerId,
    /// Card kind
    pub kind: CardKind,
    /// Match minute
    pub minute: u16,
}

impl CardEvent {
    pub fn new(team_id: TeamId, player_id: PlayerId, kind: CardKind, minute: u16) -> Self {
        Self {
            team_id,
            player_id,
            kind,
            minute,
        }
    }
}

/// A single match with its eagerly loaded goal and card events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Match ID
    pub id: MatchId,
    /// Tournament the match belongs to
    pub tournament_id: TournamentId,
    /// Group stage the match belongs to (`None` for knockout fixtures)
    #[serde(default)]
    pub group_id: Option<GroupId>,
    /// Home team, unset while the fixture is a placeholder
    #[serde(default)]
    pub home_team_id: Option<TeamId>,
    /// Away team, unset while the fixture is a placeholder
    #[serde(default)]
    pub away_team_id: Option<TeamId>,
    /// Lifecycle status
    pub status: MatchStatus,
    /// Goals in recorded order
    #[serde(default)]
    pub goals: Vec<GoalEvent>,
    /// Cards in recorded order
    #[serde(default)]
    pub cards: Vec<CardEvent>,
}

impl MatchRecord {
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Both participants, if both have been assigned
    pub fn teams(&self) -> Option<(TeamId, TeamId)> {
        self.home_team_id.zip(self.away_team_id)
    }

    /// Whether the match belongs to the given group
    pub fn is_in_group(&self, group_id: GroupId) -> bool {
        self.group_id == Some(group_id)
    }
}

/// Team entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Player entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
}

/// Group stage of a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group ID
    pub id: GroupId,
    /// Owning tournament
    pub tournament_id: TournamentId,
    /// Display name (e.g. "Group A")
    pub name: String,
    /// Teams drawn into the group
    #[serde(default)]
    pub team_ids: Vec<TeamId>,
}

/// Tournament entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
}

//! Standings error types.

use crate::snapshot::{GroupId, TournamentId};
use thiserror::Error;

/// Standings errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StandingsError {
    /// Group is not part of the snapshot
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    /// Tournament is not part of the snapshot
    #[error("Tournament not found: {0}")]
    TournamentNotFound(TournamentId),

    /// Scoring rules failed validation
    #[error("Invalid standings configuration: {0}")]
    InvalidConfig(String),
}

impl StandingsError {
    /// Whether the error is a not-found outcome rather than a setup problem
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StandingsError::GroupNotFound(_) | StandingsError::TournamentNotFound(_)
        )
    }

    /// Get a client-safe error message
    pub fn client_message(&self) -> String {
        match self {
            StandingsError::GroupNotFound(_) => "Group not found".to_string(),
            StandingsError::TournamentNotFound(_) => "Tournament not found".to_string(),
            StandingsError::InvalidConfig(_) => "Internal server error".to_string(),
        }
    }
}

/// Result type for standings operations
pub type StandingsResult<T> = Result<T, StandingsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_classification() {
        assert!(StandingsError::GroupNotFound(Uuid::nil()).is_not_found());
        assert!(StandingsError::TournamentNotFound(Uuid::nil()).is_not_found());
        assert!(!StandingsError::InvalidConfig("x".to_string()).is_not_found());
    }

    #[test]
    fn test_client_message_hides_ids() {
        let id = Uuid::new_v4();
        let err = StandingsError::GroupNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
        assert!(!err.client_message().contains(&id.to_string()));
    }
}

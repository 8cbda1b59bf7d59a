use thiserror::Error;

use super::CompetitorId;

/// Errors produced while building groups or recording results.
#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Competitor {0} is not part of this group")]
    UnknownCompetitor(String),

    #[error("Competitor {0} can't play against themselves")]
    SelfMatch(CompetitorId),

    #[error("No group named {0}")]
    UnknownGroup(String),

    #[error("{score_for}:{score_against} is not a valid result when playing to {target_wins}")]
    InvalidScore {
        score_for: u32,
        score_against: u32,
        target_wins: u32,
    },

    #[cfg(feature = "serde")]
    #[error("Failed to (de)serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for league operations
pub type Result<T> = std::result::Result<T, LeagueError>;

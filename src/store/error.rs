use thiserror::Error;
use uuid::Uuid;

use crate::core::LeagueError;

/// Errors that can occur while loading or saving competitions
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No competition with id {0}")]
    NotFound(Uuid),

    #[error("Import data is not valid: {0}")]
    InvalidImport(String),

    #[error(transparent)]
    League(#[from] LeagueError),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

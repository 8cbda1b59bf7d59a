//! Core types shared by every other module: competitors, directed match
//! scores and the crate error type.
mod competitor;
mod error;
mod score;

pub use competitor::{Competitor, CompetitorId};
pub use error::{LeagueError, Result};
pub use score::{valid_scores, MatchScore};

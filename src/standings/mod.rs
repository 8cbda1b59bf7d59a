//! Standings for a single round-robin group.
//!
//! The pipeline is a chain of pure functions over a [`MatchMatrix`]:
//!
//! 1. [`aggregate`] sums each competitor's reported results.
//! 2. [`resolve_ties`] orders by league points and breaks ties head to head.
//! 3. [`assign_ranks`] hands out competition ranks, sharing a rank only
//!    once every match in the group has been played.
//!
//! [`Standings::compute`] runs all three. Nothing is cached, so the result
//! is always consistent with the matrix it was computed from.
//!
//! # Example
//!
//! ```
//! use rs_league::core::CompetitorId;
//! use rs_league::standings::{MatchMatrix, Standings};
//!
//! let mut group = MatchMatrix::from_names(["Ahn", "Baek", "Cho"], 3).unwrap();
//! group.record_match(CompetitorId::new(1), CompetitorId::new(2), 3, 1).unwrap();
//! group.record_match(CompetitorId::new(2), CompetitorId::new(3), 3, 0).unwrap();
//!
//! let standings = Standings::compute(&group);
//! assert_eq!(standings.leader().unwrap().name, "Baek");
//! assert!(!standings.is_complete());
//! ```
mod aggregate;
mod display;
mod generator;
mod matrix;
mod rank;
mod table;
mod tiebreak;

#[cfg(any(test, feature = "standings-test-util"))]
pub mod test_util;

pub use aggregate::{aggregate, CompetitorStats, POINTS_PER_LOSS, POINTS_PER_WIN};
pub use display::{sorted_by, SortKey, SortOrder, SortState};
pub use generator::RandomResultsGenerator;
#[cfg(feature = "serde")]
pub use matrix::{MatrixRecord, RecordedMatch};
pub use matrix::MatchMatrix;
pub use rank::assign_ranks;
pub use table::Standings;
pub use tiebreak::resolve_ties;

//! # RS-League
//!
//! RS League is a library for running round-robin competitions. It keeps
//! the results of every group in a mirrored match matrix and turns them
//! into ranked standings.
//!
//! ## Core
//!
//! The core module contains competitor ids, directed match scores and the
//! crate error type.
//!
//! ```
//! use rs_league::core::{valid_scores, MatchScore};
//!
//! let score = MatchScore::new(3, 1);
//! assert!(score.is_win());
//! assert!(score.validate(3).is_ok());
//! assert_eq!(valid_scores(2), vec![(2, 0), (2, 1), (0, 2), (1, 2)]);
//! ```
//!
//! ## Standings
//!
//! Standings are computed from a [`standings::MatchMatrix`]:
//!
//! - Every competitor gets 2 points per win and 1 per loss.
//! - Competitors level on points are ordered by the matches played among
//!   themselves, then by overall set difference.
//! - Ranks are shared ("1-2-2-4") only once every match in the group has
//!   been played.
//!
//! ```
//! use rs_league::core::CompetitorId;
//! use rs_league::standings::{MatchMatrix, Standings};
//!
//! let mut matrix = MatchMatrix::from_names(["Ahn", "Baek", "Cho"], 3).unwrap();
//! matrix.record_match(CompetitorId::new(1), CompetitorId::new(2), 3, 1).unwrap();
//!
//! let standings = Standings::compute(&matrix);
//! assert_eq!(standings.leader().unwrap().name, "Ahn");
//! assert!(!standings.is_complete());
//! ```
//!
//! ## Competition
//!
//! A [`competition::Competition`] groups several matrices under a title
//! and a date. It's built with [`competition::CompetitionBuilder`].
//!
//! ## Store
//!
//! With the `serde` feature (on by default) competitions can be saved to
//! and loaded from a [`store::CompetitionStore`], either in memory or in a
//! single JSON file.

/// Competitors, match scores and errors.
pub mod core;

/// Match matrices, statistics, tie resolution and ranking.
pub mod standings;

pub mod competition;

#[cfg(feature = "serde")]
pub mod store;

//! Competitions: a dated, titled set of independent round-robin groups.
//!
//! A [`Competition`] owns one [`MatchMatrix`](crate::standings::MatchMatrix)
//! per group and is the record that gets persisted. Create one with
//! [`CompetitionBuilder`], optionally seeded from a [`CompetitionConfig`].
//!
//! # Example
//!
//! ```
//! use rs_league::competition::CompetitionBuilder;
//!
//! let mut competition = CompetitionBuilder::new()
//!     .title("Club night")
//!     .target_wins(3)
//!     .add_group(vec!["Ahn", "Baek", "Cho"])
//!     .build()
//!     .unwrap();
//!
//! competition.record_match_by_name("A", "Cho", "Ahn", 3, 1).unwrap();
//!
//! let standings = competition.standings("A").unwrap();
//! assert_eq!(standings.leader().unwrap().name, "Cho");
//! ```
mod builder;
mod config;
mod record;

pub use builder::CompetitionBuilder;
pub use config::{CompetitionConfig, DEFAULT_TITLE, MAX_GROUPS};
pub use record::{Competition, CompetitionSummary};
#[cfg(feature = "serde")]
pub use record::CompetitionRecord;

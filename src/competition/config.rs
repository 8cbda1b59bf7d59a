use chrono::NaiveDate;

use crate::core::{LeagueError, Result};

/// Automatically named groups get a single letter, so at most 26 of them
/// can be created without explicit names.
pub const MAX_GROUPS: usize = 26;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Untitled competition";

/// Settings for a new competition.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionConfig {
    /// Display title
    pub title: String,
    /// Day the competition is held
    pub date: NaiveDate,
    /// Sets needed to win a match
    pub target_wins: u32,
    /// Number of groups
    pub group_count: usize,
    /// Competitors in each group
    pub players_per_group: usize,
}

impl Default for CompetitionConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            date: chrono::Local::now().date_naive(),
            target_wins: 3,
            group_count: 1,
            players_per_group: 4,
        }
    }
}

impl CompetitionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the competition configuration
    ///
    /// Every group a config describes is named automatically, so
    /// `group_count` is capped at [`MAX_GROUPS`].
    pub fn validate(&self) -> Result<()> {
        validate_target_wins(self.target_wins)?;

        if self.group_count < 1 {
            return Err(LeagueError::InvalidConfiguration(
                "a competition needs at least one group".to_string(),
            ));
        }

        if self.group_count > MAX_GROUPS {
            return Err(LeagueError::InvalidConfiguration(format!(
                "group_count ({}) cannot exceed {}",
                self.group_count, MAX_GROUPS
            )));
        }

        validate_players_per_group(self.players_per_group)
    }

    /// Total number of competitors across every group.
    pub fn total_players(&self) -> usize {
        self.group_count * self.players_per_group
    }
}

pub(crate) fn validate_target_wins(target_wins: u32) -> Result<()> {
    if target_wins < 1 {
        return Err(LeagueError::InvalidConfiguration(
            "target_wins must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_players_per_group(players: usize) -> Result<()> {
    if players < 2 {
        return Err(LeagueError::InvalidConfiguration(format!(
            "players_per_group must be at least 2, got {}",
            players
        )));
    }
    Ok(())
}

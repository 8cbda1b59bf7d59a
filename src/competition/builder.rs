use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::event;

use crate::core::{Competitor, LeagueError, Result};
use crate::standings::MatchMatrix;

use super::config::{
    validate_players_per_group, validate_target_wins, CompetitionConfig, DEFAULT_TITLE, MAX_GROUPS,
};
use super::record::Competition;

/// Builder for constructing [`Competition`] instances
///
/// Blank competitor names are replaced with a placeholder built from the
/// group name and the slot, e.g. `"B Player3"`. Groups added without a
/// name get the next free letter.
///
/// # Example
///
/// ```
/// use rs_league::competition::CompetitionBuilder;
///
/// let competition = CompetitionBuilder::new()
///     .title("Thursday ladder")
///     .target_wins(2)
///     .add_group(vec!["Ahn", "Baek", "Cho"])
///     .add_group(vec!["Dong", "", "Eun"])
///     .build()
///     .unwrap();
///
/// assert_eq!(competition.group_names().collect::<Vec<_>>(), vec!["A", "B"]);
/// assert_eq!(competition.group("B").unwrap().roster()[1].name, "B Player2");
/// ```
#[derive(Debug, Default)]
pub struct CompetitionBuilder {
    title: Option<String>,
    date: Option<NaiveDate>,
    target_wins: Option<u32>,
    groups: Vec<(Option<String>, Vec<String>)>,
}

impl CompetitionBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a configuration, with `group_count` groups of
    /// `players_per_group` placeholder competitors.
    pub fn from_config(config: &CompetitionConfig) -> Self {
        Self::new()
            .title(config.title.clone())
            .date(config.date)
            .target_wins(config.target_wins)
            .placeholder_groups(config.group_count, config.players_per_group)
    }

    /// Set the display title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the date. Defaults to today.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the number of sets needed to win a match. Defaults to 3.
    pub fn target_wins(mut self, target_wins: u32) -> Self {
        self.target_wins = Some(target_wins);
        self
    }

    /// Add a group named with the next free letter.
    pub fn add_group<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .push((None, names.into_iter().map(Into::into).collect()));
        self
    }

    /// Add a group with an explicit name.
    pub fn add_named_group<I, S>(mut self, group: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push((
            Some(group.into()),
            names.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Add `group_count` letter-named groups of `players_per_group`
    /// placeholder competitors each.
    pub fn placeholder_groups(mut self, group_count: usize, players_per_group: usize) -> Self {
        for _ in 0..group_count {
            self.groups.push((None, vec![String::new(); players_per_group]));
        }
        self
    }

    /// Build the Competition
    ///
    /// Returns [`LeagueError::InvalidConfiguration`] if there are no groups,
    /// a group has fewer than two competitors, two groups share a name,
    /// more than [`MAX_GROUPS`] groups need a letter, or `target_wins` is
    /// zero. Explicitly named groups don't count towards [`MAX_GROUPS`].
    pub fn build(self) -> Result<Competition> {
        if self.groups.is_empty() {
            return Err(LeagueError::InvalidConfiguration(
                "No groups configured. Use add_group(), add_named_group() or placeholder_groups()"
                    .to_string(),
            ));
        }

        let title = self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let target_wins = self.target_wins.unwrap_or(3);
        validate_target_wins(target_wins)?;
        for (_, names) in &self.groups {
            validate_players_per_group(names.len())?;
        }

        let explicit: Vec<String> = self
            .groups
            .iter()
            .filter_map(|(name, _)| name.clone())
            .collect();
        let mut letters = (0..MAX_GROUPS)
            .map(group_letter)
            .filter(|letter| !explicit.contains(letter));

        let mut groups = BTreeMap::new();
        for (name, names) in self.groups {
            let group_name = match name {
                Some(name) => name,
                None => letters.next().ok_or_else(|| {
                    LeagueError::InvalidConfiguration(format!(
                        "ran out of group letters after {}",
                        MAX_GROUPS
                    ))
                })?,
            };

            let roster = Competitor::roster_from_names(
                names
                    .into_iter()
                    .enumerate()
                    .map(|(slot, name)| fill_blank(&group_name, slot, name)),
            );
            let matrix = MatchMatrix::new(roster, target_wins)?;

            if groups.contains_key(&group_name) {
                return Err(LeagueError::InvalidConfiguration(format!(
                    "group {} is defined twice",
                    group_name
                )));
            }
            groups.insert(group_name, matrix);
        }

        event!(
            tracing::Level::DEBUG,
            title = %title,
            groups = groups.len(),
            target_wins,
            "Created competition"
        );

        Ok(Competition::new(date, title, target_wins, groups))
    }
}

/// `0 -> "A"`, `1 -> "B"`, ...
fn group_letter(index: usize) -> String {
    char::from(b'A' + index as u8).to_string()
}

fn fill_blank(group: &str, slot: usize, name: String) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        format!("{} Player{}", group, slot + 1)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let competition = CompetitionBuilder::new()
            .add_group(vec!["A1", "A2"])
            .build()
            .unwrap();

        assert_eq!(competition.title(), DEFAULT_TITLE);
        assert_eq!(competition.target_wins(), 3);
    }

    #[test]
    fn test_builder_no_groups_error() {
        let result = CompetitionBuilder::new().title("Empty").build();
        assert!(matches!(
            result,
            Err(LeagueError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_builder_small_group_error() {
        let result = CompetitionBuilder::new()
            .add_group(vec!["A1", "A2"])
            .add_group(vec!["Lonely"])
            .build();
        assert!(matches!(
            result,
            Err(LeagueError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_builder_zero_target_error() {
        let result = CompetitionBuilder::new()
            .target_wins(0)
            .add_group(vec!["A1", "A2"])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_placeholder_names() {
        let competition = CompetitionBuilder::new()
            .placeholder_groups(2, 3)
            .build()
            .unwrap();

        let names: Vec<&str> = competition
            .group("B")
            .unwrap()
            .roster()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["B Player1", "B Player2", "B Player3"]);
    }

    #[test]
    fn test_blank_names_are_trimmed_then_filled() {
        let competition = CompetitionBuilder::new()
            .add_group(vec!["  Ahn ", "   ", "Cho"])
            .build()
            .unwrap();
        let roster = competition.group("A").unwrap().roster();
        assert_eq!(roster[0].name, "Ahn");
        assert_eq!(roster[1].name, "A Player2");
        assert_eq!(roster[1].id.get(), 2);
    }

    #[test]
    fn test_named_groups_skip_letters() {
        let competition = CompetitionBuilder::new()
            .add_named_group("A", vec!["x", "y"])
            .add_group(vec!["p", "q"])
            .build()
            .unwrap();
        assert_eq!(competition.group_names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_group_name_error() {
        let result = CompetitionBuilder::new()
            .add_named_group("Finals", vec!["x", "y"])
            .add_named_group("Finals", vec!["p", "q"])
            .build();
        assert!(matches!(
            result,
            Err(LeagueError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = CompetitionConfig {
            title: "Autumn open".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            target_wins: 2,
            group_count: 3,
            players_per_group: 4,
        };
        let competition = CompetitionBuilder::from_config(&config).build().unwrap();

        assert_eq!(competition.title(), "Autumn open");
        assert_eq!(competition.target_wins(), 2);
        assert_eq!(
            competition.group_names().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        for (_, matrix) in competition.groups() {
            assert_eq!(matrix.len(), 4);
            assert_eq!(matrix.target_wins(), 2);
        }
    }

    #[test]
    fn test_named_groups_are_not_capped() {
        let mut builder = CompetitionBuilder::new();
        for i in 1..=MAX_GROUPS + 1 {
            builder = builder.add_named_group(format!("Flight {i}"), vec!["x", "y"]);
        }
        let competition = builder.add_group(vec!["p", "q"]).build().unwrap();

        assert_eq!(competition.groups().len(), MAX_GROUPS + 2);
        assert!(competition.group("A").is_some());
    }

    #[test]
    fn test_unnamed_groups_run_out_of_letters() {
        let result = CompetitionBuilder::new()
            .placeholder_groups(MAX_GROUPS + 1, 2)
            .build();
        assert!(matches!(
            result,
            Err(LeagueError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_group_letter() {
        assert_eq!(group_letter(0), "A");
        assert_eq!(group_letter(25), "Z");
    }
}

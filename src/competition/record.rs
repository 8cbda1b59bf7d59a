use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::core::{CompetitorId, LeagueError, MatchScore, Result};
use crate::standings::{MatchMatrix, SortState, Standings};

/// The id, date and title of a competition, for listing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompetitionSummary {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
}

/// A competition made of independent round-robin groups.
///
/// This is the record handed to persistence. Standings are never stored,
/// they're recomputed from the groups on request. Loading goes through
/// [`CompetitionRecord`] so a stored competition is held to the same rules
/// as a built one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CompetitionRecord", into = "CompetitionRecord")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competition {
    id: Uuid,
    date: NaiveDate,
    title: String,
    target_wins: u32,
    groups: BTreeMap<String, MatchMatrix>,
}

impl Competition {
    /// Create a competition (internal - use CompetitionBuilder instead)
    pub(crate) fn new(
        date: NaiveDate,
        title: String,
        target_wins: u32,
        groups: BTreeMap<String, MatchMatrix>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            date,
            title,
            target_wins,
            groups,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target_wins(&self) -> u32 {
        self.target_wins
    }

    pub fn summary(&self) -> CompetitionSummary {
        CompetitionSummary {
            id: self.id,
            date: self.date,
            title: self.title.clone(),
        }
    }

    pub fn group(&self, name: &str) -> Option<&MatchMatrix> {
        self.groups.get(name)
    }

    /// Group names in order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn groups(&self) -> &BTreeMap<String, MatchMatrix> {
        &self.groups
    }

    /// Record a result in one group. This is the only way results change.
    ///
    /// # Errors
    ///
    /// [`LeagueError::UnknownGroup`] if there's no such group, otherwise
    /// whatever [`MatchMatrix::record_match`] returns.
    #[instrument(level = "debug", skip(self), fields(competition = %self.id))]
    pub fn record_match(
        &mut self,
        group: &str,
        a: CompetitorId,
        b: CompetitorId,
        score_for: u32,
        score_against: u32,
    ) -> Result<()> {
        self.group_mut(group)?
            .record_match(a, b, score_for, score_against)
    }

    /// Record a result addressing competitors by display name.
    pub fn record_match_by_name(
        &mut self,
        group: &str,
        a: &str,
        b: &str,
        score_for: u32,
        score_against: u32,
    ) -> Result<()> {
        self.group_mut(group)?
            .record_match_by_name(a, b, score_for, score_against)
    }

    /// Like [`Competition::record_match`] but first checks the score is a
    /// legal result for this competition's `target_wins`.
    pub fn record_valid_match(
        &mut self,
        group: &str,
        a: CompetitorId,
        b: CompetitorId,
        score_for: u32,
        score_against: u32,
    ) -> Result<()> {
        MatchScore::new(score_for, score_against).validate(self.target_wins)?;
        self.record_match(group, a, b, score_for, score_against)
    }

    /// Current standings of one group.
    pub fn standings(&self, group: &str) -> Result<Standings> {
        self.groups
            .get(group)
            .map(Standings::compute)
            .ok_or_else(|| LeagueError::UnknownGroup(group.to_string()))
    }

    /// Current standings of every group, keyed by group name.
    pub fn all_standings(&self) -> BTreeMap<&str, Standings> {
        self.groups
            .iter()
            .map(|(name, matrix)| (name.as_str(), Standings::compute(matrix)))
            .collect()
    }

    /// True once every group has played every match.
    pub fn is_complete(&self) -> bool {
        self.groups.values().all(MatchMatrix::is_complete)
    }

    /// Format every group's standings as Markdown, in ranking order.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("# {}\n\n", self.title));
        output.push_str(&format!("- **Date**: {}\n", self.date));
        output.push_str(&format!("- **Sets to win**: {}\n", self.target_wins));
        output.push_str(&format!("- **Groups**: {}\n", self.groups.len()));
        let reported: usize = self.groups.values().map(MatchMatrix::reported_pairs).sum();
        let total: usize = self.groups.values().map(MatchMatrix::total_pairs).sum();
        output.push_str(&format!("- **Matches played**: {}/{}\n\n", reported, total));

        for (name, standings) in self.all_standings() {
            output.push_str(&standings.to_markdown(name, SortState::default()));
        }
        output
    }

    /// Serialize to pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON. Every stored result is replayed through the matrix
    /// so mirrored pairs are rebuilt and bad ids are rejected.
    ///
    /// # Errors
    ///
    /// [`LeagueError::Json`] for malformed data and
    /// [`LeagueError::InvalidConfiguration`] for a competition that
    /// [`CompetitionBuilder`](super::CompetitionBuilder) would refuse to
    /// build.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let record: CompetitionRecord = serde_json::from_str(json)?;
        Competition::try_from(record)
    }

    /// Check the rules every competition follows: at least one set to win,
    /// at least one group, and every group playing to the same target.
    #[cfg(feature = "serde")]
    fn validate(&self) -> Result<()> {
        super::config::validate_target_wins(self.target_wins)?;
        if self.groups.is_empty() {
            return Err(LeagueError::InvalidConfiguration(
                "a competition needs at least one group".to_string(),
            ));
        }
        if let Some((name, matrix)) = self
            .groups
            .iter()
            .find(|(_, matrix)| matrix.target_wins() != self.target_wins)
        {
            return Err(LeagueError::InvalidConfiguration(format!(
                "group {} plays to {} but the competition plays to {}",
                name,
                matrix.target_wins(),
                self.target_wins
            )));
        }
        Ok(())
    }

    fn group_mut(&mut self, group: &str) -> Result<&mut MatchMatrix> {
        debug!(group, "Looking up group");
        self.groups
            .get_mut(group)
            .ok_or_else(|| LeagueError::UnknownGroup(group.to_string()))
    }
}

/// Stored form of a [`Competition`]. Converting back checks it with the
/// same rules the builder enforces.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompetitionRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub target_wins: u32,
    pub groups: BTreeMap<String, MatchMatrix>,
}

#[cfg(feature = "serde")]
impl From<Competition> for CompetitionRecord {
    fn from(competition: Competition) -> Self {
        CompetitionRecord {
            id: competition.id,
            date: competition.date,
            title: competition.title,
            target_wins: competition.target_wins,
            groups: competition.groups,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<CompetitionRecord> for Competition {
    type Error = LeagueError;

    fn try_from(record: CompetitionRecord) -> Result<Self> {
        let competition = Competition {
            id: record.id,
            date: record.date,
            title: record.title,
            target_wins: record.target_wins,
            groups: record.groups,
        };
        competition.validate()?;
        Ok(competition)
    }
}

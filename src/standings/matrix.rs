use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::core::{Competitor, CompetitorId, LeagueError, MatchScore, Result};

/// The roster and pairwise results of one round-robin group.
///
/// Results are kept for every ordered pair of distinct competitors. The
/// entry for `(b, a)` is always the mirror of the entry for `(a, b)`, which
/// holds because [`MatchMatrix::record_match`] is the only way to change a
/// result and it writes both sides at once.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "MatrixRecord", into = "MatrixRecord")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMatrix {
    roster: Vec<Competitor>,
    target_wins: u32,
    // n * n, row major by roster index. The diagonal is never read.
    results: Vec<MatchScore>,
}

impl MatchMatrix {
    /// Create a group with every match unplayed.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::InvalidConfiguration`] if the roster has fewer
    /// than two competitors, contains the same id twice, or `target_wins`
    /// is zero.
    pub fn new(roster: Vec<Competitor>, target_wins: u32) -> Result<Self> {
        if roster.len() < 2 {
            return Err(LeagueError::InvalidConfiguration(format!(
                "a group needs at least 2 competitors, got {}",
                roster.len()
            )));
        }

        if target_wins < 1 {
            return Err(LeagueError::InvalidConfiguration(
                "target_wins must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(roster.len());
        if let Some(dup) = roster.iter().find(|c| !seen.insert(c.id)) {
            return Err(LeagueError::InvalidConfiguration(format!(
                "competitor id {} appears more than once",
                dup.id
            )));
        }

        let n = roster.len();
        Ok(Self {
            roster,
            target_wins,
            results: vec![MatchScore::UNPLAYED; n * n],
        })
    }

    /// Create a group from display names. Ids are assigned 1..=n in order.
    pub fn from_names<I, S>(names: I, target_wins: u32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Competitor::roster_from_names(names), target_wins)
    }

    pub fn roster(&self) -> &[Competitor] {
        &self.roster
    }

    pub fn target_wins(&self) -> u32 {
        self.target_wins
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn competitor(&self, id: CompetitorId) -> Option<&Competitor> {
        self.roster.iter().find(|c| c.id == id)
    }

    /// Look up a competitor by display name. If several share a name the
    /// first one on the roster wins.
    pub fn competitor_id(&self, name: &str) -> Option<CompetitorId> {
        self.roster.iter().find(|c| c.name == name).map(|c| c.id)
    }

    /// Record the result of the match between `a` and `b`, as seen by `a`.
    ///
    /// Recording `0:0` marks the match as unplayed again. The score isn't
    /// checked against `target_wins`; that's the caller's job (see
    /// [`MatchScore::validate`]).
    ///
    /// # Errors
    ///
    /// [`LeagueError::SelfMatch`] if `a == b` and
    /// [`LeagueError::UnknownCompetitor`] if either id isn't on the roster.
    /// The matrix is unchanged in both cases.
    #[instrument(level = "trace", skip(self))]
    pub fn record_match(
        &mut self,
        a: CompetitorId,
        b: CompetitorId,
        score_for: u32,
        score_against: u32,
    ) -> Result<()> {
        if a == b {
            return Err(LeagueError::SelfMatch(a));
        }
        let a_idx = self.require_index(a)?;
        let b_idx = self.require_index(b)?;

        let score = MatchScore::new(score_for, score_against);
        let n = self.roster.len();
        self.results[a_idx * n + b_idx] = score;
        self.results[b_idx * n + a_idx] = score.mirrored();

        debug!(
            %a,
            %b,
            score_for,
            score_against,
            reported = score.reported,
            "Recorded match"
        );
        Ok(())
    }

    /// Same as [`MatchMatrix::record_match`] but addressing competitors by
    /// display name.
    pub fn record_match_by_name(
        &mut self,
        a: &str,
        b: &str,
        score_for: u32,
        score_against: u32,
    ) -> Result<()> {
        let a_id = self
            .competitor_id(a)
            .ok_or_else(|| LeagueError::UnknownCompetitor(a.to_string()))?;
        let b_id = self
            .competitor_id(b)
            .ok_or_else(|| LeagueError::UnknownCompetitor(b.to_string()))?;
        self.record_match(a_id, b_id, score_for, score_against)
    }

    /// Reset a match back to unplayed.
    pub fn clear_match(&mut self, a: CompetitorId, b: CompetitorId) -> Result<()> {
        self.record_match(a, b, 0, 0)
    }

    /// The result of `a` against `b` from `a`'s side. `None` for a self
    /// pairing or an id that isn't on the roster.
    pub fn result(&self, a: CompetitorId, b: CompetitorId) -> Option<MatchScore> {
        if a == b {
            return None;
        }
        let a_idx = self.index_of(a)?;
        let b_idx = self.index_of(b)?;
        Some(self.score_at(a_idx, b_idx))
    }

    /// Every unordered pair once, as `(a, b, score from a's side)` with `a`
    /// before `b` in roster order.
    pub fn matches(&self) -> impl Iterator<Item = (CompetitorId, CompetitorId, MatchScore)> + '_ {
        let n = self.roster.len();
        (0..n).flat_map(move |i| {
            ((i + 1)..n).map(move |j| (self.roster[i].id, self.roster[j].id, self.score_at(i, j)))
        })
    }

    /// Number of unordered pairs that have a reported result.
    pub fn reported_pairs(&self) -> usize {
        self.matches().filter(|(_, _, score)| score.reported).count()
    }

    /// Number of unordered pairs in a full round robin.
    pub fn total_pairs(&self) -> usize {
        let n = self.roster.len();
        n * n.saturating_sub(1) / 2
    }

    /// True once every pair in the group has reported a result.
    pub fn is_complete(&self) -> bool {
        self.reported_pairs() == self.total_pairs()
    }

    pub(crate) fn index_of(&self, id: CompetitorId) -> Option<usize> {
        self.roster.iter().position(|c| c.id == id)
    }

    pub(crate) fn score_at(&self, a_idx: usize, b_idx: usize) -> MatchScore {
        self.results[a_idx * self.roster.len() + b_idx]
    }

    fn require_index(&self, id: CompetitorId) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| LeagueError::UnknownCompetitor(id.to_string()))
    }
}

/// One reported result in the stored form of a group.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecordedMatch {
    pub a: CompetitorId,
    pub b: CompetitorId,
    pub score_for: u32,
    pub score_against: u32,
}

/// Stored form of a [`MatchMatrix`]. Only reported pairs are written, once
/// each; loading replays them through `record_match`.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MatrixRecord {
    pub roster: Vec<Competitor>,
    pub target_wins: u32,
    #[serde(default)]
    pub results: Vec<RecordedMatch>,
}

#[cfg(feature = "serde")]
impl From<MatchMatrix> for MatrixRecord {
    fn from(matrix: MatchMatrix) -> Self {
        let results = matrix
            .matches()
            .filter(|(_, _, score)| score.reported)
            .map(|(a, b, score)| RecordedMatch {
                a,
                b,
                score_for: score.score_for,
                score_against: score.score_against,
            })
            .collect();
        MatrixRecord {
            roster: matrix.roster,
            target_wins: matrix.target_wins,
            results,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MatrixRecord> for MatchMatrix {
    type Error = LeagueError;

    fn try_from(record: MatrixRecord) -> Result<Self> {
        let mut matrix = MatchMatrix::new(record.roster, record.target_wins)?;
        for result in record.results {
            matrix.record_match(result.a, result.b, result.score_for, result.score_against)?;
        }
        Ok(matrix)
    }
}

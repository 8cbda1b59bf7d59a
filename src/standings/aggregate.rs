use crate::core::CompetitorId;

use super::matrix::MatchMatrix;

/// League points for a reported win.
pub const POINTS_PER_WIN: u32 = 2;
/// League points for a reported loss. Unplayed matches are worth nothing.
pub const POINTS_PER_LOSS: u32 = 1;

/// Derived statistics for a single competitor in one group.
///
/// These are recomputed from the [`MatchMatrix`] every time standings are
/// requested and are never stored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorStats {
    pub id: CompetitorId,
    pub name: String,

    // Overall results
    /// Reported matches won
    pub wins: u32,
    /// Reported matches lost
    pub losses: u32,
    /// Sets won across all reported matches
    pub sets_won: u64,
    /// Sets lost across all reported matches
    pub sets_lost: u64,
    /// `2 * wins + 1 * losses`
    pub points: u32,
    /// `sets_won - sets_lost`
    pub diff: i64,

    // Head to head, only filled in when tied on points
    /// League points earned against the other members of the tied group
    pub h2h_points: u32,
    /// Set differential against the other members of the tied group
    pub h2h_diff: i64,

    // Placement
    /// Competition rank, 1 based
    pub rank: usize,
    /// Whether `rank` is shared with a neighbour
    pub tied_for_rank: bool,
}

impl CompetitorStats {
    fn empty(id: CompetitorId, name: String) -> Self {
        Self {
            id,
            name,
            wins: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            points: 0,
            diff: 0,
            h2h_points: 0,
            h2h_diff: 0,
            rank: 0,
            tied_for_rank: false,
        }
    }

    /// Number of reported matches.
    pub fn played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of reported matches won, `0.0` before any are played.
    pub fn win_rate(&self) -> f32 {
        match self.played() {
            0 => 0.0,
            played => self.wins as f32 / played as f32,
        }
    }

    /// The tuple the rank assigner compares neighbours on.
    pub fn ranking_key(&self) -> (u32, u32, i64, i64) {
        (self.points, self.h2h_points, self.h2h_diff, self.diff)
    }
}

/// Points and set differential accumulated over some set of matches.
///
/// Set counts are widened so that any `u32` scores a group can hold sum
/// without overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub sets_won: u64,
    pub sets_lost: u64,
}

impl Tally {
    pub fn add(&mut self, score: crate::core::MatchScore) {
        if !score.reported {
            return;
        }
        self.sets_won = self.sets_won.saturating_add(u64::from(score.score_for));
        self.sets_lost = self.sets_lost.saturating_add(u64::from(score.score_against));
        if score.is_win() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn points(&self) -> u32 {
        POINTS_PER_WIN * self.wins + POINTS_PER_LOSS * self.losses
    }

    pub fn diff(&self) -> i64 {
        let won = i64::try_from(self.sets_won).unwrap_or(i64::MAX);
        let lost = i64::try_from(self.sets_lost).unwrap_or(i64::MAX);
        won.saturating_sub(lost)
    }
}

/// Sum every competitor's reported results, in roster order.
///
/// Unreported matches contribute nothing. This is a full O(n²) scan every
/// call.
pub fn aggregate(matrix: &MatchMatrix) -> Vec<CompetitorStats> {
    let n = matrix.len();
    matrix
        .roster()
        .iter()
        .enumerate()
        .map(|(i, competitor)| {
            let mut tally = Tally::default();
            for j in (0..n).filter(|&j| j != i) {
                tally.add(matrix.score_at(i, j));
            }

            let mut stats = CompetitorStats::empty(competitor.id, competitor.name.clone());
            stats.wins = tally.wins;
            stats.losses = tally.losses;
            stats.sets_won = tally.sets_won;
            stats.sets_lost = tally.sets_lost;
            stats.points = tally.points();
            stats.diff = tally.diff();
            stats
        })
        .collect()
}

use super::error::{LeagueError, Result};

/// The result of one match seen from one side.
///
/// The matrix stores one of these per ordered pair of competitors, and the
/// entry for `(b, a)` is always the [`mirrored`](MatchScore::mirrored)
/// version of the entry for `(a, b)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchScore {
    pub score_for: u32,
    pub score_against: u32,
    pub reported: bool,
}

impl MatchScore {
    /// A match that hasn't been played yet.
    pub const UNPLAYED: MatchScore = MatchScore {
        score_for: 0,
        score_against: 0,
        reported: false,
    };

    /// Any score other than 0:0 counts as reported.
    pub fn new(score_for: u32, score_against: u32) -> Self {
        Self {
            score_for,
            score_against,
            reported: score_for > 0 || score_against > 0,
        }
    }

    /// The same result from the opponent's point of view.
    pub fn mirrored(&self) -> Self {
        Self {
            score_for: self.score_against,
            score_against: self.score_for,
            reported: self.reported,
        }
    }

    /// A reported match is a win when this side took more sets. Anything
    /// else that was reported is a loss.
    pub fn is_win(&self) -> bool {
        self.reported && self.score_for > self.score_against
    }

    pub fn is_loss(&self) -> bool {
        self.reported && !self.is_win()
    }

    /// Check that this is a legal finished match when playing to
    /// `target_wins` sets: one side has exactly `target_wins`, the other
    /// strictly fewer. Unplayed (0:0) scores are accepted, they clear the
    /// match.
    pub fn validate(&self, target_wins: u32) -> Result<()> {
        if !self.reported || valid_scores(target_wins).contains(&(self.score_for, self.score_against)) {
            Ok(())
        } else {
            Err(LeagueError::InvalidScore {
                score_for: self.score_for,
                score_against: self.score_against,
                target_wins,
            })
        }
    }
}

/// Every legal finished score when playing to `target_wins` sets, wins
/// first (`3:0, 3:1, 3:2, 0:3, 1:3, 2:3` for a target of 3).
pub fn valid_scores(target_wins: u32) -> Vec<(u32, u32)> {
    let wins = (0..target_wins).map(|other| (target_wins, other));
    let losses = (0..target_wins).map(|other| (other, target_wins));
    wins.chain(losses).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_zero_is_unplayed() {
        assert_eq!(MatchScore::new(0, 0), MatchScore::UNPLAYED);
        assert!(!MatchScore::new(0, 0).is_win());
        assert!(!MatchScore::new(0, 0).is_loss());
    }

    #[test]
    fn test_mirror() {
        let score = MatchScore::new(3, 1);
        let mirror = score.mirrored();
        assert_eq!(mirror.score_for, 1);
        assert_eq!(mirror.score_against, 3);
        assert!(mirror.reported);
        assert!(score.is_win());
        assert!(mirror.is_loss());
        assert_eq!(mirror.mirrored(), score);
    }

    #[test]
    fn test_equal_reported_score_is_a_loss() {
        let score = MatchScore::new(2, 2);
        assert!(score.reported);
        assert!(score.is_loss());
        assert!(score.mirrored().is_loss());
    }

    #[test]
    fn test_valid_scores_best_of_five() {
        assert_eq!(
            valid_scores(3),
            vec![(3, 0), (3, 1), (3, 2), (0, 3), (1, 3), (2, 3)]
        );
        assert!(valid_scores(0).is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(MatchScore::new(3, 2).validate(3).is_ok());
        assert!(MatchScore::new(0, 2).validate(2).is_ok());
        assert!(MatchScore::UNPLAYED.validate(3).is_ok());

        assert!(matches!(
            MatchScore::new(3, 3).validate(3),
            Err(LeagueError::InvalidScore { target_wins: 3, .. })
        ));
        assert!(MatchScore::new(4, 0).validate(3).is_err());
        assert!(MatchScore::new(2, 1).validate(3).is_err());
    }
}

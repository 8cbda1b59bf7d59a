use super::{MatchMatrix, Standings};

/// Check every structural property that must hold for standings computed
/// from `matrix`. Panics with a description of the first violation.
pub fn assert_valid_standings(matrix: &MatchMatrix, standings: &Standings) {
    assert_valid_matrix(matrix);

    let rows = standings.rows();
    assert_eq!(rows.len(), matrix.len(), "Every competitor should have a row");
    assert_eq!(standings.is_complete(), matrix.is_complete());

    // Every decided match produces exactly one win and one loss, as long as
    // the results themselves are legal.
    let all_legal = matrix
        .matches()
        .all(|(_, _, score)| score.validate(matrix.target_wins()).is_ok());
    if all_legal {
        let wins: u32 = rows.iter().map(|s| s.wins).sum();
        let losses: u32 = rows.iter().map(|s| s.losses).sum();
        assert_eq!(wins as usize, matrix.reported_pairs());
        assert_eq!(losses as usize, matrix.reported_pairs());
    }

    for row in rows {
        assert_eq!(row.points, 2 * row.wins + row.losses);
        assert_eq!(row.diff, row.sets_won as i64 - row.sets_lost as i64);
        assert!(matrix.competitor(row.id).is_some(), "{} is not on the roster", row.id);
    }

    if let Some(first) = rows.first() {
        assert_eq!(first.rank, 1);
    }

    for (i, pair) in rows.windows(2).enumerate() {
        let (prev, cur) = (&pair[0], &pair[1]);
        assert!(
            prev.points >= cur.points,
            "Rows out of points order at {}: {} then {}",
            i,
            prev.points,
            cur.points
        );
        if prev.points > cur.points {
            assert!(prev.rank < cur.rank, "More points must rank strictly better");
        }

        let shares = standings.is_complete() && prev.ranking_key() == cur.ranking_key();
        if shares {
            assert_eq!(prev.rank, cur.rank);
            assert!(prev.tied_for_rank && cur.tied_for_rank);
        } else {
            assert_eq!(cur.rank, i + 2, "Unshared rank must be the 1-based position");
        }
    }

    if !standings.is_complete() {
        assert!(rows.iter().all(|s| !s.tied_for_rank));
    }
}

/// Check that every stored result is mirrored and that `reported` matches
/// the scores.
pub fn assert_valid_matrix(matrix: &MatchMatrix) {
    for (a, b, score) in matrix.matches() {
        let mirror = matrix
            .result(b, a)
            .expect("Both sides of a pair should be stored");
        assert_eq!(score.score_for, mirror.score_against);
        assert_eq!(score.score_against, mirror.score_for);
        assert_eq!(score.reported, mirror.reported);
        assert_eq!(score.reported, score.score_for > 0 || score.score_against > 0);
    }
    for competitor in matrix.roster() {
        assert!(matrix.result(competitor.id, competitor.id).is_none());
    }
}

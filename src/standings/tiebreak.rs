use std::cmp::Ordering;

use tracing::{event, instrument};

use super::aggregate::{CompetitorStats, Tally};
use super::matrix::MatchMatrix;

/// Order competitors by league points, breaking ties head to head.
///
/// Competitors with the same number of points form a tied group. Inside a
/// group they're ordered by the points they earned against each other,
/// then the set differential against each other, and finally by their
/// overall set differential. Anything still equal after that keeps roster
/// order.
#[instrument(level = "trace", skip_all, fields(competitors = stats.len()))]
pub fn resolve_ties(matrix: &MatchMatrix, mut stats: Vec<CompetitorStats>) -> Vec<CompetitorStats> {
    for s in stats.iter_mut() {
        s.h2h_points = 0;
        s.h2h_diff = 0;
    }

    // Stable, so equal points stay in roster order.
    stats.sort_by(|a, b| b.points.cmp(&a.points));

    let mut start = 0;
    while start < stats.len() {
        let points = stats[start].points;
        let len = stats[start..]
            .iter()
            .take_while(|s| s.points == points)
            .count();
        let end = start + len;

        if len > 1 {
            event!(
                tracing::Level::TRACE,
                points,
                start,
                len,
                "Resolving tied group"
            );
            resolve_group(matrix, &mut stats[start..end]);
        }
        start = end;
    }

    stats
}

/// Fill in head to head numbers for one tied group and re-order it in
/// place. Only matches between members of the group count.
fn resolve_group(matrix: &MatchMatrix, group: &mut [CompetitorStats]) {
    let indices: Vec<Option<usize>> = group.iter().map(|s| matrix.index_of(s.id)).collect();

    for (pos, member) in group.iter_mut().enumerate() {
        let mut tally = Tally::default();
        if let Some(me) = indices[pos] {
            for (other_pos, other) in indices.iter().enumerate() {
                match other {
                    Some(other) if other_pos != pos => tally.add(matrix.score_at(me, *other)),
                    _ => {}
                }
            }
        }
        member.h2h_points = tally.points();
        member.h2h_diff = tally.diff();
    }

    group.sort_by(compare_tied);
}

fn compare_tied(a: &CompetitorStats, b: &CompetitorStats) -> Ordering {
    b.h2h_points
        .cmp(&a.h2h_points)
        .then_with(|| b.h2h_diff.cmp(&a.h2h_diff))
        .then_with(|| b.diff.cmp(&a.diff))
}

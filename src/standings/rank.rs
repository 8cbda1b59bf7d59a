use super::aggregate::CompetitorStats;

/// Assign competition ranks ("1-2-2-4") to an already ordered sequence.
///
/// A competitor shares the rank of the one before it only when
/// `all_matches_complete` is set and the two are equal on points, head to
/// head points, head to head differential and overall differential. While
/// matches are outstanding ranks are always the 1-based position, so
/// provisional standings never show a tie that later results could break.
pub fn assign_ranks(stats: &mut [CompetitorStats], all_matches_complete: bool) {
    for s in stats.iter_mut() {
        s.tied_for_rank = false;
    }

    for i in 0..stats.len() {
        if i > 0 && all_matches_complete && stats[i].ranking_key() == stats[i - 1].ranking_key() {
            stats[i].rank = stats[i - 1].rank;
            stats[i].tied_for_rank = true;
            stats[i - 1].tied_for_rank = true;
        } else {
            stats[i].rank = i + 1;
        }
    }
}

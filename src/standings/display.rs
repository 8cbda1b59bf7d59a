use std::cmp::Ordering;

use super::aggregate::CompetitorStats;

/// Column a standings table can be sorted on for display.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    Id,
    Name,
    Wins,
    Losses,
    Points,
    Diff,
    #[default]
    Rank,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// The display sort of one table, like a clickable column header.
///
/// Starts out as rank ascending. Clicking the active column flips the
/// order, clicking another column switches to it ascending.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.reversed();
        } else {
            self.key = key;
            self.order = SortOrder::Ascending;
        }
    }

    /// Compare two rows under this sort. Equal values fall back to the
    /// ranking order (rank, then id) so the display is deterministic.
    pub fn compare(&self, a: &CompetitorStats, b: &CompetitorStats) -> Ordering {
        let by_key = match self.key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Wins => a.wins.cmp(&b.wins),
            SortKey::Losses => a.losses.cmp(&b.losses),
            SortKey::Points => a.points.cmp(&b.points),
            SortKey::Diff => a.diff.cmp(&b.diff),
            SortKey::Rank => a.rank.cmp(&b.rank),
        };
        let by_key = match self.order {
            SortOrder::Ascending => by_key,
            SortOrder::Descending => by_key.reverse(),
        };
        by_key
            .then_with(|| a.rank.cmp(&b.rank))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Sort rows for display without touching them. Ranks stay exactly as the
/// rank assigner left them.
pub fn sorted_by(rows: &[CompetitorStats], state: SortState) -> Vec<&CompetitorStats> {
    let mut view: Vec<&CompetitorStats> = rows.iter().collect();
    view.sort_by(|a, b| state.compare(a, b));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CompetitorId;

    fn row(id: u32, name: &str, points: u32, rank: usize) -> CompetitorStats {
        CompetitorStats {
            id: CompetitorId::new(id),
            name: name.to_string(),
            wins: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            points,
            diff: 0,
            h2h_points: 0,
            h2h_diff: 0,
            rank,
            tied_for_rank: false,
        }
    }

    fn ids(view: &[&CompetitorStats]) -> Vec<u32> {
        view.iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn test_toggle() {
        let mut state = SortState::default();
        assert_eq!(state, SortState::new(SortKey::Rank, SortOrder::Ascending));

        state.toggle(SortKey::Rank);
        assert_eq!(state.order, SortOrder::Descending);

        state.toggle(SortKey::Id);
        assert_eq!(state, SortState::new(SortKey::Id, SortOrder::Ascending));

        state.toggle(SortKey::Id);
        assert_eq!(state, SortState::new(SortKey::Id, SortOrder::Descending));
    }

    #[test]
    fn test_sort_by_id_keeps_ranks() {
        let rows = vec![row(3, "Cho", 4, 1), row(1, "Ahn", 3, 2), row(2, "Baek", 1, 3)];

        let view = sorted_by(&rows, SortState::new(SortKey::Id, SortOrder::Ascending));
        assert_eq!(ids(&view), vec![1, 2, 3]);
        let view_ranks: Vec<usize> = view.iter().map(|s| s.rank).collect();
        assert_eq!(view_ranks, vec![2, 3, 1]);

        // The underlying rows are untouched
        assert_eq!(rows[0].id.get(), 3);
        assert_eq!(rows[0].rank, 1);
    }

    #[test]
    fn test_sort_descending_and_ties() {
        let rows = vec![row(1, "A", 2, 1), row(2, "B", 2, 1), row(3, "C", 4, 3)];

        let view = sorted_by(&rows, SortState::new(SortKey::Points, SortOrder::Descending));
        assert_eq!(ids(&view), vec![3, 1, 2]);

        let view = sorted_by(&rows, SortState::new(SortKey::Rank, SortOrder::Descending));
        assert_eq!(ids(&view), vec![3, 1, 2]);

        let view = sorted_by(&rows, SortState::new(SortKey::Name, SortOrder::Descending));
        assert_eq!(ids(&view), vec![3, 2, 1]);
    }
}

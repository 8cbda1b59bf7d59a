use tracing::{event, instrument};

use crate::core::CompetitorId;

use super::aggregate::{aggregate, CompetitorStats};
use super::display::{sorted_by, SortState};
use super::matrix::MatchMatrix;
use super::rank::assign_ranks;
use super::tiebreak::resolve_ties;

/// Ranked standings of one group.
///
/// `rows` are in ranking order. Display code can re-sort a view of them
/// with [`Standings::sorted_by`] without affecting the ranks.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    rows: Vec<CompetitorStats>,
    complete: bool,
}

impl Standings {
    /// Run aggregation, tie resolution and rank assignment over a snapshot
    /// of the matrix.
    #[instrument(level = "trace", skip(matrix), fields(competitors = matrix.len()))]
    pub fn compute(matrix: &MatchMatrix) -> Self {
        let complete = matrix.is_complete();
        let mut rows = resolve_ties(matrix, aggregate(matrix));
        assign_ranks(&mut rows, complete);

        event!(
            tracing::Level::TRACE,
            complete,
            reported = matrix.reported_pairs(),
            total = matrix.total_pairs(),
            "Computed standings"
        );
        Self { rows, complete }
    }

    /// Rows in ranking order.
    pub fn rows(&self) -> &[CompetitorStats] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompetitorStats> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every match in the group had been reported when these
    /// standings were computed. Ties are only shown once this is true.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn get(&self, id: CompetitorId) -> Option<&CompetitorStats> {
        self.rows.iter().find(|s| s.id == id)
    }

    /// The first row in ranking order.
    pub fn leader(&self) -> Option<&CompetitorStats> {
        self.rows.first()
    }

    /// A display ordering of the rows.
    pub fn sorted_by(&self, state: SortState) -> Vec<&CompetitorStats> {
        sorted_by(&self.rows, state)
    }

    /// Format as a Markdown table in the given display order.
    pub fn to_markdown(&self, group_name: &str, state: SortState) -> String {
        let mut output = String::new();
        output.push_str(&format!("### Group {}\n\n", group_name));
        if !self.complete {
            output.push_str("_Provisional: not all matches have been played._\n\n");
        }

        output.push_str("| ID | Name | Record | Sets | Diff | Points | Rank |\n");
        output.push_str("|----|------|--------|------|------|--------|------|\n");
        for row in self.sorted_by(state) {
            let rank = if row.tied_for_rank {
                format!("T{}", row.rank)
            } else {
                row.rank.to_string()
            };
            output.push_str(&format!(
                "| {} | {} | {}-{} | {}:{} | {:+} | {} | {} |\n",
                row.id.get(),
                row.name,
                row.wins,
                row.losses,
                row.sets_won,
                row.sets_lost,
                row.diff,
                row.points,
                rank
            ));
        }
        output.push('\n');
        output
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a CompetitorStats;
    type IntoIter = std::slice::Iter<'a, CompetitorStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::display::{SortKey, SortOrder};

    fn id(n: u32) -> CompetitorId {
        CompetitorId::new(n)
    }

    fn cyclic_triangle() -> MatchMatrix {
        // A beats B 3:1, B beats C 3:0, C beats A 3:2
        let mut matrix = MatchMatrix::from_names(["A", "B", "C"], 3).unwrap();
        matrix.record_match(id(1), id(2), 3, 1).unwrap();
        matrix.record_match(id(2), id(3), 3, 0).unwrap();
        matrix.record_match(id(3), id(1), 3, 2).unwrap();
        matrix
    }

    fn placements(standings: &Standings) -> Vec<(&str, usize, bool)> {
        standings
            .iter()
            .map(|s| (s.name.as_str(), s.rank, s.tied_for_rank))
            .collect()
    }

    #[test_log::test]
    fn test_cyclic_triangle_complete() {
        let standings = Standings::compute(&cyclic_triangle());
        assert!(standings.is_complete());

        // A and B are level on every key (+1 head to head and overall), C
        // trails on head to head differential.
        assert_eq!(
            placements(&standings),
            vec![("A", 1, true), ("B", 1, true), ("C", 3, false)]
        );
        assert_eq!(standings.leader().unwrap().name, "A");
    }

    #[test]
    fn test_triangle_missing_one_match() {
        let mut matrix = cyclic_triangle();
        matrix.clear_match(id(3), id(1)).unwrap();

        let standings = Standings::compute(&matrix);
        assert!(!standings.is_complete());

        // B: a win and a loss = 3 points, A: one win = 2, C: one loss = 1
        assert_eq!(
            placements(&standings),
            vec![("B", 1, false), ("A", 2, false), ("C", 3, false)]
        );
    }

    #[test]
    fn test_incomplete_never_shares_rank() {
        let mut matrix = MatchMatrix::from_names(["A", "B", "C", "D"], 3).unwrap();
        matrix.record_match(id(1), id(3), 3, 1).unwrap();
        matrix.record_match(id(2), id(4), 3, 1).unwrap();

        let standings = Standings::compute(&matrix);
        let a = standings.get(id(1)).unwrap();
        let b = standings.get(id(2)).unwrap();
        assert_eq!(a.ranking_key(), b.ranking_key());
        assert_eq!((a.rank, b.rank), (1, 2));
        assert!(standings.iter().all(|s| !s.tied_for_rank));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let matrix = cyclic_triangle();
        assert_eq!(Standings::compute(&matrix), Standings::compute(&matrix));
    }

    #[test]
    fn test_markdown() {
        let standings = Standings::compute(&cyclic_triangle());
        let markdown = standings.to_markdown("A", SortState::default());

        assert!(markdown.contains("### Group A"));
        assert!(!markdown.contains("Provisional"));
        assert!(markdown.contains("| 1 | A | 1-1 | 5:4 | +1 | 3 | T1 |"));
        assert!(markdown.contains("| 3 | C | 1-1 | 3:5 | -2 | 3 | 3 |"));
    }

    #[test]
    fn test_markdown_sorted_by_id_descending() {
        let standings = Standings::compute(&cyclic_triangle());
        let markdown =
            standings.to_markdown("A", SortState::new(SortKey::Id, SortOrder::Descending));
        let c = markdown.find("| 3 | C |").unwrap();
        let a = markdown.find("| 1 | A |").unwrap();
        assert!(c < a);
    }

    #[test]
    fn test_markdown_provisional() {
        let matrix = MatchMatrix::from_names(["A", "B"], 2).unwrap();
        let markdown = Standings::compute(&matrix).to_markdown("B", SortState::default());
        assert!(markdown.contains("Provisional"));
        assert!(markdown.contains("| 1 | A | 0-0 | 0:0 | +0 | 0 | 1 |"));
    }
}

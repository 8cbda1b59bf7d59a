use std::fmt::Display;

/// Stable identifier of a competitor inside one group.
///
/// Ids are handed out once, in roster order, starting at 1. They never
/// change afterwards and have nothing to do with where the competitor ends
/// up in the standings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct CompetitorId(u32);

impl CompetitorId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for CompetitorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CompetitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single entry on a group roster.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
}

impl Competitor {
    pub fn new(id: impl Into<CompetitorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Build a roster from names, assigning ids 1..=n in order.
    pub fn roster_from_names<I, S>(names: I) -> Vec<Competitor>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .zip(1u32..)
            .map(|(name, id)| Competitor::new(id, name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_start_at_one() {
        let roster = Competitor::roster_from_names(["Kim", "Lee", "Park"]);
        let ids: Vec<u32> = roster.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(roster[2].name, "Park");
    }

    #[test]
    fn test_display() {
        assert_eq!(CompetitorId::new(7).to_string(), "#7");
    }
}

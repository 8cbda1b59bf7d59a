use std::collections::BTreeMap;

use tracing::debug;
use uuid::Uuid;

use crate::competition::{Competition, CompetitionSummary};

use super::error::{Result, StoreError};
use super::{parse_import, sorted_summaries, CompetitionStore};

/// A store that keeps every competition in memory.
///
/// Useful for tests and as the working copy the file store loads into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    competitions: BTreeMap<Uuid, Competition>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(competitions: BTreeMap<Uuid, Competition>) -> Self {
        Self { competitions }
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<Uuid, Competition> {
        &self.competitions
    }

    pub fn len(&self) -> usize {
        self.competitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitions.is_empty()
    }
}

impl CompetitionStore for MemoryStore {
    fn list(&self) -> Result<Vec<CompetitionSummary>> {
        Ok(sorted_summaries(self.competitions.values()))
    }

    fn get(&self, id: Uuid) -> Result<Competition> {
        self.competitions
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&mut self, competition: &Competition) -> Result<()> {
        debug!(id = %competition.id(), title = competition.title(), "Saving competition");
        self.competitions
            .insert(competition.id(), competition.clone());
        Ok(())
    }

    fn update(&mut self, competition: &Competition) -> Result<()> {
        let slot = self
            .competitions
            .get_mut(&competition.id())
            .ok_or(StoreError::NotFound(competition.id()))?;
        debug!(id = %competition.id(), "Updating competition");
        *slot = competition.clone();
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        debug!(%id, "Deleting competition");
        self.competitions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.competitions)?)
    }

    fn import_json(&mut self, json: &str) -> Result<usize> {
        let imported = parse_import(json)?;
        debug!(count = imported.len(), "Replacing store with imported data");
        self.competitions = imported;
        Ok(self.competitions.len())
    }
}

//! Persistence for [`Competition`] records.
//!
//! Everything goes through the [`CompetitionStore`] trait. Two
//! implementations are provided:
//!
//! - [`MemoryStore`] keeps competitions in a map. Nothing survives the
//!   process.
//! - [`JsonFileStore`] keeps all competitions in one JSON object keyed by
//!   id, reading and rewriting the whole file on each operation.
//!
//! Both use the same export format, so the output of
//! [`CompetitionStore::export_json`] on one can be handed to
//! [`CompetitionStore::import_json`] on the other.
mod error;
mod file;
mod memory;

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::competition::{Competition, CompetitionRecord, CompetitionSummary};

pub use error::{Result, StoreError};
pub use file::{JsonFileStore, BACKUP_PREFIX};
pub use memory::MemoryStore;

/// A place competitions can be saved to and loaded from.
pub trait CompetitionStore {
    /// Summaries of every stored competition, newest date first.
    fn list(&self) -> Result<Vec<CompetitionSummary>>;

    /// Load one competition.
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored under `id`.
    fn get(&self, id: Uuid) -> Result<Competition>;

    /// Save a competition, replacing any existing one with the same id.
    fn create(&mut self, competition: &Competition) -> Result<()>;

    /// Replace an existing competition.
    ///
    /// Returns [`StoreError::NotFound`] if it was never created.
    fn update(&mut self, competition: &Competition) -> Result<()>;

    /// Remove a competition.
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored under `id`.
    fn delete(&mut self, id: Uuid) -> Result<()>;

    /// Every stored competition as a JSON object keyed by id.
    fn export_json(&self) -> Result<String>;

    /// Replace the entire contents of the store with `json`, which must be
    /// in the format [`CompetitionStore::export_json`] produces. Returns
    /// the number of competitions now stored.
    ///
    /// Nothing changes if the data can't be parsed.
    fn import_json(&mut self, json: &str) -> Result<usize>;
}

/// Summaries sorted by date, newest first. Same-day competitions are
/// ordered newest id first, which for v7 ids means most recently created.
pub(crate) fn sorted_summaries<'a>(
    competitions: impl IntoIterator<Item = &'a Competition>,
) -> Vec<CompetitionSummary> {
    let mut summaries: Vec<CompetitionSummary> =
        competitions.into_iter().map(Competition::summary).collect();
    summaries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    summaries
}

/// Parse exported data, checking it is an object whose keys match the ids
/// of the competitions stored under them and that every competition is
/// one the builder could have produced.
pub(crate) fn parse_import(json: &str) -> Result<BTreeMap<Uuid, Competition>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(StoreError::InvalidImport(
            "expected a JSON object keyed by competition id".to_string(),
        ));
    }

    let records: BTreeMap<Uuid, CompetitionRecord> = serde_json::from_value(value)?;
    let competitions = records
        .into_iter()
        .map(|(key, record)| {
            Competition::try_from(record)
                .map(|competition| (key, competition))
                .map_err(StoreError::from)
        })
        .collect::<Result<BTreeMap<Uuid, Competition>>>()?;
    if let Some((key, competition)) = competitions
        .iter()
        .find(|(key, competition)| **key != competition.id())
    {
        return Err(StoreError::InvalidImport(format!(
            "competition {} is stored under key {}",
            competition.id(),
            key
        )));
    }
    Ok(competitions)
}

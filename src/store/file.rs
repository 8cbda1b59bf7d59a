use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::competition::{Competition, CompetitionSummary};

use super::error::Result;
use super::memory::MemoryStore;
use super::{parse_import, CompetitionStore};

/// File name prefix used by [`JsonFileStore::backup`].
pub const BACKUP_PREFIX: &str = "league_backup_";

/// A store backed by a single JSON file.
///
/// The file holds one object mapping competition id to competition. Every
/// operation reads the whole file, and every write rewrites it, so edits
/// made by another process between calls are picked up. There is no
/// locking.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`, creating it with an empty object if it
    /// doesn't exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`](super::StoreError::Io) if the file can't
    /// be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(?path, "Creating empty competition file");
            fs::write(&path, "{}")?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy the current file next to itself as
    /// `league_backup_<UTC timestamp>.json` and return the new path.
    #[instrument(level = "debug", skip(self), fields(path = ?self.path))]
    pub fn backup(&self) -> Result<PathBuf> {
        let data = fs::read_to_string(&self.path)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S");
        let file_name = format!("{}{}.json", BACKUP_PREFIX, timestamp);
        let backup_path = match self.path.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        };

        fs::write(&backup_path, data)?;
        debug!(?backup_path, "Wrote backup");
        Ok(backup_path)
    }

    fn load(&self) -> Result<MemoryStore> {
        let data = fs::read_to_string(&self.path)?;
        Ok(MemoryStore::from_map(parse_import(&data)?))
    }

    fn save(&self, store: &MemoryStore) -> Result<()> {
        let data = serde_json::to_string_pretty(store.as_map())?;
        fs::write(&self.path, data)?;
        debug!(path = ?self.path, count = store.len(), "Saved competitions");
        Ok(())
    }

    /// Load, apply `f`, and write back only if `f` succeeded.
    fn modify<T>(&self, f: impl FnOnce(&mut MemoryStore) -> Result<T>) -> Result<T> {
        let mut store = self.load()?;
        let value = f(&mut store)?;
        self.save(&store)?;
        Ok(value)
    }
}

impl CompetitionStore for JsonFileStore {
    fn list(&self) -> Result<Vec<CompetitionSummary>> {
        self.load()?.list()
    }

    fn get(&self, id: Uuid) -> Result<Competition> {
        self.load()?.get(id)
    }

    fn create(&mut self, competition: &Competition) -> Result<()> {
        self.modify(|store| store.create(competition))
    }

    fn update(&mut self, competition: &Competition) -> Result<()> {
        self.modify(|store| store.update(competition))
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        self.modify(|store| store.delete(id))
    }

    fn export_json(&self) -> Result<String> {
        self.load()?.export_json()
    }

    fn import_json(&mut self, json: &str) -> Result<usize> {
        let competitions = parse_import(json)?;
        let store = MemoryStore::from_map(competitions);
        self.save(&store)?;
        Ok(store.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::competition::CompetitionBuilder;
    use crate::core::{CompetitorId, LeagueError};
    use crate::store::StoreError;

    fn competition(title: &str) -> Competition {
        CompetitionBuilder::new()
            .title(title)
            .date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .add_group(vec!["Ahn", "Baek", "Cho"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_open_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("league_data.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_open_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("league_data.json");

        let c = competition("Kept");
        JsonFileStore::open(&path).unwrap().create(&c).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(c.id()).unwrap(), c);
    }

    #[test_log::test]
    fn test_results_survive_reload() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("data.json")).unwrap();

        let mut c = competition("Club night");
        store.create(&c).unwrap();
        c.record_match("A", CompetitorId::new(2), CompetitorId::new(3), 3, 1)
            .unwrap();
        store.update(&c).unwrap();

        let loaded = store.get(c.id()).unwrap();
        let standings = loaded.standings("A").unwrap();
        assert_eq!(standings.leader().unwrap().name, "Baek");
    }

    #[test]
    fn test_missing_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("data.json")).unwrap();
        let c = competition("Nowhere");

        assert!(matches!(store.get(c.id()), Err(StoreError::NotFound(_))));
        assert!(matches!(store.update(&c), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete(c.id()), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_failed_write_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.create(&competition("One")).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(store.update(&competition("Never created")).is_err());
        assert!(store.import_json("[]").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_import_replaces_everything() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("data.json")).unwrap();
        store.create(&competition("Old")).unwrap();

        let mut source = MemoryStore::new();
        source.create(&competition("New 1")).unwrap();
        source.create(&competition("New 2")).unwrap();

        assert_eq!(store.import_json(&source.export_json().unwrap()).unwrap(), 2);
        let mut titles: Vec<String> = store.list().unwrap().into_iter().map(|s| s.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["New 1", "New 2"]);
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(matches!(store.list(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_file_with_invalid_competition_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        let c = competition("Edited by hand");
        store.create(&c).unwrap();

        let mut value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        value[c.id().to_string()]["groups"]["A"]["target_wins"] = serde_json::json!(5);
        fs::write(&path, value.to_string()).unwrap();

        assert!(matches!(
            store.get(c.id()),
            Err(StoreError::League(LeagueError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_backup_copies_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.create(&competition("Backed up")).unwrap();

        let backup = store.backup().unwrap();
        assert_eq!(backup.parent(), Some(dir.path()));
        let name = backup.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(BACKUP_PREFIX));
        assert!(name.ends_with(".json"));
        assert!(!name.contains(':'));
        assert_eq!(
            fs::read_to_string(&backup).unwrap(),
            fs::read_to_string(&path).unwrap()
        );
    }
}

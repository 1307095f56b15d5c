//! Player record storage backends.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StorageError;
use crate::record::PlayerRecord;

/// File extension for saved players.
pub const SAVE_EXTENSION: &str = "blackjack";

/// Load and save access to player records, keyed by player name.
pub trait Storage {
    /// Loads the record saved under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if nothing is saved under `name`,
    /// and [`StorageError::Malformed`] if the saved record cannot be decoded.
    fn load(&self, name: &str) -> Result<PlayerRecord, StorageError>;

    /// Saves `record` under its name, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&mut self, record: &PlayerRecord) -> Result<(), StorageError>;
}

/// Names are matched case-insensitively. Path separators become `_` so a
/// key never leaves the storage directory.
fn storage_key(name: &str) -> String {
    name.trim().to_lowercase().replace(['/', '\\'], "_")
}

/// Stores each player as a JSON file in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory holding the save files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the save file path for `name`.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{SAVE_EXTENSION}", storage_key(name)))
    }
}

impl Storage for FileStorage {
    fn load(&self, name: &str) -> Result<PlayerRecord, StorageError> {
        let path = self.path_for(name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(name.to_owned()));
            }
            Err(err) => return Err(err.into()),
        };

        let record = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), "loaded player");
        Ok(record)
    }

    fn save(&mut self, record: &PlayerRecord) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&record.name);
        let contents = serde_json::to_string_pretty(record)?;
        fs::write(&path, contents)?;
        info!(path = %path.display(), bankroll = record.bankroll, "saved player");
        Ok(())
    }
}

/// Keeps records in memory, for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    records: HashMap<String, PlayerRecord>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, name: &str) -> Result<PlayerRecord, StorageError> {
        self.records
            .get(&storage_key(name))
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_owned()))
    }

    fn save(&mut self, record: &PlayerRecord) -> Result<(), StorageError> {
        self.records
            .insert(storage_key(&record.name), record.clone());
        Ok(())
    }
}

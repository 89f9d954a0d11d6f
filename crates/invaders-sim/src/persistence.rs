//! High-score persistence.
//!
//! `HighScoreStore` is the raw storage seam; `HighScoreGateway` wraps it with
//! the session policy: loading never fails (default record instead) and saving
//! is best-effort (failures are logged, never propagated).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use invaders_core::constants::SAVE_DATA_NAME;
use invaders_core::errors::PersistenceError;
use invaders_core::types::HighScoreRecord;

/// Storage for the single high-score record.
pub trait HighScoreStore: Send {
    fn load(&self) -> Result<HighScoreRecord, PersistenceError>;
    fn save(&self, record: &HighScoreRecord) -> Result<(), PersistenceError>;
}

/// JSON file store: `<dir>/hiscore.json`.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    dir: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        save_path(&self.dir)
    }
}

fn save_path(dir: &Path) -> PathBuf {
    dir.join(SAVE_DATA_NAME)
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<HighScoreRecord, PersistenceError> {
        let path = self.path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PersistenceError::MissingSaveData)
            }
            Err(e) => return Err(PersistenceError::Io(format!("Failed to read save file: {e}"))),
        };
        serde_json::from_str(&json)
            .map_err(|e| PersistenceError::CorruptSaveData(format!("Failed to parse save data: {e}")))
    }

    fn save(&self, record: &HighScoreRecord) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| PersistenceError::Io(format!("Failed to create save directory: {e}")))?;
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| PersistenceError::Io(format!("Failed to serialize save data: {e}")))?;
        fs::write(self.path(), json)
            .map_err(|e| PersistenceError::Io(format!("Failed to write save file: {e}")))?;
        Ok(())
    }
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    slot: Arc<Mutex<Option<HighScoreRecord>>>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: HighScoreRecord) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(record))),
        }
    }

    /// The currently stored record, if any.
    pub fn record(&self) -> Option<HighScoreRecord> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<HighScoreRecord, PersistenceError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| PersistenceError::Io(e.to_string()))?;
        slot.clone().ok_or(PersistenceError::MissingSaveData)
    }

    fn save(&self, record: &HighScoreRecord) -> Result<(), PersistenceError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| PersistenceError::Io(e.to_string()))?;
        *slot = Some(record.clone());
        Ok(())
    }
}

/// Session-facing wrapper over a store.
pub struct HighScoreGateway {
    store: Box<dyn HighScoreStore>,
}

impl HighScoreGateway {
    pub fn new(store: impl HighScoreStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Load the record, falling back to `{"CPU", 0}` on any failure.
    pub fn load(&self) -> HighScoreRecord {
        match self.store.load() {
            Ok(record) => {
                tracing::info!(name = %record.name, score = record.score, "loaded high score");
                record
            }
            Err(PersistenceError::MissingSaveData) => {
                tracing::info!("no saved high score, using default");
                HighScoreRecord::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load high score, using default");
                HighScoreRecord::default()
            }
        }
    }

    /// Save the record. Returns whether it was written; failures are logged.
    pub fn save(&self, record: &HighScoreRecord) -> bool {
        match self.store.save(record) {
            Ok(()) => {
                tracing::info!(name = %record.name, score = record.score, "high score saved");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "high score not saved");
                false
            }
        }
    }
}

impl Default for HighScoreGateway {
    fn default() -> Self {
        Self::new(MemoryHighScoreStore::new())
    }
}

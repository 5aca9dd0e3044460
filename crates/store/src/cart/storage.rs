//! Persistence seam for the cart snapshot.
//!
//! The cart slot is a single key-value cell: the serialized item list is
//! written wholesale and read wholesale. `FileStorage` backs the slot with
//! one JSON file; `MemoryStorage` keeps it in memory for tests.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors that can occur when reading or writing the cart slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory slot's lock was poisoned by a panicking writer.
    #[error("storage slot poisoned")]
    Poisoned,
}

/// A single persistent slot holding the serialized cart snapshot.
pub trait CartStorage: Send {
    /// Read the current snapshot. `None` means the slot has never been
    /// written.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents wholesale.
    fn save(&self, snapshot: &str) -> Result<(), StorageError>;
}

/// Cart slot backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a slot at the given path. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        fs::write(&self.path, snapshot)?;
        Ok(())
    }
}

/// In-memory cart slot.
///
/// Clones share the same slot, so a test can keep a handle and observe what
/// the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the slot, as if a previous session had persisted `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(snapshot.into()))),
        }
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        *slot = Some(snapshot.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_absent_slot_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("cart.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("cart.json"));

        storage.save(r#"[{"id":1}]"#).unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some(r#"[{"id":1}]"#));

        // A second save replaces the slot wholesale.
        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_storage_clones_share_slot() {
        let storage = MemoryStorage::new();
        let observer = storage.clone();

        storage.save("[]").unwrap();
        assert_eq!(observer.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_storage_prefilled() {
        let storage = MemoryStorage::with_snapshot("not json");
        assert_eq!(storage.load().unwrap().as_deref(), Some("not json"));
    }
}

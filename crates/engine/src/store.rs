//! Persistence of the transaction log.
//!
//! The log is a single JSON array on disk. Reads are fail-open: a missing,
//! unreadable or corrupt file loads as an empty log. Writes replace the whole
//! file and report every failure.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::{Record, StoreWriteError};

pub const DEFAULT_STORE_PATH: &str = "data/sales.json";

pub trait Store: Send + Sync + 'static {
    /// Loads the full log. Never fails.
    fn load(&self) -> Vec<Record>;

    /// Replaces the full log with `records`.
    fn replace(&self, records: &[Record]) -> Result<(), StoreWriteError>;

    /// Loads, pushes `record` and replaces, returning the new log.
    ///
    /// Two concurrent callers can both load the same state and the later
    /// `replace` wins. Serialize calls externally when that matters.
    fn append(&self, record: Record) -> Result<Vec<Record>, StoreWriteError> {
        let mut records = self.load();
        records.push(record);
        self.replace(&records)?;
        Ok(records)
    }
}

/// Store backed by a pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Vec<Record> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("store {} not found, starting empty", self.path.display());
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!("failed to read store {}: {err}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(values)) => {
                tracing::debug!(
                    "loaded {} records from {}",
                    values.len(),
                    self.path.display()
                );
                values.into_iter().map(Record::from).collect()
            }
            Ok(_) => {
                tracing::warn!("store {} is not a JSON array", self.path.display());
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("failed to parse store {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    fn replace(&self, records: &[Record]) -> Result<(), StoreWriteError> {
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!("wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreWriteError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| StoreWriteError::io(parent, e))?;

    // Temp file name is unique per writer; only complete files get renamed in.
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| StoreWriteError::io(parent, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StoreWriteError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| StoreWriteError::io(path, e.error))?;
    Ok(())
}

/// In-process store, mostly useful for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Record>>,
}

impl MemoryStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, records: &[Record]) -> Result<(), StoreWriteError> {
        *self.records.lock().unwrap_or_else(PoisonError::into_inner) = records.to_vec();
        Ok(())
    }
}

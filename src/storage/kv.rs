//! Key/value store adapter
//!
//! The ledger and registry persist through a flat key space mapping string
//! keys to JSON values. Reads and writes are synchronous.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{SpendlogError, SpendlogResult};

use super::file_io::{read_json, write_json_atomic};

/// Keys used by the ledger and registry
pub mod keys {
    pub const EXPENSES: &str = "expenses";
    pub const MONTHLY_BUDGET: &str = "monthlyBudget";
    pub const CATEGORY_BUDGETS: &str = "categoryBudgets";
}

/// A durable mapping of string keys to JSON values
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if it was never written
    fn get(&self, key: &str) -> SpendlogResult<Option<Value>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &Value) -> SpendlogResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> SpendlogResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> SpendlogResult<Option<Value>> {
        let path = self.path_for(key)?;
        read_json(path)
    }

    fn set(&self, key: &str, value: &Value) -> SpendlogResult<()> {
        let path = self.path_for(key)?;
        write_json_atomic(path, value)
    }
}

fn validate_key(key: &str) -> SpendlogResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(SpendlogError::Storage(format!("Invalid store key: {:?}", key)))
    }
}

/// In-memory store; nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SpendlogResult<Option<Value>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> SpendlogResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// Outcome of a write-through mutation
///
/// The in-memory change has always been applied. `warning` carries the store
/// error when the write failed, in which case the stored copy is stale until
/// the next successful write of the same key.
#[must_use = "a failed write is only reported through the warning"]
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<SpendlogError>,
}

impl<T> Persisted<T> {
    pub(crate) fn new(value: T, write: SpendlogResult<()>) -> Self {
        Self {
            value,
            warning: write.err(),
        }
    }

    /// True when the store rejected the write
    pub fn is_stale(&self) -> bool {
        self.warning.is_some()
    }

    pub fn warning(&self) -> Option<&SpendlogError> {
        self.warning.as_ref()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Treat a failed write as an error
    pub fn into_result(self) -> SpendlogResult<T> {
        match self.warning {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Persisted<U> {
        Persisted {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

/// Serialize `data` and store it under `key`, logging failures
pub(crate) fn write_through<T>(store: &dyn KeyValueStore, key: &str, data: &T) -> SpendlogResult<()>
where
    T: Serialize + ?Sized,
{
    let result = serde_json::to_value(data)
        .map_err(SpendlogError::from)
        .and_then(|value| store.set(key, &value));

    match &result {
        Ok(()) => debug!(key, "persisted"),
        Err(err) => warn!(key, error = %err, "write failed; in-memory state kept, stored copy is stale"),
    }

    result
}

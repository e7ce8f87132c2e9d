//! Storage layer for spendlog
//!
//! A key/value store adapter with JSON file and in-memory backends, the
//! expense ledger and budget registry that write through to it, and the
//! `Storage` composition root that wires them to one store.

pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod kv;

pub use budgets::BudgetRegistry;
pub use expenses::{ExpenseFilter, ExpenseLedger};
pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, Persisted};

use std::sync::Arc;

use crate::config::{Settings, SpendlogPaths};
use crate::error::SpendlogError;

/// The ledger and registry sharing one store
pub struct Storage {
    pub expenses: ExpenseLedger,
    pub budgets: BudgetRegistry,
}

impl Storage {
    /// Open the on-disk store under the data directory
    pub fn open(paths: &SpendlogPaths, settings: &Settings) -> Result<Self, SpendlogError> {
        paths.ensure_directories()?;
        let store = Arc::new(JsonFileStore::new(paths.data_dir()));
        Self::with_store(store, settings.seed_sample_data)
    }

    /// Build both containers from an injected store
    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        seed_samples: bool,
    ) -> Result<Self, SpendlogError> {
        Ok(Self {
            expenses: ExpenseLedger::load(store.clone(), seed_samples)?,
            budgets: BudgetRegistry::load(store, seed_samples)?,
        })
    }

    /// A throwaway store, mostly for tests
    pub fn in_memory(seed_samples: bool) -> Result<Self, SpendlogError> {
        Self::with_store(Arc::new(MemoryStore::new()), seed_samples)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::Value;

    use super::KeyValueStore;
    use crate::error::{SpendlogError, SpendlogResult};

    /// Reads as empty, rejects every write
    #[derive(Debug, Default)]
    pub struct FailingStore;

    impl FailingStore {
        pub fn new() -> Self {
            Self
        }
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> SpendlogResult<Option<Value>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &Value) -> SpendlogResult<()> {
            Err(SpendlogError::Storage(format!(
                "quota exceeded while writing {}",
                key
            )))
        }
    }
}

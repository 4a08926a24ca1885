//! In-memory store implementation.
//!
//! Provides a BTreeMap-based store that doesn't persist data. Failure
//! switches let tests exercise the best-effort persistence paths.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::error::{StorageError, StorageResult};
use crate::service::KeyValueStore;

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored values (key -> value)
    entries: RefCell<BTreeMap<String, String>>,
    /// Fail every read with an I/O error
    fail_reads: Cell<bool>,
    /// Fail every write with an I/O error
    fail_writes: Cell<bool>,
    /// Number of successful writes
    writes: Cell<u64>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make subsequent reads fail (for testing).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make subsequent writes fail (for testing).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of writes that reached the map.
    pub fn write_count(&self) -> u64 {
        self.writes.get()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(StorageError::io("simulated read failure"));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::io("simulated write failure"));
        }
        if key.is_empty() {
            return Err(StorageError::invalid_key(key));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::io("simulated write failure"));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;

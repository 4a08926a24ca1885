//! Service trait for the storage layer.
//!
//! Defines the interface every persistence backend implements.

use std::rc::Rc;

use crate::error::StorageResult;

/// Key-value storage interface.
///
/// Methods take `&self`; backends that mutate in memory use interior
/// mutability so a single store can be shared between the engine and its host.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `Ok(None)` if absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write (create or overwrite) the value under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the value under `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check whether a value exists under `key`.
    fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

//! Preference persistence
//!
//! The committed geometry and lifecycle state are written as one JSON record
//! under a namespaced key. Reads never fail: a missing, unreadable or
//! malformed record yields the defaults. Writes never fail either: errors
//! are logged and dropped, with no retry.

use serde::{Deserialize, Serialize};
use spm_store::KeyValueStore;
use tracing::{debug, trace, warn};

use crate::error::{PanelError, PanelResult};
use crate::math::{Size, Vec2};
use crate::window::WindowState;

/// Persisted panel preferences
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedPreferences {
    pub size: Size,
    pub position: Vec2,
    pub state: WindowState,
}

impl PersistedPreferences {
    /// Parse and validate a stored record
    pub fn from_json(json: &str) -> PanelResult<Self> {
        let prefs: PersistedPreferences = serde_json::from_str(json)?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Serialize to the stored JSON form
    pub fn to_json(&self) -> PanelResult<String> {
        serde_json::to_string(self).map_err(|e| PanelError::PersistenceWrite(e.to_string()))
    }

    /// Check that all numbers are finite and the size positive
    pub fn validate(&self) -> PanelResult<()> {
        if !self.size.is_positive() {
            return Err(PanelError::PersistenceRead(format!(
                "size {}x{} is not positive",
                self.size.width, self.size.height
            )));
        }
        if !self.position.is_finite() {
            return Err(PanelError::PersistenceRead(
                "position is not finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Best-effort preference storage on top of a [`KeyValueStore`]
pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
    key: String,
    defaults: PersistedPreferences,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S, key: impl Into<String>, defaults: PersistedPreferences) -> Self {
        Self {
            store,
            key: key.into(),
            defaults,
        }
    }

    /// Read the stored record; `Ok(None)` when nothing is stored
    pub fn try_load(&self) -> PanelResult<Option<PersistedPreferences>> {
        match self.store.get(&self.key)? {
            Some(json) => PersistedPreferences::from_json(&json).map(Some),
            None => Ok(None),
        }
    }

    /// Stored preferences, or the defaults when they are missing or unusable
    pub fn load(&self) -> PersistedPreferences {
        match self.try_load() {
            Ok(Some(prefs)) => {
                debug!(key = %self.key, state = prefs.state.as_str(), "preferences loaded");
                prefs
            }
            Ok(None) => {
                debug!(key = %self.key, "no stored preferences, using defaults");
                self.defaults
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring stored preferences");
                self.defaults
            }
        }
    }

    /// Write the record, reporting failures
    pub fn try_save(&self, prefs: &PersistedPreferences) -> PanelResult<()> {
        let json = prefs.to_json()?;
        self.store
            .set(&self.key, &json)
            .map_err(|e| PanelError::PersistenceWrite(e.to_string()))?;
        trace!(key = %self.key, bytes = json.len(), "preferences saved");
        Ok(())
    }

    /// Write the record; failures are logged and dropped
    pub fn save(&self, prefs: &PersistedPreferences) {
        if let Err(e) = self.try_save(prefs) {
            warn!(key = %self.key, error = %e, "preferences not saved");
        }
    }

    pub fn defaults(&self) -> PersistedPreferences {
        self.defaults
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

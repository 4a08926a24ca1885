//! Error types for the panel manager
//!
//! None of these escape the public engine operations: the engine logs them
//! and keeps the geometry at its last good state. They exist so helpers can
//! use `?` and so log lines carry a uniform description.

use spm_store::StorageError;

use crate::math::Size;

/// Errors that can occur in panel manager operations
#[derive(Debug, Clone, PartialEq)]
pub enum PanelError {
    /// Stored preferences are missing, unreadable or malformed
    PersistenceRead(String),

    /// Preferences could not be written
    PersistenceWrite(String),

    /// The minimum panel size does not fit inside the viewport
    ViewportTooSmall {
        /// The viewport that was too small
        viewport: Size,
        /// The minimum size that did not fit
        minimum: Size,
    },

    /// A pointer-down named an affordance that does not exist
    InvalidHandle(String),

    /// A session was requested while another one is live
    ConcurrentSessionConflict {
        /// The session that was requested
        requested: &'static str,
        /// The session that is still active
        active: &'static str,
    },

    /// Configuration values are inconsistent
    InvalidConfig(String),
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersistenceRead(msg) => write!(f, "failed to read preferences: {}", msg),
            Self::PersistenceWrite(msg) => write!(f, "failed to write preferences: {}", msg),
            Self::ViewportTooSmall { viewport, minimum } => write!(
                f,
                "viewport {}x{} is smaller than the minimum panel size {}x{}",
                viewport.width, viewport.height, minimum.width, minimum.height
            ),
            Self::InvalidHandle(id) => write!(f, "unknown panel affordance '{}'", id),
            Self::ConcurrentSessionConflict { requested, active } => write!(
                f,
                "cannot start {} session while a {} session is active",
                requested, active
            ),
            Self::InvalidConfig(msg) => write!(f, "invalid panel config: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {}

impl From<serde_json::Error> for PanelError {
    fn from(e: serde_json::Error) -> Self {
        PanelError::PersistenceRead(e.to_string())
    }
}

impl From<StorageError> for PanelError {
    fn from(e: StorageError) -> Self {
        PanelError::PersistenceRead(e.to_string())
    }
}

/// Result type alias for panel operations
pub type PanelResult<T> = Result<T, PanelError>;

//! Key-value persistence port for the support panel manager
//!
//! The panel manager never talks to a concrete storage API. It is handed
//! something implementing [`KeyValueStore`] and reads/writes small string
//! records under namespaced keys:
//!
//! - **Service**: the [`KeyValueStore`] trait every backend implements
//! - **Memory**: [`MemoryStore`], a map-backed store for tests and headless hosts
//! - **File**: [`FileStore`], one file per key inside a directory
//! - **Local storage**: browser `window.localStorage` (wasm32 only)
//!
//! # Design Principles
//!
//! 1. **Strings in, strings out**: serialization belongs to the caller
//! 2. **Missing is not an error**: `get` returns `Ok(None)` for absent keys
//! 3. **Shared handles**: `&T` and `Rc<T>` are stores too, so a host can keep
//!    inspecting a store it lent to the engine
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               PreferenceStore                 │
//! │        (spm-panel, JSON encode/decode)        │
//! └───────────────────────┬──────────────────────┘
//!                         ▼
//! ┌──────────────────────────────────────────────┐
//! │                KeyValueStore                  │
//! │  ┌────────────┐ ┌───────────┐ ┌────────────┐  │
//! │  │ MemoryStore│ │ FileStore │ │LocalStorage│  │
//! │  └────────────┘ └───────────┘ └────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;
pub mod service;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;
pub use service::KeyValueStore;

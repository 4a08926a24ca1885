//! Floating Support Panel Manager
//!
//! This crate provides the geometry and state engine behind the support
//! chat panel:
//! - Lifecycle (closed, minimized, normal, maximized)
//! - Pointer-driven drag with magnetic snap zones
//! - Edge and corner resize with minimum sizes
//! - Viewport collision enforcement
//! - Eased, single-flight position animations
//! - Best-effort preference persistence
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`bounds`]: Keeps the panel inside the viewport
//! - [`snap`]: Snap zone generation and matching
//! - [`transition`]: Easing, animations and the frame scheduler port
//! - [`window`]: Lifecycle state machine and committed geometry
//! - [`input`]: Drag/resize sessions and input routing
//! - [`persistence`]: Preference record and store
//!
//! ## Example
//!
//! ```rust
//! use spm_panel::{ManualScheduler, PanelConfig, PanelEngine, Size, WindowState};
//! use spm_store::MemoryStore;
//!
//! let mut panel = PanelEngine::new(
//!     PanelConfig::default(),
//!     Size::new(1920.0, 1080.0),
//!     MemoryStore::new(),
//!     ManualScheduler::new(),
//! );
//! assert!(panel.open());
//!
//! panel.pointer_down(100.0, 100.0, "header");
//! panel.pointer_move(400.0, 300.0);
//! panel.pointer_up();
//!
//! assert_eq!(panel.state(), WindowState::Normal);
//! assert_eq!(panel.position().x, 324.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Animations run on an injected [`FrameScheduler`]
//! 3. **Injected Storage**: Preferences go through a `spm_store::KeyValueStore`
//! 4. **Infallible Operations**: Failures are logged and never reach the host

pub mod bounds;
pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod persistence;
pub mod snap;
pub mod transition;
pub mod types;
pub mod window;

mod engine;

// WASM exports (only available with "wasm" feature on wasm32)
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod wasm;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{PanelConfig, SnapConfig};
pub use engine::PanelEngine;
pub use error::{PanelError, PanelResult};
pub use input::{Affordance, InputResult, Key, ResizeHandle};
pub use math::{Rect, Size, Vec2};
pub use persistence::{PersistedPreferences, PreferenceStore};
pub use snap::{SnapAnchor, SnapKind, SnapZone};
pub use transition::{AnimationPurpose, FrameScheduler, ManualScheduler};
pub use types::{FrameToken, Millis};
pub use window::{PanelGeometry, Position, WindowState};

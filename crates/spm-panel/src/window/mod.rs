//! Panel lifecycle and geometry
//!
//! [`WindowState`] is the lifecycle state machine; [`PanelGeometry`] is the
//! explicit, serializable geometry the engine owns and hands to the pure
//! bounds and snap functions.

mod geometry;
mod state;

pub use geometry::{PanelGeometry, Position};
pub use state::{Transition, WindowState};

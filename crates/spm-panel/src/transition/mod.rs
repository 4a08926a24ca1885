//! Animation Engine
//!
//! Eased, cancelable, time-based interpolation of the panel origin:
//!
//! - [`easing`]: the ease-out-cubic curve
//! - [`PositionAnimation`]: one interpolation, evaluated at any time
//! - [`Animator`]: single-flight driver spreading an animation over frames
//! - [`FrameScheduler`]: host port for frame callbacks and the clock
//!
//! Animations only ever move the origin. Size changes apply immediately.

pub mod easing;

mod animation;
mod animator;
mod scheduler;

pub use animation::{AnimationPurpose, PositionAnimation};
pub use animator::{Animator, FrameOutcome};
pub use scheduler::{FrameScheduler, ManualScheduler};

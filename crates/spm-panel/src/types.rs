//! Core type definitions for the panel manager
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Handle returned by a [`FrameScheduler`](crate::transition::FrameScheduler)
/// for one scheduled frame callback.
///
/// Tokens only need to be unique among live requests; the engine compares
/// them for equality to drop callbacks from cancelled animations.
pub type FrameToken = u64;

/// Milliseconds on the scheduler's monotonic clock
pub type Millis = f64;

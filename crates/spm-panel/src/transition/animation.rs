//! Time-based position animation

use crate::math::Vec2;
use crate::types::Millis;

use super::easing::ease_out_cubic;

/// Why an animation is running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPurpose {
    /// Drag released on a snap zone
    Settle,
    /// Viewport changed and the panel was moved back inside
    Reposition,
    /// Panel growing to fill the viewport
    Maximize,
    /// Panel returning from maximized to its restore position
    Unmaximize,
}

/// Eased interpolation of the panel origin
#[derive(Clone, Debug, PartialEq)]
pub struct PositionAnimation {
    /// Starting origin
    pub from: Vec2,
    /// Target origin
    pub to: Vec2,
    /// Start time (ms)
    pub start_time: Millis,
    /// Duration (ms)
    pub duration_ms: f32,
    pub purpose: AnimationPurpose,
}

impl PositionAnimation {
    /// Create a new animation starting at `now`
    pub fn new(
        from: Vec2,
        to: Vec2,
        now: Millis,
        duration_ms: f32,
        purpose: AnimationPurpose,
    ) -> Self {
        Self {
            from,
            to,
            start_time: now,
            duration_ms,
            purpose,
        }
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self, now: Millis) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.start_time) as f32;
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Check if animation is complete
    pub fn is_complete(&self, now: Millis) -> bool {
        self.progress(now) >= 1.0
    }

    /// Get interpolated origin at `now`; exactly `to` once complete
    pub fn current(&self, now: Millis) -> Vec2 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_out_cubic(progress))
    }

    /// Get final origin
    pub fn final_position(&self) -> Vec2 {
        self.to
    }
}

//! Single-flight animation driver
//!
//! At most one animation is in flight. Starting another cancels the
//! previous frame request on the scheduler, so a late callback carrying the
//! old token is recognised as stale and dropped.

use tracing::trace;

use crate::math::Vec2;
use crate::types::FrameToken;

use super::animation::{AnimationPurpose, PositionAnimation};
use super::scheduler::FrameScheduler;

/// Result of delivering a frame to the animator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Token did not belong to the live animation; nothing happened
    Stale,
    /// Animation advanced and requested another frame
    Running(Vec2),
    /// Animation reached its target and ended
    Finished(Vec2),
}

#[derive(Clone, Debug)]
struct ActiveAnimation {
    animation: PositionAnimation,
    token: FrameToken,
    current: Vec2,
}

/// Drives one [`PositionAnimation`] at a time across scheduler frames
#[derive(Clone, Debug, Default)]
pub struct Animator {
    active: Option<ActiveAnimation>,
}

impl Animator {
    /// Create an idle animator
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating from `from` to `to`, cancelling any running animation
    pub fn start<F: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut F,
        from: Vec2,
        to: Vec2,
        duration_ms: f32,
        purpose: AnimationPurpose,
    ) {
        self.cancel(scheduler);
        let animation = PositionAnimation::new(from, to, scheduler.now_ms(), duration_ms, purpose);
        let token = scheduler.schedule_frame();
        trace!(?purpose, token, from_x = from.x, from_y = from.y, to_x = to.x, to_y = to.y, "animation started");
        self.active = Some(ActiveAnimation {
            animation,
            token,
            current: from,
        });
    }

    /// Stop the running animation where it is, returning its current origin
    pub fn cancel<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) -> Option<Vec2> {
        let active = self.active.take()?;
        scheduler.cancel(active.token);
        trace!(purpose = ?active.animation.purpose, token = active.token, "animation cancelled");
        Some(active.current)
    }

    /// Advance the animation for a fired frame
    pub fn on_frame<F: FrameScheduler + ?Sized>(
        &mut self,
        token: FrameToken,
        scheduler: &mut F,
    ) -> FrameOutcome {
        let Some(active) = self.active.as_mut() else {
            return FrameOutcome::Stale;
        };
        if active.token != token {
            return FrameOutcome::Stale;
        }

        let now = scheduler.now_ms();
        if active.animation.is_complete(now) {
            let end = active.animation.final_position();
            self.active = None;
            return FrameOutcome::Finished(end);
        }

        active.current = active.animation.current(now);
        active.token = scheduler.schedule_frame();
        FrameOutcome::Running(active.current)
    }

    /// Whether an animation is in flight
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Origin shown by the running animation at its last frame
    pub fn current(&self) -> Option<Vec2> {
        self.active.as_ref().map(|a| a.current)
    }

    /// The running animation
    pub fn animation(&self) -> Option<&PositionAnimation> {
        self.active.as_ref().map(|a| &a.animation)
    }

    /// Token of the frame the running animation is waiting for
    pub fn pending_token(&self) -> Option<FrameToken> {
        self.active.as_ref().map(|a| a.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::ManualScheduler;

    #[test]
    fn test_runs_to_exact_target() {
        let mut sched = ManualScheduler::new();
        let mut animator = Animator::new();
        let to = Vec2::new(340.0, 50.0);
        animator.start(&mut sched, Vec2::new(1700.0, 50.0), to, 200.0, AnimationPurpose::Reposition);

        let mut last = None;
        for _ in 0..20 {
            sched.advance(16.0);
            let token = animator.pending_token().unwrap();
            sched.fire(token);
            match animator.on_frame(token, &mut sched) {
                FrameOutcome::Running(pos) => {
                    assert!(pos.x <= 1700.0 && pos.x >= 340.0);
                }
                FrameOutcome::Finished(pos) => {
                    last = Some(pos);
                    break;
                }
                FrameOutcome::Stale => panic!("live token reported stale"),
            }
        }
        assert_eq!(last, Some(to));
        assert!(!animator.is_animating());
        assert!(sched.pending().is_empty());
    }

    #[test]
    fn test_single_flight() {
        let mut sched = ManualScheduler::new();
        let mut animator = Animator::new();

        animator.start(&mut sched, Vec2::ZERO, Vec2::new(100.0, 0.0), 150.0, AnimationPurpose::Settle);
        let first = animator.pending_token().unwrap();

        animator.start(&mut sched, Vec2::ZERO, Vec2::new(0.0, 100.0), 200.0, AnimationPurpose::Reposition);
        let second = animator.pending_token().unwrap();

        assert_ne!(first, second);
        assert_eq!(sched.pending(), vec![second]);
        assert_eq!(sched.cancelled_count(), 1);

        // A late callback for the cancelled animation is ignored
        sched.advance(500.0);
        assert_eq!(animator.on_frame(first, &mut sched), FrameOutcome::Stale);
        assert_eq!(
            animator.animation().unwrap().purpose,
            AnimationPurpose::Reposition
        );
        assert_eq!(
            animator.on_frame(second, &mut sched),
            FrameOutcome::Finished(Vec2::new(0.0, 100.0))
        );
    }

    #[test]
    fn test_cancel_returns_current() {
        let mut sched = ManualScheduler::new();
        let mut animator = Animator::new();
        animator.start(&mut sched, Vec2::ZERO, Vec2::new(100.0, 0.0), 100.0, AnimationPurpose::Settle);

        sched.advance(50.0);
        let token = animator.pending_token().unwrap();
        sched.fire(token);
        let FrameOutcome::Running(mid) = animator.on_frame(token, &mut sched) else {
            panic!("expected running");
        };

        assert_eq!(animator.cancel(&mut sched), Some(mid));
        assert!(sched.pending().is_empty());
        assert_eq!(animator.cancel(&mut sched), None);
    }
}

//! Frame scheduler port
//!
//! The engine never blocks or spawns: it asks the host for a frame, and the
//! host calls [`PanelEngine::on_frame`](crate::PanelEngine::on_frame) with
//! the returned token when the frame fires. In a browser that is
//! `requestAnimationFrame`; in tests it is [`ManualScheduler`].

use std::collections::BTreeSet;

use crate::types::{FrameToken, Millis};

/// Host frame scheduling and clock
pub trait FrameScheduler {
    /// Request one frame callback, returning its token
    fn schedule_frame(&mut self) -> FrameToken;

    /// Cancel a pending frame callback. Unknown tokens are ignored.
    fn cancel(&mut self, token: FrameToken);

    /// Current time on a monotonic millisecond clock
    fn now_ms(&self) -> Millis;
}

/// Deterministic scheduler with a hand-driven clock
///
/// Frames never fire on their own: the owner reads [`pending`](Self::pending)
/// and forwards tokens to the engine after advancing the clock.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Millis,
    next_token: FrameToken,
    pending: BTreeSet<FrameToken>,
    cancelled: u64,
}

impl ManualScheduler {
    /// Create a scheduler with the clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward
    pub fn advance(&mut self, ms: Millis) {
        self.now += ms;
    }

    /// Set the clock (for testing)
    pub fn set_now(&mut self, now: Millis) {
        self.now = now;
    }

    /// Tokens requested and neither fired nor cancelled
    pub fn pending(&self) -> Vec<FrameToken> {
        self.pending.iter().copied().collect()
    }

    /// Mark a token as fired, returning whether it was pending
    pub fn fire(&mut self, token: FrameToken) -> bool {
        self.pending.remove(&token)
    }

    /// Number of successful cancellations so far
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_frame(&mut self) -> FrameToken {
        self.next_token += 1;
        self.pending.insert(self.next_token);
        self.next_token
    }

    fn cancel(&mut self, token: FrameToken) {
        if self.pending.remove(&token) {
            self.cancelled += 1;
        }
    }

    fn now_ms(&self) -> Millis {
        self.now
    }
}

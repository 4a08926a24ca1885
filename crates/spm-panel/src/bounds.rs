//! Viewport collision enforcement
//!
//! Pure functions keeping the panel inside the viewport with a safety
//! buffer. They run after every drag update, after every viewport-resize
//! reconciliation, and whenever the panel enters Normal state.

use crate::math::{Size, Vec2};

/// Clamp a panel origin into the viewport.
///
/// Each axis ends up in `[buffer, viewport - size - buffer]`. When that
/// interval is empty the panel cannot keep the buffer on both sides; it is
/// then centered on the axis, but never pushed past the top/left edge so the
/// header stays reachable.
pub fn enforce_bounds(position: Vec2, size: Size, viewport: Size, buffer: f32) -> Vec2 {
    Vec2::new(
        enforce_axis(position.x, size.width, viewport.width, buffer),
        enforce_axis(position.y, size.height, viewport.height, buffer),
    )
}

fn enforce_axis(pos: f32, size: f32, view: f32, buffer: f32) -> f32 {
    let lo = buffer;
    let hi = view - size - buffer;
    if hi >= lo {
        pos.clamp(lo, hi)
    } else {
        ((view - size) * 0.5).max(0.0)
    }
}

/// Whether `enforce_bounds` would leave `position` untouched.
pub fn within_bounds(position: Vec2, size: Size, viewport: Size, buffer: f32) -> bool {
    enforce_bounds(position, size, viewport, buffer) == position
}

/// Shrink a panel size to what the viewport can hold.
///
/// Each dimension is capped at `viewport - 2 * buffer`, then raised back to
/// `minimum`: the minimum wins, and the panel may overlap the viewport edges
/// as a last resort.
pub fn fit_size(size: Size, minimum: Size, viewport: Size, buffer: f32) -> Size {
    let max_w = viewport.width - 2.0 * buffer;
    let max_h = viewport.height - 2.0 * buffer;
    Size::new(
        size.width.min(max_w).max(minimum.width),
        size.height.min(max_h).max(minimum.height),
    )
}

/// Whether even the minimum panel size overflows the buffered viewport.
pub fn viewport_too_small(minimum: Size, viewport: Size, buffer: f32) -> bool {
    minimum.width > viewport.width - 2.0 * buffer || minimum.height > viewport.height - 2.0 * buffer
}

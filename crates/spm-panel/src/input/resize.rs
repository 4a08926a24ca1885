//! Edge and corner resize

use crate::math::{Size, Vec2};

use super::ResizeHandle;

/// Live record of a resize gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    pub handle: ResizeHandle,
    pub start_size: Size,
    pub start_pointer: Vec2,
    /// Origin at pointer-down; left/top handles move it
    pub start_position: Vec2,
}

/// Calculate new origin and size for a pointer at `pointer`.
///
/// Dragged edges follow the pointer delta while the opposite edge stays put.
/// Each dimension is clamped to the space between the anchored edge and the
/// far viewport edge minus `buffer`, but never below `min_size`.
pub fn calculate_resize(
    session: &ResizeSession,
    pointer: Vec2,
    min_size: Size,
    viewport: Size,
    buffer: f32,
) -> (Vec2, Size) {
    let delta = pointer - session.start_pointer;
    let handle = session.handle;

    let (x, width) = resize_axis(
        session.start_position.x,
        session.start_size.width,
        delta.x,
        handle.has_left(),
        handle.has_right(),
        min_size.width,
        viewport.width,
        buffer,
    );
    let (y, height) = resize_axis(
        session.start_position.y,
        session.start_size.height,
        delta.y,
        handle.has_top(),
        handle.has_bottom(),
        min_size.height,
        viewport.height,
        buffer,
    );

    (Vec2::new(x, y), Size::new(width, height))
}

#[allow(clippy::too_many_arguments)]
fn resize_axis(
    start: f32,
    length: f32,
    delta: f32,
    grows_backward: bool,
    grows_forward: bool,
    min: f32,
    view: f32,
    buffer: f32,
) -> (f32, f32) {
    if grows_forward {
        // Leading edge anchored
        let max = view - buffer - start;
        let len = (length + delta).min(max).max(min);
        (start, len)
    } else if grows_backward {
        // Trailing edge anchored
        let end = start + length;
        let max = end - buffer;
        let len = (length - delta).min(max).max(min);
        (end - len, len)
    } else {
        (start, length)
    }
}

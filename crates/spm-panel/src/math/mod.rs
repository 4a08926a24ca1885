//! Core geometry types for the panel manager
//!
//! These types provide basic 2D math for positioning and sizing the panel
//! in screen space (pixels, origin at the viewport's top-left).

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

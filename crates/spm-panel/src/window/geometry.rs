//! Committed panel geometry

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::snap::SnapAnchor;

/// Top-left origin of the panel and its snap status
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    /// The panel center was within the snap threshold of a zone at the last update
    pub is_snapped: bool,
    /// Zone the panel is docked to while snapped
    pub snap_zone: Option<SnapAnchor>,
}

impl Position {
    /// Unsnapped position at `origin`
    pub fn free(origin: Vec2) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            is_snapped: false,
            snap_zone: None,
        }
    }

    /// Position docked to `anchor`
    pub fn snapped(origin: Vec2, anchor: SnapAnchor) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            is_snapped: true,
            snap_zone: Some(anchor),
        }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Move the origin, keeping snap status
    pub fn set_origin(&mut self, origin: Vec2) {
        self.x = origin.x;
        self.y = origin.y;
    }

    /// Drop snap status
    pub fn unsnap(&mut self) {
        self.is_snapped = false;
        self.snap_zone = None;
    }
}

/// Size and position of the panel in Normal state
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub size: Size,
    pub position: Position,
}

impl PanelGeometry {
    pub fn new(origin: Vec2, size: Size) -> Self {
        Self {
            size,
            position: Position::free(origin),
        }
    }
}

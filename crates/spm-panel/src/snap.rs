//! Magnetic snap zones
//!
//! Zones are generated wholesale from the viewport size and never mutated.
//! Generation order is part of the contract: when two zone centers are
//! exactly as far from the panel center, the zone generated first wins.
//!
//! ```text
//!  ┌──────────────────────────────────────────┐
//!  │ [TL]            [ Top ]             [TR] │
//!  │                                          │
//!  │[L]             [ Center ]             [R]│
//!  │                                          │
//!  │ [BL]           [Bottom ]            [BR] │
//!  └──────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::config::SnapConfig;
use crate::math::{Rect, Size, Vec2};

/// Category of a snap zone
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapKind {
    Corner,
    Edge,
    Center,
}

/// Logical identity of a zone, stable across regeneration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Right,
    Bottom,
    Left,
    Center,
}

impl SnapAnchor {
    /// All anchors in generation order
    pub const ALL: [SnapAnchor; 9] = [
        SnapAnchor::TopLeft,
        SnapAnchor::TopRight,
        SnapAnchor::BottomLeft,
        SnapAnchor::BottomRight,
        SnapAnchor::Top,
        SnapAnchor::Right,
        SnapAnchor::Bottom,
        SnapAnchor::Left,
        SnapAnchor::Center,
    ];

    /// Zone category for this anchor
    pub fn kind(self) -> SnapKind {
        match self {
            SnapAnchor::TopLeft
            | SnapAnchor::TopRight
            | SnapAnchor::BottomLeft
            | SnapAnchor::BottomRight => SnapKind::Corner,
            SnapAnchor::Top | SnapAnchor::Right | SnapAnchor::Bottom | SnapAnchor::Left => {
                SnapKind::Edge
            }
            SnapAnchor::Center => SnapKind::Center,
        }
    }
}

/// A magnetic target region
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapZone {
    pub anchor: SnapAnchor,
    pub kind: SnapKind,
    pub bounds: Rect,
    /// Relative pull; reserved for weighting, not used for tie-breaking
    pub magnetic_strength: f32,
}

impl SnapZone {
    /// Center of the zone, the point a snapped panel centers on
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Panel origin that puts a panel of `size` centered on this zone
    pub fn snapped_origin(&self, size: Size) -> Vec2 {
        self.center() - size.half()
    }
}

/// Generate the snap zones for a viewport.
///
/// Order: four corners (TL, TR, BL, BR), four edge midpoints (top, right,
/// bottom, left), then the center.
pub fn generate_snap_zones(viewport: Size, config: &SnapConfig) -> Vec<SnapZone> {
    let (vw, vh) = (viewport.width, viewport.height);
    let inset = config.inset;
    let corner = config.corner_size;
    let len = config.edge_length;
    let thick = config.edge_thickness;

    SnapAnchor::ALL
        .iter()
        .map(|&anchor| {
            let bounds = match anchor {
                SnapAnchor::TopLeft => Rect::new(inset, inset, corner, corner),
                SnapAnchor::TopRight => Rect::new(vw - inset - corner, inset, corner, corner),
                SnapAnchor::BottomLeft => Rect::new(inset, vh - inset - corner, corner, corner),
                SnapAnchor::BottomRight => {
                    Rect::new(vw - inset - corner, vh - inset - corner, corner, corner)
                }
                SnapAnchor::Top => Rect::new((vw - len) * 0.5, inset, len, thick),
                SnapAnchor::Right => Rect::new(vw - inset - thick, (vh - len) * 0.5, thick, len),
                SnapAnchor::Bottom => Rect::new((vw - len) * 0.5, vh - inset - thick, len, thick),
                SnapAnchor::Left => Rect::new(inset, (vh - len) * 0.5, thick, len),
                SnapAnchor::Center => Rect::centered(
                    Vec2::new(vw * 0.5, vh * 0.5),
                    Size::new(config.center_size, config.center_size),
                ),
            };
            let magnetic_strength = match anchor.kind() {
                SnapKind::Center => config.strength * config.center_strength_factor,
                _ => config.strength,
            };
            SnapZone {
                anchor,
                kind: anchor.kind(),
                bounds,
                magnetic_strength,
            }
        })
        .collect()
}

/// Find the zone pulling a panel centered at `panel_center`.
///
/// Only zones whose center lies within `threshold` are candidates; the
/// nearest wins and exact ties go to the earlier zone.
pub fn find_snap_zone(zones: &[SnapZone], panel_center: Vec2, threshold: f32) -> Option<&SnapZone> {
    let mut best: Option<(&SnapZone, f32)> = None;
    for zone in zones {
        let distance = zone.center().distance(panel_center);
        if distance > threshold {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((zone, distance)),
        }
    }
    best.map(|(zone, _)| zone)
}

/// Look up a zone by anchor in a generated set
pub fn zone_for(zones: &[SnapZone], anchor: SnapAnchor) -> Option<&SnapZone> {
    zones.iter().find(|z| z.anchor == anchor)
}

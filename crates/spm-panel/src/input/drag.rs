//! Drag with magnetic snapping

use crate::bounds::enforce_bounds;
use crate::config::PanelConfig;
use crate::math::{Size, Vec2};
use crate::snap::{find_snap_zone, SnapZone};
use crate::window::Position;

/// Live record of a header drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer minus panel top-left at pointer-down
    pub pointer_start_offset: Vec2,
    /// Position when the drag began
    pub origin_position: Position,
}

impl DragSession {
    /// Start a drag with the pointer at `pointer` over a panel drawn at `origin`
    pub fn begin(pointer: Vec2, origin: Vec2, position: Position) -> Self {
        Self {
            pointer_start_offset: pointer - origin,
            origin_position: position,
        }
    }
}

/// Compute the live position for a pointer at `pointer`.
///
/// The candidate origin is pulled onto the nearest zone within the snap
/// threshold, then clamped into the viewport.
pub fn drag_step(
    session: &DragSession,
    pointer: Vec2,
    size: Size,
    viewport: Size,
    zones: &[SnapZone],
    config: &PanelConfig,
) -> Position {
    let candidate = pointer - session.pointer_start_offset;
    let center = candidate + size.half();

    let mut position = match find_snap_zone(zones, center, config.snap.threshold) {
        Some(zone) => Position::snapped(zone.snapped_origin(size), zone.anchor),
        None => Position::free(candidate),
    };
    position.set_origin(enforce_bounds(position.origin(), size, viewport, config.buffer));
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap::{generate_snap_zones, SnapAnchor};

    const VIEWPORT: Size = Size::new(1920.0, 1080.0);
    const PANEL: Size = Size::new(450.0, 600.0);

    fn setup() -> (PanelConfig, Vec<SnapZone>) {
        let config = PanelConfig::default();
        let zones = generate_snap_zones(VIEWPORT, &config.snap);
        (config, zones)
    }

    #[test]
    fn test_free_drag_follows_pointer() {
        let (config, zones) = setup();
        let origin = Vec2::new(24.0, 24.0);
        let session = DragSession::begin(Vec2::new(100.0, 100.0), origin, Position::free(origin));
        assert_eq!(session.pointer_start_offset, Vec2::new(76.0, 76.0));

        let pos = drag_step(&session, Vec2::new(400.0, 300.0), PANEL, VIEWPORT, &zones, &config);
        assert_eq!(pos.origin(), Vec2::new(324.0, 224.0));
        assert!(!pos.is_snapped);
    }

    #[test]
    fn test_drag_past_edge_is_clamped() {
        let (config, zones) = setup();
        let origin = Vec2::new(24.0, 24.0);
        let session = DragSession::begin(Vec2::new(100.0, 100.0), origin, Position::free(origin));

        let pos = drag_step(&session, Vec2::new(10.0, 10.0), PANEL, VIEWPORT, &zones, &config);
        assert_eq!(pos.origin(), Vec2::new(10.0, 10.0));
        assert!(!pos.is_snapped);
    }

    #[test]
    fn test_drag_near_center_snaps() {
        let (config, zones) = setup();
        let origin = Vec2::new(24.0, 24.0);
        let session = DragSession::begin(Vec2::new(44.0, 44.0), origin, Position::free(origin));

        // Candidate (740, 240): panel center 5px from the viewport center
        let pos = drag_step(&session, Vec2::new(760.0, 260.0), PANEL, VIEWPORT, &zones, &config);
        assert!(pos.is_snapped);
        assert_eq!(pos.snap_zone, Some(SnapAnchor::Center));
        assert_eq!(pos.origin(), Vec2::new(735.0, 240.0));
    }

    #[test]
    fn test_corner_snap_is_enforced() {
        let (config, zones) = setup();
        let size = Size::new(300.0, 400.0);
        let origin = Vec2::new(400.0, 400.0);
        let session = DragSession::begin(Vec2::new(410.0, 410.0), origin, Position::free(origin));

        // Candidate center (-75+150, -125+200) = (75, 75), 7px from the TL zone center
        let pos = drag_step(&session, Vec2::new(-65.0, -115.0), size, VIEWPORT, &zones, &config);
        assert!(pos.is_snapped);
        assert_eq!(pos.snap_zone, Some(SnapAnchor::TopLeft));
        // Zone center minus half size is (-80, -130); bounds pull it to the buffer
        assert_eq!(pos.origin(), Vec2::new(10.0, 10.0));
    }
}

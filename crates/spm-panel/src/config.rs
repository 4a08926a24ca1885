//! Panel configuration
//!
//! Every tunable constant of the panel manager lives here. Hosts usually take
//! [`PanelConfig::default`]; a JSON object can override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, PanelResult};
use crate::math::{Size, Vec2};

/// Key under which preferences are stored
pub const DEFAULT_STORAGE_KEY: &str = "spm:support-panel:preferences";

/// Duration of the post-snap settle animation in milliseconds
pub const SETTLE_DURATION_MS: f32 = 150.0;

/// Duration of the post-viewport-resize reposition in milliseconds
pub const REPOSITION_DURATION_MS: f32 = 200.0;

/// Duration of the maximize/unmaximize transition in milliseconds
pub const MAXIMIZE_DURATION_MS: f32 = 250.0;

/// Magnetic snap zone layout
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Max distance between panel center and zone center for a snap
    pub threshold: f32,
    /// Side length of the square corner zones
    pub corner_size: f32,
    /// Distance of every zone from the viewport edge it hugs
    pub inset: f32,
    /// Length of edge zones along their edge
    pub edge_length: f32,
    /// Thickness of edge zones perpendicular to their edge
    pub edge_thickness: f32,
    /// Side length of the center zone
    pub center_size: f32,
    /// Magnetic strength of corner and edge zones
    pub strength: f32,
    /// Center zone strength as a fraction of `strength`
    pub center_strength_factor: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold: 30.0,
            corner_size: 100.0,
            inset: 20.0,
            edge_length: 200.0,
            edge_thickness: 60.0,
            center_size: 200.0,
            strength: 1.0,
            center_strength_factor: 0.7,
        }
    }
}

/// Configuration for the panel engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Smallest size the panel may take in Normal state
    pub min_size: Size,
    /// Size used when no preferences are stored
    pub default_size: Size,
    /// Position used when no preferences are stored
    pub default_position: Vec2,
    /// Minimum inset between panel edges and viewport edges
    pub buffer: f32,
    /// Snap zone layout
    pub snap: SnapConfig,
    pub settle_duration_ms: f32,
    pub reposition_duration_ms: f32,
    pub maximize_duration_ms: f32,
    /// Rendered size while minimized (the panel Size is not consulted)
    pub minimized_size: Size,
    /// Height of the header strip (drag affordance) above the content region
    pub header_height: f32,
    /// Key-value store key for persisted preferences
    pub storage_key: String,
    /// Adopt the persisted window state at start-up instead of starting Closed
    pub restore_window_state: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(300.0, 400.0),
            default_size: Size::new(450.0, 600.0),
            default_position: Vec2::new(24.0, 24.0),
            buffer: 10.0,
            snap: SnapConfig::default(),
            settle_duration_ms: SETTLE_DURATION_MS,
            reposition_duration_ms: REPOSITION_DURATION_MS,
            maximize_duration_ms: MAXIMIZE_DURATION_MS,
            minimized_size: Size::new(300.0, 64.0),
            header_height: 64.0,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            restore_window_state: false,
        }
    }
}

impl PanelConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> PanelResult<Self> {
        let config: PanelConfig =
            serde_json::from_str(json).map_err(|e| PanelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values are usable together
    pub fn validate(&self) -> PanelResult<()> {
        if !self.min_size.is_positive() {
            return Err(PanelError::InvalidConfig(
                "min_size must be positive".into(),
            ));
        }
        if !self.default_size.is_positive()
            || self.default_size.width < self.min_size.width
            || self.default_size.height < self.min_size.height
        {
            return Err(PanelError::InvalidConfig(
                "default_size must be at least min_size".into(),
            ));
        }
        if !self.default_position.is_finite() {
            return Err(PanelError::InvalidConfig(
                "default_position must be finite".into(),
            ));
        }
        if !non_negative(self.buffer) || !non_negative(self.snap.threshold) {
            return Err(PanelError::InvalidConfig(
                "buffer and snap threshold must be non-negative".into(),
            ));
        }
        if !non_negative(self.header_height) || !self.minimized_size.is_positive() {
            return Err(PanelError::InvalidConfig(
                "header and minimized sizes must be positive".into(),
            ));
        }
        if self.storage_key.is_empty() {
            return Err(PanelError::InvalidConfig("storage_key is empty".into()));
        }
        Ok(())
    }
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

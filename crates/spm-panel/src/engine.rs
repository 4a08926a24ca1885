//! Panel engine
//!
//! [`PanelEngine`] owns the panel's lifecycle state, committed geometry,
//! snap zones, the live pointer session and the running animation. Every
//! public operation is infallible: failures are logged and the geometry
//! stays at its last good value.
//!
//! Geometry is committed eagerly. When something animates, the stored
//! position is already the destination and the animation only drives the
//! origin reported by [`PanelEngine::frame`].

use spm_store::KeyValueStore;
use tracing::{debug, info, trace, warn};

use crate::bounds::{enforce_bounds, fit_size, viewport_too_small, within_bounds};
use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::input::{
    calculate_resize, drag_step, Affordance, DragSession, InputResult, InputRouter, Key,
    ResizeSession, Session,
};
use crate::math::{Rect, Size, Vec2};
use crate::persistence::{PersistedPreferences, PreferenceStore};
use crate::snap::{generate_snap_zones, zone_for, SnapZone};
use crate::transition::{
    AnimationPurpose, Animator, FrameOutcome, FrameScheduler, PositionAnimation,
};
use crate::types::FrameToken;
use crate::window::{PanelGeometry, Position, Transition, WindowState};

/// The floating support panel
pub struct PanelEngine<S: KeyValueStore, F: FrameScheduler> {
    config: PanelConfig,
    state: WindowState,
    geometry: PanelGeometry,
    viewport: Size,
    /// Viewport change that arrived during a session
    pending_viewport: Option<Size>,
    zones: Vec<SnapZone>,
    input: InputRouter,
    animator: Animator,
    scheduler: F,
    prefs: PreferenceStore<S>,
}

impl<S: KeyValueStore, F: FrameScheduler> PanelEngine<S, F> {
    /// Create an engine for a viewport, restoring stored preferences.
    ///
    /// An invalid config is logged and replaced by [`PanelConfig::default`].
    pub fn new(config: PanelConfig, viewport: Size, store: S, scheduler: F) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(error = %e, "falling back to default panel config");
                PanelConfig::default()
            }
        };
        let viewport = sanitize_viewport(viewport);

        let defaults = PersistedPreferences {
            size: config.default_size,
            position: config.default_position,
            state: WindowState::Closed,
        };
        let prefs = PreferenceStore::new(store, config.storage_key.clone(), defaults);
        let loaded = prefs.load();

        let state = if config.restore_window_state {
            loaded.state
        } else {
            WindowState::Closed
        };
        let geometry = PanelGeometry::new(loaded.position, loaded.size.max(config.min_size));
        let zones = generate_snap_zones(viewport, &config.snap);

        let mut engine = Self {
            config,
            state,
            geometry,
            viewport,
            pending_viewport: None,
            zones,
            input: InputRouter::new(),
            animator: Animator::new(),
            scheduler,
            prefs,
        };
        engine.check_viewport();
        if engine.state == WindowState::Normal {
            engine.geometry = engine.reconciled_geometry();
        }
        info!(
            state = engine.state.as_str(),
            width = viewport.width,
            height = viewport.height,
            "panel engine initialized"
        );
        engine
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Closed -> Normal
    pub fn open(&mut self) -> bool {
        self.transition(Transition::Open)
    }

    /// Normal | Maximized -> Minimized
    pub fn minimize(&mut self) -> bool {
        self.transition(Transition::Minimize)
    }

    /// Minimized -> Normal
    pub fn restore(&mut self) -> bool {
        self.transition(Transition::Restore)
    }

    /// Normal -> Maximized
    pub fn maximize(&mut self) -> bool {
        self.transition(Transition::Maximize)
    }

    /// Maximized -> Normal
    pub fn unmaximize(&mut self) -> bool {
        self.transition(Transition::Unmaximize)
    }

    /// Any open state -> Closed
    pub fn close(&mut self) -> bool {
        self.transition(Transition::Close)
    }

    /// Header minimize button: minimizes, or restores when already minimized
    pub fn toggle_minimized(&mut self) -> bool {
        match self.state {
            WindowState::Minimized => self.restore(),
            _ => self.minimize(),
        }
    }

    /// Header maximize button
    pub fn toggle_maximized(&mut self) -> bool {
        match self.state {
            WindowState::Maximized => self.unmaximize(),
            _ => self.maximize(),
        }
    }

    fn transition(&mut self, transition: Transition) -> bool {
        let Some(next) = self.state.apply(transition) else {
            debug!(
                op = transition.name(),
                state = self.state.as_str(),
                "transition not allowed, ignored"
            );
            return false;
        };

        if let Some(session) = self.input.end() {
            debug!(session = session.name(), op = transition.name(), "session terminated by transition");
        }
        self.adopt_pending_viewport();

        let previous = self.state;
        self.state = next;

        match transition {
            Transition::Open | Transition::Restore => {
                self.animator.cancel(&mut self.scheduler);
                self.geometry = self.reconciled_geometry();
            }
            Transition::Maximize => {
                let from = self.rendered_origin(previous);
                self.geometry.position.unsnap();
                self.animator.start(
                    &mut self.scheduler,
                    from,
                    Vec2::ZERO,
                    self.config.maximize_duration_ms,
                    AnimationPurpose::Maximize,
                );
            }
            Transition::Unmaximize => {
                let from = self.rendered_origin(previous);
                self.geometry = self.reconciled_geometry();
                self.animator.start(
                    &mut self.scheduler,
                    from,
                    self.geometry.position.origin(),
                    self.config.maximize_duration_ms,
                    AnimationPurpose::Unmaximize,
                );
            }
            Transition::Minimize | Transition::Close => {
                self.animator.cancel(&mut self.scheduler);
            }
        }

        info!(from = previous.as_str(), to = next.as_str(), "panel state changed");
        self.persist();
        true
    }

    // =========================================================================
    // Pointer and keyboard input
    // =========================================================================

    /// Pointer pressed on the affordance named `affordance`
    pub fn pointer_down(&mut self, x: f32, y: f32, affordance: &str) -> InputResult {
        match Affordance::parse(affordance) {
            Ok(affordance) => self.pointer_down_on(x, y, affordance),
            Err(e) => {
                warn!(error = %e, "pointer-down ignored");
                InputResult::Unhandled
            }
        }
    }

    /// Pointer pressed on an already-parsed affordance
    fn pointer_down_on(&mut self, x: f32, y: f32, affordance: Affordance) -> InputResult {
        if !self.state.allows_sessions() {
            debug!(
                session = affordance.session_name(),
                state = self.state.as_str(),
                "pointer-down ignored outside normal state"
            );
            return InputResult::Unhandled;
        }
        if let Some(active) = self.input.session() {
            let conflict = PanelError::ConcurrentSessionConflict {
                requested: affordance.session_name(),
                active: active.name(),
            };
            debug!(error = %conflict, "pointer-down ignored");
            return InputResult::Unhandled;
        }

        let pointer = Vec2::new(x, y);
        let rendered = self.rendered_origin(self.state);
        if self.animator.cancel(&mut self.scheduler).is_some() {
            let origin = enforce_bounds(rendered, self.geometry.size, self.viewport, self.config.buffer);
            self.geometry.position.set_origin(origin);
        }

        let session = match affordance {
            Affordance::Header => Session::Drag(DragSession::begin(
                pointer,
                rendered,
                self.geometry.position,
            )),
            Affordance::Resize(handle) => Session::Resize(ResizeSession {
                handle,
                start_size: self.geometry.size,
                start_pointer: pointer,
                start_position: self.geometry.position.origin(),
            }),
        };

        match self.input.begin(session) {
            Ok(()) => {
                debug!(session = session.name(), x, y, "session started");
                InputResult::Handled
            }
            Err(e) => {
                debug!(error = %e, "pointer-down ignored");
                InputResult::Unhandled
            }
        }
    }

    /// Pointer moved; updates the live geometry of the active session
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);
        match self.input.session().copied() {
            Some(Session::Drag(session)) => {
                self.geometry.position = drag_step(
                    &session,
                    pointer,
                    self.geometry.size,
                    self.viewport,
                    &self.zones,
                    &self.config,
                );
                trace!(
                    x = self.geometry.position.x,
                    y = self.geometry.position.y,
                    snapped = self.geometry.position.is_snapped,
                    "drag"
                );
                InputResult::Handled
            }
            Some(Session::Resize(session)) => {
                let (origin, size) = calculate_resize(
                    &session,
                    pointer,
                    self.config.min_size,
                    self.viewport,
                    self.config.buffer,
                );
                self.geometry.size = size;
                self.geometry.position.set_origin(origin);
                trace!(width = size.width, height = size.height, "resize");
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Pointer released; ends the session, settling onto a snap zone
    pub fn pointer_up(&mut self) -> InputResult {
        self.finish_session(true)
    }

    /// Pointer cancelled; ends the session without settling
    pub fn pointer_cancel(&mut self) -> InputResult {
        self.finish_session(false)
    }

    /// Keyboard activation: Enter/Space restore a minimized panel, Escape
    /// cancels a live session
    pub fn key_down(&mut self, key: Key) -> InputResult {
        match key {
            Key::Enter | Key::Space if self.state == WindowState::Minimized => {
                self.restore();
                InputResult::Handled
            }
            Key::Escape if self.input.is_active() => self.pointer_cancel(),
            _ => InputResult::Unhandled,
        }
    }

    fn finish_session(&mut self, settle: bool) -> InputResult {
        let Some(session) = self.input.end() else {
            return InputResult::Unhandled;
        };

        if settle && matches!(session, Session::Drag(_)) && self.geometry.position.is_snapped {
            let preview = self.geometry.position.origin();
            let target = self.settle_target();
            self.geometry.position.set_origin(target);
            self.animator.start(
                &mut self.scheduler,
                preview,
                target,
                self.config.settle_duration_ms,
                AnimationPurpose::Settle,
            );
        }
        debug!(
            session = session.name(),
            x = self.geometry.position.x,
            y = self.geometry.position.y,
            width = self.geometry.size.width,
            height = self.geometry.size.height,
            "session ended"
        );

        if let Some(viewport) = self.pending_viewport.take() {
            self.apply_viewport(viewport);
        }
        self.persist();
        InputResult::Handled
    }

    /// Enforced origin of the zone the panel is snapped to
    fn settle_target(&self) -> Vec2 {
        let size = self.geometry.size;
        let origin = self
            .geometry
            .position
            .snap_zone
            .and_then(|anchor| zone_for(&self.zones, anchor))
            .map(|zone| zone.snapped_origin(size))
            .unwrap_or_else(|| self.geometry.position.origin());
        enforce_bounds(origin, size, self.viewport, self.config.buffer)
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Viewport dimensions changed.
    ///
    /// During a session the change is held back and applied when it ends.
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        let viewport = Size::new(width, height);
        if !viewport.is_positive() {
            warn!(width, height, "ignoring degenerate viewport");
            return;
        }
        if self.input.is_active() {
            debug!(width, height, "viewport change deferred until session ends");
            self.pending_viewport = Some(viewport);
            return;
        }
        if viewport == self.viewport {
            return;
        }
        self.apply_viewport(viewport);
        self.persist();
    }

    fn apply_viewport(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.viewport = viewport;
        self.zones = generate_snap_zones(viewport, &self.config.snap);
        self.check_viewport();

        if self.state != WindowState::Normal {
            return;
        }

        let from = self.rendered_origin(self.state);
        self.geometry = self.reconciled_geometry();
        let to = self.geometry.position.origin();
        if from != to {
            info!(from_x = from.x, from_y = from.y, to_x = to.x, to_y = to.y, "repositioning panel");
            self.animator.start(
                &mut self.scheduler,
                from,
                to,
                self.config.reposition_duration_ms,
                AnimationPurpose::Reposition,
            );
        } else {
            self.animator.cancel(&mut self.scheduler);
        }
    }

    /// Take a deferred viewport without reconciling; used before a
    /// transition that reconciles on its own
    fn adopt_pending_viewport(&mut self) {
        if let Some(viewport) = self.pending_viewport.take() {
            if viewport != self.viewport {
                self.viewport = viewport;
                self.zones = generate_snap_zones(viewport, &self.config.snap);
                self.check_viewport();
                if self.state == WindowState::Normal {
                    self.geometry = self.reconciled_geometry();
                }
            }
        }
    }

    /// Geometry fitted to the current viewport. A panel that no longer fits
    /// moves back to its snap zone, if any, before bounds are enforced.
    fn reconciled_geometry(&self) -> PanelGeometry {
        let mut geometry = self.geometry;
        geometry.size = fit_size(
            geometry.size,
            self.config.min_size,
            self.viewport,
            self.config.buffer,
        );
        let (viewport, buffer) = (self.viewport, self.config.buffer);
        if within_bounds(geometry.position.origin(), geometry.size, viewport, buffer) {
            return geometry;
        }
        if let Some(zone) = geometry
            .position
            .snap_zone
            .and_then(|anchor| zone_for(&self.zones, anchor))
        {
            geometry.position.set_origin(zone.snapped_origin(geometry.size));
        }
        let origin = enforce_bounds(geometry.position.origin(), geometry.size, viewport, buffer);
        geometry.position.set_origin(origin);
        geometry
    }

    fn check_viewport(&self) {
        if viewport_too_small(self.config.min_size, self.viewport, self.config.buffer) {
            let err = PanelError::ViewportTooSmall {
                viewport: self.viewport,
                minimum: self.config.min_size,
            };
            warn!(error = %err, "panel will overlap the viewport edges");
        }
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// A scheduled frame fired. Returns `true` when the rendered frame changed.
    pub fn on_frame(&mut self, token: FrameToken) -> bool {
        match self.animator.on_frame(token, &mut self.scheduler) {
            FrameOutcome::Stale => {
                trace!(token, "stale frame ignored");
                false
            }
            FrameOutcome::Running(_) => true,
            FrameOutcome::Finished(origin) => {
                debug!(x = origin.x, y = origin.y, "animation finished");
                true
            }
        }
    }

    /// Token of the frame the engine is waiting for
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.animator.pending_token()
    }

    /// The running animation
    pub fn animation(&self) -> Option<&PositionAnimation> {
        self.animator.animation()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    fn rendered_origin(&self, state: WindowState) -> Vec2 {
        self.animator.current().unwrap_or_else(|| match state {
            WindowState::Maximized => Vec2::ZERO,
            _ => self.geometry.position.origin(),
        })
    }

    // =========================================================================
    // Rendering queries
    // =========================================================================

    /// Rectangle the host should draw; `None` while closed
    pub fn frame(&self) -> Option<Rect> {
        match self.state {
            WindowState::Closed => None,
            WindowState::Minimized => {
                let size = self.config.minimized_size;
                let origin = enforce_bounds(
                    self.geometry.position.origin(),
                    size,
                    self.viewport,
                    self.config.buffer,
                );
                Some(Rect::from_pos_size(origin, size))
            }
            WindowState::Normal => Some(Rect::from_pos_size(
                self.rendered_origin(self.state),
                self.geometry.size,
            )),
            WindowState::Maximized => Some(Rect::from_pos_size(
                self.rendered_origin(self.state),
                self.viewport,
            )),
        }
    }

    /// Region below the header handed to the message content
    pub fn content_region(&self) -> Option<Rect> {
        if !matches!(self.state, WindowState::Normal | WindowState::Maximized) {
            return None;
        }
        let frame = self.frame()?;
        let header = self.config.header_height.min(frame.height);
        Some(Rect::new(
            frame.x,
            frame.y + header,
            frame.width,
            frame.height - header,
        ))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    pub fn position(&self) -> Position {
        self.geometry.position
    }

    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Viewport the engine currently enforces against
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn snap_zones(&self) -> &[SnapZone] {
        &self.zones
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.input.is_resizing()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Snapshot of what gets persisted
    pub fn preferences(&self) -> PersistedPreferences {
        PersistedPreferences {
            size: self.geometry.size,
            position: self.geometry.position.origin(),
            state: self.state,
        }
    }

    pub fn preference_store(&self) -> &PreferenceStore<S> {
        &self.prefs
    }

    fn persist(&self) {
        self.prefs.save(&self.preferences());
    }
}

fn sanitize_viewport(viewport: Size) -> Size {
    if viewport.is_positive() {
        viewport
    } else {
        warn!(
            width = viewport.width,
            height = viewport.height,
            "degenerate initial viewport, using 1x1"
        );
        Size::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap::SnapAnchor;
    use crate::transition::ManualScheduler;
    use spm_store::MemoryStore;
    use std::rc::Rc;

    type Engine = PanelEngine<Rc<MemoryStore>, ManualScheduler>;

    const KEY: &str = crate::config::DEFAULT_STORAGE_KEY;

    fn engine_with(store: Rc<MemoryStore>, viewport: Size) -> Engine {
        PanelEngine::new(PanelConfig::default(), viewport, store, ManualScheduler::new())
    }

    fn open_engine() -> (Engine, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        let mut engine = engine_with(store.clone(), Size::new(1920.0, 1080.0));
        assert!(engine.open());
        (engine, store)
    }

    fn run_frames(engine: &mut Engine) {
        for _ in 0..100 {
            let Some(token) = engine.pending_frame() else {
                return;
            };
            engine.scheduler_mut().advance(16.0);
            engine.scheduler_mut().fire(token);
            engine.on_frame(token);
        }
        panic!("animation never finished");
    }

    #[test]
    fn test_starts_closed_with_defaults() {
        let engine = engine_with(Rc::new(MemoryStore::new()), Size::new(1920.0, 1080.0));
        assert_eq!(engine.state(), WindowState::Closed);
        assert_eq!(engine.size(), Size::new(450.0, 600.0));
        assert_eq!(engine.position().origin(), Vec2::new(24.0, 24.0));
        assert_eq!(engine.frame(), None);
        assert_eq!(engine.content_region(), None);
        assert_eq!(engine.snap_zones().len(), 9);
    }

    #[test]
    fn test_restore_window_state_adopts_persisted_state() {
        let store = Rc::new(MemoryStore::with_entry(
            KEY,
            r#"{"size":{"width":500.0,"height":500.0},"position":{"x":5000.0,"y":40.0},"state":"normal"}"#,
        ));
        let config = PanelConfig {
            restore_window_state: true,
            ..Default::default()
        };
        let engine = PanelEngine::new(config, Size::new(1920.0, 1080.0), store, ManualScheduler::new());
        assert_eq!(engine.state(), WindowState::Normal);
        // Re-validated against the viewport
        assert_eq!(engine.position().origin(), Vec2::new(1410.0, 40.0));
    }

    #[test]
    fn test_undersized_stored_size_raised_to_minimum() {
        let store = Rc::new(MemoryStore::with_entry(
            KEY,
            r#"{"size":{"width":100.0,"height":900.0},"position":{"x":24.0,"y":24.0},"state":"closed"}"#,
        ));
        let engine = engine_with(store, Size::new(1920.0, 1080.0));
        assert_eq!(engine.size(), Size::new(300.0, 900.0));
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let config = PanelConfig {
            buffer: -5.0,
            ..Default::default()
        };
        let engine = PanelEngine::new(
            config,
            Size::new(1920.0, 1080.0),
            Rc::new(MemoryStore::new()),
            ManualScheduler::new(),
        );
        assert_eq!(engine.config, PanelConfig::default());
    }

    #[test]
    fn test_open_persists_and_renders() {
        let (engine, store) = open_engine();
        assert_eq!(engine.frame(), Some(Rect::new(24.0, 24.0, 450.0, 600.0)));
        assert_eq!(
            engine.content_region(),
            Some(Rect::new(24.0, 88.0, 450.0, 536.0))
        );
        let saved = store.get(KEY).unwrap().unwrap();
        assert!(saved.contains("\"state\":\"normal\""));
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut engine = engine_with(Rc::new(MemoryStore::new()), Size::new(1920.0, 1080.0));
        assert!(!engine.close());
        assert!(!engine.minimize());
        assert!(!engine.maximize());
        assert!(!engine.restore());
        assert_eq!(engine.state(), WindowState::Closed);

        assert!(engine.open());
        let before = *engine.geometry();
        assert!(!engine.open());
        assert!(!engine.restore());
        assert!(!engine.unmaximize());
        assert_eq!(*engine.geometry(), before);
    }

    #[test]
    fn test_toggles() {
        let (mut engine, _) = open_engine();
        assert!(engine.toggle_minimized());
        assert_eq!(engine.state(), WindowState::Minimized);
        assert!(engine.toggle_minimized());
        assert_eq!(engine.state(), WindowState::Normal);

        assert!(engine.toggle_maximized());
        assert_eq!(engine.state(), WindowState::Maximized);
        assert!(engine.toggle_maximized());
        assert_eq!(engine.state(), WindowState::Normal);

        assert!(engine.minimize());
        assert!(!engine.toggle_maximized());
    }

    #[test]
    fn test_minimized_rendering_ignores_size() {
        let (mut engine, _) = open_engine();
        engine.minimize();
        let frame = engine.frame().unwrap();
        assert_eq!((frame.width, frame.height), (300.0, 64.0));
        assert_eq!(engine.content_region(), None);
        assert_eq!(engine.size(), Size::new(450.0, 600.0));
    }

    #[test]
    fn test_maximize_animates_to_origin() {
        let (mut engine, _) = open_engine();
        engine.maximize();
        assert_eq!(engine.animation().unwrap().purpose, AnimationPurpose::Maximize);
        assert_eq!(engine.frame().unwrap().position(), Vec2::new(24.0, 24.0));

        run_frames(&mut engine);
        assert_eq!(engine.frame(), Some(Rect::new(0.0, 0.0, 1920.0, 1080.0)));

        assert!(engine.unmaximize());
        assert_eq!(engine.animation().unwrap().purpose, AnimationPurpose::Unmaximize);
        run_frames(&mut engine);
        assert_eq!(engine.frame(), Some(Rect::new(24.0, 24.0, 450.0, 600.0)));
    }

    #[test]
    fn test_maximize_clears_snap() {
        let (mut engine, _) = open_engine();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(760.0, 260.0);
        engine.pointer_up();
        assert!(engine.position().is_snapped);

        engine.maximize();
        assert!(!engine.position().is_snapped);
        assert_eq!(engine.position().snap_zone, None);
    }

    #[test]
    fn test_sessions_gated_by_state() {
        let (mut engine, _) = open_engine();
        engine.maximize();
        assert_eq!(engine.pointer_down(30.0, 30.0, "header"), InputResult::Unhandled);
        assert_eq!(engine.pointer_down(30.0, 30.0, "left"), InputResult::Unhandled);
        assert!(!engine.is_dragging() && !engine.is_resizing());
    }

    #[test]
    fn test_invalid_handle_is_ignored() {
        let (mut engine, _) = open_engine();
        assert_eq!(engine.pointer_down(30.0, 30.0, "se"), InputResult::Unhandled);
        assert!(!engine.is_resizing());
        assert_eq!(engine.pointer_move(500.0, 500.0), InputResult::Unhandled);
        assert_eq!(engine.size(), Size::new(450.0, 600.0));
    }

    #[test]
    fn test_concurrent_session_ignored() {
        let (mut engine, _) = open_engine();
        assert_eq!(engine.pointer_down(44.0, 44.0, "header"), InputResult::Handled);
        assert_eq!(engine.pointer_down(474.0, 624.0, "bottom-right"), InputResult::Unhandled);
        assert!(engine.is_dragging());
        engine.pointer_move(144.0, 44.0);
        assert_eq!(engine.position().origin(), Vec2::new(124.0, 24.0));
    }

    #[test]
    fn test_transition_terminates_session() {
        let (mut engine, _) = open_engine();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(144.0, 144.0);
        assert!(engine.minimize());
        assert!(!engine.is_dragging());
        assert_eq!(engine.position().origin(), Vec2::new(124.0, 124.0));
        assert_eq!(engine.pointer_move(400.0, 400.0), InputResult::Unhandled);
    }

    #[test]
    fn test_maximize_terminates_resize() {
        let (mut engine, _) = open_engine();
        engine.pointer_down(474.0, 624.0, "bottom-right");
        engine.pointer_move(574.0, 724.0);
        assert!(engine.is_resizing());

        assert!(engine.maximize());
        assert!(!engine.is_resizing());
        assert_eq!(engine.state(), WindowState::Maximized);
        assert_eq!(engine.size(), Size::new(550.0, 700.0));
        assert_eq!(engine.pointer_move(700.0, 800.0), InputResult::Unhandled);
        assert_eq!(engine.pointer_up(), InputResult::Unhandled);
    }

    #[test]
    fn test_close_terminates_resize() {
        let (mut engine, _) = open_engine();
        engine.pointer_down(474.0, 624.0, "bottom-right");
        engine.pointer_move(574.0, 724.0);

        assert!(engine.close());
        assert!(!engine.is_resizing());
        assert_eq!(engine.state(), WindowState::Closed);
        assert_eq!(engine.pointer_move(700.0, 800.0), InputResult::Unhandled);

        engine.open();
        assert_eq!(engine.size(), Size::new(550.0, 700.0));
        assert_eq!(engine.position().origin(), Vec2::new(24.0, 24.0));
    }

    #[test]
    fn test_escape_cancels_without_settle() {
        let (mut engine, _) = open_engine();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(760.0, 260.0);
        assert!(engine.position().is_snapped);
        assert_eq!(engine.key_down(Key::Escape), InputResult::Handled);
        assert!(!engine.is_dragging());
        assert!(!engine.is_animating());
        assert_eq!(engine.position().origin(), Vec2::new(735.0, 240.0));
    }

    #[test]
    fn test_enter_restores_minimized() {
        let (mut engine, _) = open_engine();
        assert_eq!(engine.key_down(Key::Enter), InputResult::Unhandled);
        engine.minimize();
        assert_eq!(engine.key_down(Key::Space), InputResult::Handled);
        assert_eq!(engine.state(), WindowState::Normal);
    }

    #[test]
    fn test_snap_settles_and_persists() {
        let (mut engine, store) = open_engine();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(760.0, 260.0);
        let writes = store.write_count();
        engine.pointer_up();

        assert_eq!(engine.position().snap_zone, Some(SnapAnchor::Center));
        assert_eq!(engine.animation().unwrap().purpose, AnimationPurpose::Settle);
        assert_eq!(store.write_count(), writes + 1);
        run_frames(&mut engine);
        assert_eq!(engine.frame().unwrap().position(), Vec2::new(735.0, 240.0));
    }

    #[test]
    fn test_drag_during_animation_starts_from_rendered_origin() {
        let store = Rc::new(MemoryStore::new());
        let mut engine = engine_with(store, Size::new(2400.0, 1080.0));
        engine.open();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(1720.0, 120.0);
        engine.pointer_up();
        assert_eq!(engine.position().origin(), Vec2::new(1700.0, 100.0));

        engine.resize_viewport(800.0, 600.0);
        let token = engine.pending_frame().unwrap();
        engine.scheduler_mut().advance(50.0);
        engine.scheduler_mut().fire(token);
        engine.on_frame(token);
        let rendered = engine.frame().unwrap().position();
        assert!(rendered.x > 340.0 && rendered.x < 1700.0);

        engine.pointer_down(rendered.x + 20.0, rendered.y + 20.0, "header");
        assert!(!engine.is_animating());
        assert!(engine.scheduler().pending().is_empty());
        engine.pointer_move(rendered.x + 20.0, rendered.y + 20.0);
        assert_eq!(engine.position().origin(), Vec2::new(340.0, 10.0));
    }

    #[test]
    fn test_viewport_change_deferred_during_session() {
        let (mut engine, _) = open_engine();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(1500.0, 44.0);
        engine.resize_viewport(800.0, 600.0);

        // Still enforcing against the old viewport
        assert_eq!(engine.viewport(), Size::new(1920.0, 1080.0));
        engine.pointer_move(1400.0, 44.0);
        assert_eq!(engine.position().origin(), Vec2::new(1380.0, 24.0));

        engine.pointer_up();
        assert_eq!(engine.viewport(), Size::new(800.0, 600.0));
        assert_eq!(engine.size(), Size::new(450.0, 580.0));
        assert_eq!(engine.position().origin(), Vec2::new(340.0, 10.0));
        assert_eq!(engine.animation().unwrap().purpose, AnimationPurpose::Reposition);
    }

    #[test]
    fn test_snapped_panel_follows_zone_on_resize() {
        let (mut engine, _) = open_engine();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(760.0, 260.0);
        engine.pointer_up();
        run_frames(&mut engine);

        engine.resize_viewport(1000.0, 900.0);
        assert_eq!(engine.position().snap_zone, Some(SnapAnchor::Center));
        assert_eq!(engine.position().origin(), Vec2::new(275.0, 150.0));
        assert_eq!(engine.animation().unwrap().purpose, AnimationPurpose::Reposition);
    }

    #[test]
    fn test_snapped_panel_in_bounds_keeps_origin_on_viewport_change() {
        let (mut engine, _) = open_engine();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(760.0, 260.0);
        engine.pointer_up();
        run_frames(&mut engine);
        assert_eq!(engine.position().origin(), Vec2::new(735.0, 240.0));

        engine.pointer_down(1185.0, 840.0, "bottom-right");
        engine.pointer_move(1385.0, 790.0);
        engine.pointer_up();
        assert_eq!(engine.size(), Size::new(650.0, 550.0));
        assert_eq!(engine.position().snap_zone, Some(SnapAnchor::Center));

        engine.resize_viewport(1900.0, 1080.0);
        assert_eq!(engine.position().origin(), Vec2::new(735.0, 240.0));
        assert_eq!(engine.position().snap_zone, Some(SnapAnchor::Center));
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_viewport_change_while_minimized_applies_on_restore() {
        let store = Rc::new(MemoryStore::new());
        let mut engine = engine_with(store, Size::new(2400.0, 1080.0));
        engine.open();
        engine.pointer_down(44.0, 44.0, "header");
        engine.pointer_move(1720.0, 44.0);
        engine.pointer_up();
        engine.minimize();

        engine.resize_viewport(800.0, 600.0);
        assert_eq!(engine.position().origin(), Vec2::new(1700.0, 24.0));
        assert!(!engine.is_animating());

        engine.restore();
        assert_eq!(engine.position().origin(), Vec2::new(340.0, 10.0));
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_stale_frame_ignored() {
        let (mut engine, _) = open_engine();
        engine.maximize();
        let first = engine.pending_frame().unwrap();
        engine.unmaximize();
        assert!(!engine.on_frame(first));
        assert_eq!(engine.animation().unwrap().purpose, AnimationPurpose::Unmaximize);
    }

    #[test]
    fn test_write_failures_do_not_disturb_geometry() {
        let (mut engine, store) = open_engine();
        store.set_fail_writes(true);
        engine.pointer_down(474.0, 624.0, "bottom-right");
        engine.pointer_move(574.0, 724.0);
        assert_eq!(engine.pointer_up(), InputResult::Handled);
        assert_eq!(engine.size(), Size::new(550.0, 700.0));
    }
}

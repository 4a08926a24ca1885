//! WASM bindings for the browser host
//!
//! The host owns the DOM. It forwards pointer, keyboard and resize events,
//! passes a callback for `requestAnimationFrame` that calls
//! [`WasmPanel::tick`], and positions the panel from [`WasmPanel::frame_json`].

use js_sys::Function;
use serde::Serialize;
use spm_store::LocalStorageStore;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::config::PanelConfig;
use crate::engine::PanelEngine;
use crate::input::{InputResult, Key};
use crate::math::{Rect, Size};
use crate::transition::FrameScheduler;
use crate::types::{FrameToken, Millis};
use crate::window::WindowState;

/// Frame scheduler backed by `requestAnimationFrame` and `performance.now()`
pub struct RafScheduler {
    callback: Function,
}

impl RafScheduler {
    /// `callback` is what the browser invokes for every requested frame
    pub fn new(callback: Function) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule_frame(&mut self) -> FrameToken {
        match web_sys::window().map(|w| w.request_animation_frame(&self.callback)) {
            Some(Ok(id)) => id as FrameToken,
            _ => {
                warn!("requestAnimationFrame unavailable");
                0
            }
        }
    }

    fn cancel(&mut self, token: FrameToken) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(token as i32) {
                warn!(token, error = ?e, "cancelAnimationFrame failed");
            }
        }
    }

    fn now_ms(&self) -> Millis {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}

/// Rendering snapshot handed to the host
#[derive(Serialize)]
struct FrameInfo {
    state: WindowState,
    frame: Option<Rect>,
    content: Option<Rect>,
    snapped: bool,
    animating: bool,
}

/// The support panel, exported to JavaScript
#[wasm_bindgen]
pub struct WasmPanel {
    engine: PanelEngine<LocalStorageStore, RafScheduler>,
}

#[wasm_bindgen]
impl WasmPanel {
    /// Create a panel for the current viewport.
    ///
    /// `config_json` may override any subset of [`PanelConfig`]; an invalid
    /// override is reported on the console and the defaults are used.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, on_frame: Function, config_json: Option<String>) -> WasmPanel {
        let config = match config_json.as_deref().map(PanelConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                web_sys::console::warn_1(&format!("[spm] {}", e).into());
                PanelConfig::default()
            }
            None => PanelConfig::default(),
        };
        WasmPanel {
            engine: PanelEngine::new(
                config,
                Size::new(width, height),
                LocalStorageStore::new(),
                RafScheduler::new(on_frame),
            ),
        }
    }

    pub fn open(&mut self) -> bool {
        self.engine.open()
    }

    pub fn minimize(&mut self) -> bool {
        self.engine.minimize()
    }

    pub fn restore(&mut self) -> bool {
        self.engine.restore()
    }

    pub fn maximize(&mut self) -> bool {
        self.engine.maximize()
    }

    pub fn unmaximize(&mut self) -> bool {
        self.engine.unmaximize()
    }

    pub fn close(&mut self) -> bool {
        self.engine.close()
    }

    #[wasm_bindgen(js_name = toggleMinimized)]
    pub fn toggle_minimized(&mut self) -> bool {
        self.engine.toggle_minimized()
    }

    #[wasm_bindgen(js_name = toggleMaximized)]
    pub fn toggle_maximized(&mut self) -> bool {
        self.engine.toggle_maximized()
    }

    /// Returns `true` when the panel consumed the event
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32, affordance: &str) -> bool {
        self.engine.pointer_down(x, y, affordance) == InputResult::Handled
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_move(x, y) == InputResult::Handled
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.pointer_up() == InputResult::Handled
    }

    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self) -> bool {
        self.engine.pointer_cancel() == InputResult::Handled
    }

    /// `key` is a `KeyboardEvent.key` value
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.engine.key_down(Key::from_name(key)) == InputResult::Handled
    }

    #[wasm_bindgen(js_name = resizeViewport)]
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.engine.resize_viewport(width, height);
    }

    /// Call from the animation frame callback. Returns `true` when the
    /// panel must be redrawn.
    pub fn tick(&mut self) -> bool {
        match self.engine.pending_frame() {
            Some(token) => self.engine.on_frame(token),
            None => false,
        }
    }

    pub fn state(&self) -> String {
        self.engine.state().as_str().to_string()
    }

    /// Current rendering snapshot as JSON
    #[wasm_bindgen(js_name = frameJson)]
    pub fn frame_json(&self) -> String {
        let info = FrameInfo {
            state: self.engine.state(),
            frame: self.engine.frame(),
            content: self.engine.content_region(),
            snapped: self.engine.position().is_snapped,
            animating: self.engine.is_animating(),
        };
        serde_json::to_string(&info).unwrap_or_else(|_| "null".to_string())
    }
}

//! Pointer and keyboard input
//!
//! Platform-neutral pointer sessions. The host reports which affordance a
//! pointer-down landed on (`"header"` or a resize handle id); the
//! [`InputRouter`] owns the single live session.

mod drag;
mod resize;

pub use drag::{drag_step, DragSession};
pub use resize::{calculate_resize, ResizeSession};

use crate::error::{PanelError, PanelResult};

/// Affordance id of the drag handle
pub const HEADER_AFFORDANCE: &str = "header";

/// Resize handle on an edge or corner of the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// All handles
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::Top,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
        ResizeHandle::Right,
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
    ];

    /// Parse a handle id such as `"bottom-right"`
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|h| h.id() == id)
    }

    /// Handle id as reported by the host
    pub fn id(self) -> &'static str {
        match self {
            ResizeHandle::Top => "top",
            ResizeHandle::Bottom => "bottom",
            ResizeHandle::Left => "left",
            ResizeHandle::Right => "right",
            ResizeHandle::TopLeft => "top-left",
            ResizeHandle::TopRight => "top-right",
            ResizeHandle::BottomLeft => "bottom-left",
            ResizeHandle::BottomRight => "bottom-right",
        }
    }

    pub fn has_left(self) -> bool {
        matches!(
            self,
            ResizeHandle::Left | ResizeHandle::TopLeft | ResizeHandle::BottomLeft
        )
    }

    pub fn has_right(self) -> bool {
        matches!(
            self,
            ResizeHandle::Right | ResizeHandle::TopRight | ResizeHandle::BottomRight
        )
    }

    pub fn has_top(self) -> bool {
        matches!(
            self,
            ResizeHandle::Top | ResizeHandle::TopLeft | ResizeHandle::TopRight
        )
    }

    pub fn has_bottom(self) -> bool {
        matches!(
            self,
            ResizeHandle::Bottom | ResizeHandle::BottomLeft | ResizeHandle::BottomRight
        )
    }
}

/// What a pointer-down landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    /// The header strip, starts a drag
    Header,
    /// A resize handle, starts a resize
    Resize(ResizeHandle),
}

impl Affordance {
    /// Parse a host affordance id
    pub fn parse(id: &str) -> PanelResult<Self> {
        if id == HEADER_AFFORDANCE {
            return Ok(Affordance::Header);
        }
        ResizeHandle::from_id(id)
            .map(Affordance::Resize)
            .ok_or_else(|| PanelError::InvalidHandle(id.to_string()))
    }

    /// Kind of session this affordance starts
    pub fn session_name(self) -> &'static str {
        match self {
            Affordance::Header => "drag",
            Affordance::Resize(_) => "resize",
        }
    }
}

/// Keyboard keys the panel reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Input was consumed by the panel
    Handled,
    /// Input was ignored; the host may route it elsewhere
    Unhandled,
}

/// A live pointer session
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Session {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl Session {
    pub fn name(&self) -> &'static str {
        match self {
            Session::Drag(_) => "drag",
            Session::Resize(_) => "resize",
        }
    }
}

/// Owns the at-most-one live pointer session
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    session: Option<Session>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session; refused while another one is live
    pub fn begin(&mut self, session: Session) -> PanelResult<()> {
        if let Some(active) = &self.session {
            return Err(PanelError::ConcurrentSessionConflict {
                requested: session.name(),
                active: active.name(),
            });
        }
        self.session = Some(session);
        Ok(())
    }

    /// End the live session, returning it
    pub fn end(&mut self) -> Option<Session> {
        self.session.take()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Some(Session::Drag(_)))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.session, Some(Session::Resize(_)))
    }
}

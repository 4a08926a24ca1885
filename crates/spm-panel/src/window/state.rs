//! Window lifecycle state machine

use serde::{Deserialize, Serialize};

/// Lifecycle state of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    /// Only the launcher is visible
    #[default]
    Closed,
    /// Collapsed to its header strip
    Minimized,
    /// Floating, draggable and resizable
    Normal,
    /// Filling the whole viewport
    Maximized,
}

/// Lifecycle operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Open,
    Minimize,
    Restore,
    Maximize,
    Unmaximize,
    Close,
}

impl Transition {
    /// Name used in log lines
    pub fn name(self) -> &'static str {
        match self {
            Transition::Open => "open",
            Transition::Minimize => "minimize",
            Transition::Restore => "restore",
            Transition::Maximize => "maximize",
            Transition::Unmaximize => "unmaximize",
            Transition::Close => "close",
        }
    }
}

impl WindowState {
    /// Target state of `transition`, or `None` when it is not legal here
    pub fn apply(self, transition: Transition) -> Option<WindowState> {
        use Transition::*;
        use WindowState::*;
        match (self, transition) {
            (Closed, Open) => Some(Normal),
            (Normal | Maximized, Minimize) => Some(Minimized),
            (Minimized, Restore) => Some(Normal),
            (Normal, Maximize) => Some(Maximized),
            (Maximized, Unmaximize) => Some(Normal),
            (Minimized | Normal | Maximized, Close) => Some(Closed),
            _ => None,
        }
    }

    /// Drag and resize sessions may start only in this state
    pub fn allows_sessions(self) -> bool {
        self == WindowState::Normal
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WindowState::Closed => "closed",
            WindowState::Minimized => "minimized",
            WindowState::Normal => "normal",
            WindowState::Maximized => "maximized",
        }
    }
}

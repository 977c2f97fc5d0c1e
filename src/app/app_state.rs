//! Centralized application state for the debugger front-end.
//!
//! Application state is composed of focused state components that each
//! manage one aspect of the UI:
//! - Invariants stay local to each component
//! - Different aspects can be borrowed independently
//! - Mutations go through intent-revealing methods

use crate::state::{LayoutState, SelectionState, SessionState, VariablesView};
use std::path::PathBuf;

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Debugger models of the loaded session
    pub session: SessionState,

    /// Selected variable and details view
    pub selection: SelectionState,

    /// Sidebar split, carets and table columns
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Directory the open dialog starts in
    pub last_session_dir: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            selection: SelectionState::new(),
            layout: LayoutState::new(),
            error_message: None,
            last_session_dir: None,
        }
    }

    /// Creates a new AppState with settings loaded from storage.
    pub fn with_settings(variables_view: VariablesView, last_session_dir: Option<PathBuf>) -> Self {
        Self {
            session: SessionState::new(),
            selection: SelectionState::new(),
            layout: LayoutState::with_variables_view(variables_view),
            error_message: None,
            last_session_dir,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets the session-related state before loading a new session.
    ///
    /// Layout is kept: collapsed panels and column widths survive a reload.
    pub fn reset_session_state(&mut self) {
        self.session.clear();
        self.selection.clear();
        self.error_message = None;
    }
}

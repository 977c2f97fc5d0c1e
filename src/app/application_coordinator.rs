//! Application-level coordination and workflow management.
//!
//! Handles high-level operations like session loading, error handling and
//! routing panel interactions into state changes.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::SidebarPanel;
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing session loading workflows
/// - Applying loaded sessions and load errors
/// - Turning panel interactions into model and layout updates
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous session loading.
    ///
    /// Immediately clears the previous session so the panels show the empty state.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_session_state();
        state.last_session_dir = path.parent().map(PathBuf::from);
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { session, path } => {
                state.session.load_session(session, path);
                state.selection.clear();
                state.error_message = None;
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading session: {}", error_msg));
                state.session.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and loads the demo session.
    pub fn open_demo_session(state: &mut AppState, loader: &mut AsyncLoader) {
        match loader.load_demo_session() {
            Ok(session) => {
                state.reset_session_state();
                state.session.load_session(session, None);
            }
            Err(e) => {
                state.error_message = Some(format!("Error generating demo session: {}", e));
            }
        }
    }

    /// Collapses or expands a sidebar panel.
    pub fn handle_panel_toggle(state: &mut AppState, panel: SidebarPanel) {
        if !state.layout.toggle_panel(panel) {
            log::debug!("{} is the last visible panel, keeping it open", panel.title());
        }
    }

    /// Removes every breakpoint of the session.
    pub fn remove_all_breakpoints(state: &mut AppState) {
        let count = state.session.breakpoints().total_count();
        state.session.breakpoints_mut().clear();
        log::info!("removed {} breakpoints", count);
    }

    /// Shows the source of a clicked breakpoint at its line.
    pub fn handle_breakpoint_click(state: &mut AppState, source: &str, line: u32) {
        if !state.session.sources_mut().open(source, Some(line)) {
            state.error_message = Some(format!("Source not available: {}", source));
        }
    }

    /// Selects a call stack frame and shows its source.
    pub fn handle_frame_selection(state: &mut AppState, frame_id: u64) {
        state.session.select_frame(frame_id);
    }

    /// Selects a variable in the variables panel.
    pub fn handle_variable_selection(state: &mut AppState, scope: usize, name: &str) {
        state.selection.select_variable(scope, name);
    }

    /// Opens a variable in the details view.
    pub fn handle_variable_details(state: &mut AppState, scope: usize, name: &str) {
        if state.session.variables().find(scope, name).is_some() {
            state.selection.open_details(scope, name);
        }
    }

    /// Switches the variables panel between tree and table view.
    pub fn toggle_variables_view(state: &mut AppState) {
        let view = state.layout.toggle_variables_view();
        log::debug!("variables view switched to {:?}", view);
    }
}

//! State management modules for the debugger front-end.
//!
//! This module contains state-only logic (no UI concerns):
//! - Session state (debugger models, session name and file path)
//! - Selection state (selected variable, details view)
//! - Layout state (sidebar split, carets, variables table columns)

mod session_state;
mod selection;
mod layout_state;

pub use session_state::SessionState;
pub use selection::SelectionState;
pub use layout_state::{LayoutState, SidebarPanel, VariablesView, VARIABLE_COLUMNS};

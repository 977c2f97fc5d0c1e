//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the debugger front-end:
//! - Header panel (session controls, error display)
//! - Sidebar (collapsible split of the debugger panels)
//! - Breakpoints, call stack, source and variables panels
//! - Table header component (resizable column headers)
//! - Details panel (opened variable)
//! - Status bar (session counts, memory)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod sidebar;
pub mod breakpoints_panel;
pub mod callstack_panel;
pub mod sources_panel;
pub mod variables_panel;
pub mod table_header;
pub mod details_panel;
pub mod status_bar;
pub mod panel_manager;

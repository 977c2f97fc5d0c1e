//! UI layout state management.
//!
//! This module encapsulates all state related to UI layout:
//! the collapsible sidebar split, its caret controllers, and the column
//! geometry of the variables table together with its resize controller.

use rdbgview::{
    CellBox, CellStyle, ColumnResizeController, PanelCollapseController, SplitContainer,
    TableLayout,
};
use serde::{Deserialize, Serialize};

/// Panels stacked in the debugger sidebar, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarPanel {
    Variables,
    Callstack,
    Breakpoints,
    Sources,
}

impl SidebarPanel {
    pub const ALL: [SidebarPanel; 4] = [
        SidebarPanel::Variables,
        SidebarPanel::Callstack,
        SidebarPanel::Breakpoints,
        SidebarPanel::Sources,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SidebarPanel::Variables => "Variables",
            SidebarPanel::Callstack => "Callstack",
            SidebarPanel::Breakpoints => "Breakpoints",
            SidebarPanel::Sources => "Source",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// How the variables panel presents its scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariablesView {
    #[default]
    Tree,
    Table,
}

/// Column titles of the variables table.
pub const VARIABLE_COLUMNS: [&str; 3] = ["Name", "Type", "Value"];

// Default content widths ordered as [Name, Type, Value]
const DEFAULT_COLUMN_WIDTHS: [f32; 3] = [120.0, 80.0, 220.0];
const CELL_PADDING: f32 = 4.0;
const MIN_COLUMN_WIDTH: f32 = 30.0;

/// State related to UI layout and sizing.
///
/// Responsibilities:
/// - Owning the sidebar split container and one caret controller per panel
/// - Owning the variables table geometry and its column resize controller
/// - Tracking the variables view mode and the sidebar width
///
/// Controllers are created once here and live as long as the layout, so a
/// gesture never gets more than one owner.
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Sidebar panels, in `SidebarPanel::ALL` order
    sidebar: SplitContainer,
    /// Caret controllers, indexed like `SidebarPanel::ALL`
    carets: Vec<PanelCollapseController>,
    /// Header and row cells of the variables table
    variables_table: TableLayout,
    /// Drag state for the variables table columns
    column_resize: ColumnResizeController,
    variables_view: VariablesView,
    /// Share of the window width given to the sidebar (0.0 to 1.0)
    sidebar_width_ratio: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with every panel expanded.
    pub fn new() -> Self {
        let mut sidebar = SplitContainer::new();
        let carets = SidebarPanel::ALL
            .iter()
            .map(|panel| PanelCollapseController::new(sidebar.add_panel(panel.title())))
            .collect();

        let style = CellStyle::content_box(CELL_PADDING, CELL_PADDING);
        let variables_table = TableLayout::new(
            DEFAULT_COLUMN_WIDTHS
                .iter()
                .map(|w| CellBox::with_style(*w, style))
                .collect(),
        );

        Self {
            sidebar,
            carets,
            variables_table,
            column_resize: ColumnResizeController::with_min_width(MIN_COLUMN_WIDTH),
            variables_view: VariablesView::default(),
            sidebar_width_ratio: 0.35,
        }
    }

    /// Creates a new layout state with the given variables view.
    pub fn with_variables_view(view: VariablesView) -> Self {
        let mut layout = Self::new();
        layout.variables_view = view;
        layout
    }

    // ===== Sidebar =====

    pub fn sidebar(&self) -> &SplitContainer {
        &self.sidebar
    }

    /// Returns the caret controller of a sidebar panel.
    pub fn caret(&self, panel: SidebarPanel) -> &PanelCollapseController {
        &self.carets[panel.index()]
    }

    /// Collapses or expands a sidebar panel.
    ///
    /// Returns `false` when the toggle was refused (last visible panel).
    pub fn toggle_panel(&mut self, panel: SidebarPanel) -> bool {
        self.carets[panel.index()].toggle(&mut self.sidebar)
    }

    /// Moves the splitter handle below `index` by a fraction of the sidebar height.
    pub fn drag_sidebar_handle(&mut self, index: usize, delta_fraction: f32) -> bool {
        self.sidebar.drag_handle(index, delta_fraction)
    }

    pub fn sidebar_width_ratio(&self) -> f32 {
        self.sidebar_width_ratio
    }

    // ===== Variables Table =====

    pub fn variables_table(&self) -> &TableLayout {
        &self.variables_table
    }

    pub fn column_resize(&self) -> &ColumnResizeController {
        &self.column_resize
    }

    /// Matches the table body to the number of displayed variables.
    pub fn sync_variable_rows(&mut self, count: usize) {
        self.variables_table.sync_rows(count);
    }

    /// Returns the table and its resize controller together (splits borrows).
    pub(crate) fn table_and_resizer_mut(&mut self) -> (&mut TableLayout, &mut ColumnResizeController) {
        (&mut self.variables_table, &mut self.column_resize)
    }

    // ===== Variables View =====

    pub fn variables_view(&self) -> VariablesView {
        self.variables_view
    }

    /// Switches between tree and table view, returning the new view.
    pub fn toggle_variables_view(&mut self) -> VariablesView {
        self.variables_view = match self.variables_view {
            VariablesView::Tree => VariablesView::Table,
            VariablesView::Table => VariablesView::Tree,
        };
        // A drag in the table that is being hidden can no longer be released on it.
        self.column_resize.on_drag_end();
        self.variables_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_has_a_caret() {
        let layout = LayoutState::new();
        assert_eq!(layout.sidebar().len(), SidebarPanel::ALL.len());
        for panel in SidebarPanel::ALL {
            let id = layout.caret(panel).panel();
            assert_eq!(layout.sidebar().index_of(id), Some(panel.index()));
            assert_eq!(layout.sidebar().panels()[panel.index()].title(), panel.title());
        }
    }

    #[test]
    fn test_last_sidebar_panel_cannot_collapse() {
        let mut layout = LayoutState::new();
        assert!(layout.toggle_panel(SidebarPanel::Variables));
        assert!(layout.toggle_panel(SidebarPanel::Callstack));
        assert!(layout.toggle_panel(SidebarPanel::Breakpoints));
        assert!(!layout.toggle_panel(SidebarPanel::Sources));
        assert_eq!(layout.sidebar().visible_count(), 1);
        assert!(!layout.caret(SidebarPanel::Sources).is_collapsed());
    }

    #[test]
    fn test_toggle_variables_view_ends_drag() {
        let mut layout = LayoutState::with_variables_view(VariablesView::Table);
        {
            let (table, resizer) = layout.table_and_resizer_mut();
            resizer.on_drag_start(0.0, 0, table);
        }
        assert!(layout.column_resize().is_dragging());
        assert_eq!(layout.toggle_variables_view(), VariablesView::Tree);
        assert!(!layout.column_resize().is_dragging());
    }

    #[test]
    fn test_variable_rows_follow_header_widths() {
        let mut layout = LayoutState::new();
        layout.sync_variable_rows(5);
        assert_eq!(layout.variables_table().row_count(), 5);
        assert!(layout.variables_table().is_aligned());
        assert_eq!(layout.variables_table().column_width(2), Some(220.0));
    }
}

//! Drag-to-resize for table columns.
//!
//! A [`ColumnResizeController`] lives as long as the table it serves. A drag
//! gesture arms it with a [`ColumnState`] on pointer-down, every pointer move
//! rewrites the dragged column and its right neighbour in the header and in
//! all body rows, and pointer-up disarms it again.

use crate::layout::table_layout::{padding_diff, TableLayout};

/// Transient state of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnState {
    /// Column being dragged
    pub column_index: usize,
    /// Width of the dragged column when the drag started
    pub cur_col_width: f32,
    /// Width of the column to its right when the drag started, if any
    pub nxt_col_width: Option<f32>,
    /// Horizontal pointer position at drag start
    pub start_x: f32,
}

/// Resizes table columns from pointer drag gestures.
#[derive(Debug, Clone, Default)]
pub struct ColumnResizeController {
    active: Option<ColumnState>,
    /// Lower bound for either of the two affected columns
    min_width: Option<f32>,
}

impl ColumnResizeController {
    /// Creates a controller without a minimum column width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller that keeps both affected columns at least
    /// `min_width` wide.
    pub fn with_min_width(min_width: f32) -> Self {
        Self {
            active: None,
            min_width: Some(min_width.max(0.0)),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// State of the gesture in progress, if any.
    pub fn active(&self) -> Option<&ColumnState> {
        self.active.as_ref()
    }

    /// Arms the controller for a drag of `column_index` starting at
    /// `pointer_x`.
    ///
    /// Widths are measured from the cells' on-screen size with the padding
    /// correction applied. An unknown column leaves the controller idle.
    pub fn on_drag_start(&mut self, pointer_x: f32, column_index: usize, table: &TableLayout) -> bool {
        let Some(cur) = table.header_cell(column_index) else {
            log::debug!("no header cell at column {}", column_index);
            return false;
        };

        let cur_col_width = cur.offset_width() - padding_diff(cur);
        let nxt_col_width = table
            .header_cell(column_index + 1)
            .map(|nxt| nxt.offset_width() - padding_diff(nxt));

        self.active = Some(ColumnState {
            column_index,
            cur_col_width,
            nxt_col_width,
            start_x: pointer_x,
        });
        true
    }

    /// Applies the pointer position to the armed gesture.
    ///
    /// The dragged column grows by the horizontal delta and its right
    /// neighbour, when there is one, shrinks by the same amount. Both widths
    /// are written to the header and to every body row. Returns `false` when
    /// no gesture is armed.
    pub fn on_drag_move(&mut self, pointer_x: f32, table: &mut TableLayout) -> bool {
        let Some(state) = self.active else {
            return false;
        };

        let delta = self.clamp_delta(&state, pointer_x - state.start_x);
        table.set_column_width(state.column_index, state.cur_col_width + delta);
        if let Some(nxt) = state.nxt_col_width {
            table.set_column_width(state.column_index + 1, nxt - delta);
        }
        true
    }

    /// Disarms the controller. Later moves are ignored until the next start.
    pub fn on_drag_end(&mut self) {
        self.active = None;
    }

    /// Ends a gesture whose pointer-up was never delivered.
    ///
    /// Returns `true` if a gesture was ended.
    pub fn release_if_idle(&mut self, pointer_down: bool) -> bool {
        if self.active.is_some() && !pointer_down {
            log::debug!("pointer released outside the drag handle, ending column drag");
            self.on_drag_end();
            return true;
        }
        false
    }

    fn clamp_delta(&self, state: &ColumnState, delta: f32) -> f32 {
        let Some(min) = self.min_width else {
            return delta;
        };
        let lower = min - state.cur_col_width;
        let clamped = delta.max(lower);
        match state.nxt_col_width {
            // Never go below `lower`, even if the neighbour is already too narrow.
            Some(nxt) => clamped.min((nxt - min).max(lower)),
            None => clamped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::table_layout::{CellBox, CellStyle};

    fn table(rows: usize) -> TableLayout {
        let mut t = TableLayout::new(vec![
            CellBox::new(100.0),
            CellBox::new(80.0),
            CellBox::new(120.0),
        ]);
        t.sync_rows(rows);
        t
    }

    #[test]
    fn test_drag_first_column_borrows_from_neighbour() {
        let mut t = table(4);
        let mut c = ColumnResizeController::new();
        assert!(c.on_drag_start(200.0, 0, &t));
        assert!(c.on_drag_move(215.0, &mut t));

        assert_eq!(t.column_width(0), Some(115.0));
        assert_eq!(t.column_width(1), Some(65.0));
        assert_eq!(t.column_width(2), Some(120.0));
        assert!(t.is_aligned());
    }

    #[test]
    fn test_drag_last_column_has_no_compensation() {
        let mut t = table(2);
        let mut c = ColumnResizeController::new();
        c.on_drag_start(10.0, 2, &t);
        assert_eq!(c.active().and_then(|s| s.nxt_col_width), None);
        c.on_drag_move(30.0, &mut t);

        assert_eq!(t.column_width(0), Some(100.0));
        assert_eq!(t.column_width(1), Some(80.0));
        assert_eq!(t.column_width(2), Some(140.0));
    }

    #[test]
    fn test_moves_are_relative_to_drag_start() {
        let mut t = table(1);
        let mut c = ColumnResizeController::new();
        c.on_drag_start(0.0, 1, &t);
        c.on_drag_move(10.0, &mut t);
        c.on_drag_move(25.0, &mut t);
        c.on_drag_move(-5.0, &mut t);

        assert_eq!(t.column_width(1), Some(75.0));
        assert_eq!(t.column_width(2), Some(125.0));
    }

    #[test]
    fn test_move_after_end_is_noop() {
        let mut t = table(1);
        let mut c = ColumnResizeController::new();
        c.on_drag_start(0.0, 0, &t);
        c.on_drag_end();
        assert!(!c.on_drag_move(50.0, &mut t));
        assert_eq!(t.column_width(0), Some(100.0));
    }

    #[test]
    fn test_unknown_column_is_ignored() {
        let t = table(1);
        let mut c = ColumnResizeController::new();
        assert!(!c.on_drag_start(0.0, 7, &t));
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_header_only_without_rows() {
        let mut t = table(0);
        let mut c = ColumnResizeController::new();
        c.on_drag_start(0.0, 0, &t);
        c.on_drag_move(12.0, &mut t);
        assert_eq!(t.column_width(0), Some(112.0));
        assert_eq!(t.row_count(), 0);
    }

    #[test]
    fn test_padding_correction_prevents_drift() {
        let style = CellStyle::content_box(4.0, 4.0);
        let mut t = TableLayout::new(vec![
            CellBox::with_style(100.0, style),
            CellBox::with_style(100.0, style),
        ]);
        t.sync_rows(2);
        let mut c = ColumnResizeController::new();

        // Zero-distance drags must not change anything, however many there are.
        for _ in 0..5 {
            c.on_drag_start(50.0, 0, &t);
            c.on_drag_move(50.0, &mut t);
            c.on_drag_end();
        }
        assert_eq!(t.column_width(0), Some(100.0));
        assert_eq!(t.column_width(1), Some(100.0));
    }

    #[test]
    fn test_min_width_clamp_preserves_pair_total() {
        let mut t = table(1);
        let mut c = ColumnResizeController::with_min_width(30.0);
        c.on_drag_start(0.0, 0, &t);
        c.on_drag_move(500.0, &mut t);
        assert_eq!(t.column_width(1), Some(30.0));
        assert_eq!(t.column_width(0), Some(150.0));

        c.on_drag_move(-500.0, &mut t);
        assert_eq!(t.column_width(0), Some(30.0));
        assert_eq!(t.column_width(1), Some(150.0));
    }

    #[test]
    fn test_release_if_idle_ends_gesture() {
        let t = table(0);
        let mut c = ColumnResizeController::new();
        c.on_drag_start(0.0, 0, &t);
        assert!(!c.release_if_idle(true));
        assert!(c.is_dragging());
        assert!(c.release_if_idle(false));
        assert!(!c.is_dragging());
    }
}

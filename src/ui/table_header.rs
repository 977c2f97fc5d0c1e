//! Table header component rendering
//!
//! Draws the variables table header with a drag handle on the right edge of
//! every column but the last. Handles feed pointer positions into the
//! layout's `ColumnResizeController`, which rewrites header and body widths.

use crate::rendering::text_utils::paint_cell_text;
use crate::state::{LayoutState, VARIABLE_COLUMNS};
use eframe::egui;
use egui::Color32;

const HEADER_HEIGHT: f32 = 22.0;
const HANDLE_WIDTH: f32 = 6.0;

/// Renders the resizable column headers of the variables table.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `layout` - Layout state owning the table geometry and its resize controller
pub fn render_table_header(ui: &mut egui::Ui, layout: &mut LayoutState) {
    let start_pos = ui.cursor().min;
    let (table, resizer) = layout.table_and_resizer_mut();

    // Reserve space for the entire header row
    let (header_rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width().max(table.total_offset_width()), HEADER_HEIGHT),
        egui::Sense::hover(),
    );

    // A release outside every handle never reaches `drag_stopped`.
    let pointer_down = ui.input(|i| i.pointer.any_down());
    resizer.release_if_idle(pointer_down);

    // ===== Resize handles =====
    let mut x = start_pos.x;
    let mut handle_rects = Vec::with_capacity(table.column_count());
    for column in 0..table.column_count() {
        let Some(width) = table.header_cell(column).map(|c| c.offset_width()) else {
            break;
        };
        x += width;

        // The last column has no neighbour to borrow from.
        if column + 1 == table.column_count() {
            break;
        }

        let handle_rect = egui::Rect::from_center_size(
            egui::pos2(x, start_pos.y + HEADER_HEIGHT / 2.0),
            egui::vec2(HANDLE_WIDTH, HEADER_HEIGHT),
        );
        let handle_id = ui.id().with(("column_resize", column));
        let response = ui.interact(handle_rect, handle_id, egui::Sense::drag());

        if response.drag_started() {
            let origin = ui.input(|i| i.pointer.press_origin());
            if let Some(pos) = origin {
                resizer.on_drag_start(pos.x, column, table);
            }
        }

        let owns_gesture = resizer.active().map(|s| s.column_index) == Some(column);
        if response.dragged() && owns_gesture {
            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                resizer.on_drag_move(pos.x, table);
            }
        }

        if response.drag_stopped() {
            resizer.on_drag_end();
        }

        let active = response.hovered() || response.dragged();
        if active {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
        }
        handle_rects.push((handle_rect, active));
    }

    // ===== Paint with the widths after this frame's moves =====
    let painter = ui.painter_at(header_rect);
    let font_id = egui::FontId::proportional(13.0);
    let text_color = ui.visuals().strong_text_color();

    painter.rect_filled(header_rect, 0.0, ui.visuals().faint_bg_color);

    let mut x = start_pos.x;
    for (column, cell) in table.header().iter().enumerate() {
        let cell_rect = egui::Rect::from_min_size(
            egui::pos2(x, start_pos.y),
            egui::vec2(cell.offset_width(), HEADER_HEIGHT),
        );
        let title = VARIABLE_COLUMNS.get(column).copied().unwrap_or("");
        paint_cell_text(
            &painter,
            cell_rect,
            (cell.padding_left(), cell.padding_right()),
            title,
            &font_id,
            text_color,
        );
        x += cell.offset_width();
    }

    for (handle_rect, active) in handle_rects {
        let color = if active {
            Color32::from_rgb(100, 150, 255)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color.gamma_multiply(0.5)
        };
        painter.rect_filled(handle_rect.shrink2(egui::vec2(2.0, 3.0)), 0.0, color);
    }
}

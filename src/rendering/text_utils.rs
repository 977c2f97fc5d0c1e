//! Text measurement helpers for table cells.

use eframe::egui;

const ELLIPSIS: &str = "…";

fn text_width(painter: &egui::Painter, text: String, font_id: &egui::FontId) -> f32 {
    painter
        .layout_no_wrap(text, font_id.clone(), egui::Color32::WHITE)
        .size()
        .x
}

/// Shortens `text` so it fits into `max_width`, ending it with an ellipsis
/// when something had to be cut.
///
/// Returns an empty string when not even the ellipsis fits.
pub fn fit_text(text: &str, max_width: f32, font_id: &egui::FontId, painter: &egui::Painter) -> String {
    if max_width <= 0.0 {
        return String::new();
    }
    if text_width(painter, text.to_string(), font_id) <= max_width {
        return text.to_string();
    }

    let budget = max_width - text_width(painter, ELLIPSIS.to_string(), font_id);
    if budget <= 0.0 {
        return String::new();
    }

    // Longest prefix (in chars) that still fits the budget.
    let chars: Vec<char> = text.chars().collect();
    let (mut lo, mut hi) = (0usize, chars.len());
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        let prefix: String = chars[..mid].iter().collect();
        if text_width(painter, prefix, font_id) <= budget {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    let mut fitted: String = chars[..lo].iter().collect();
    fitted.push_str(ELLIPSIS);
    fitted
}

/// Paints `text` left-aligned inside a cell, respecting its horizontal padding.
pub fn paint_cell_text(
    painter: &egui::Painter,
    cell_rect: egui::Rect,
    padding: (f32, f32),
    text: &str,
    font_id: &egui::FontId,
    color: egui::Color32,
) {
    let (padding_left, padding_right) = padding;
    let fitted = fit_text(text, cell_rect.width() - padding_left - padding_right, font_id, painter);
    if fitted.is_empty() {
        return;
    }
    painter.text(
        cell_rect.left_center() + egui::vec2(padding_left, 0.0),
        egui::Align2::LEFT_CENTER,
        fitted,
        font_id.clone(),
        color,
    );
}

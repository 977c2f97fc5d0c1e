//! Source panel UI rendering
//!
//! Shows the current source file with line numbers and highlights the line
//! the debugger points at.

use eframe::egui;
use egui::{RichText, ScrollArea};
use rdbgview::SourcesModel;

/// Renders the current source path in the panel header.
pub fn render_toolbar(ui: &mut egui::Ui, sources: &SourcesModel) {
    if let Some(source) = sources.current_source() {
        ui.label(RichText::new(&source.path).weak().monospace());
    }
}

/// Renders the lines of the current source.
pub fn render_sources_panel(ui: &mut egui::Ui, sources: &SourcesModel) {
    let Some(source) = sources.current_source() else {
        ui.label(RichText::new("No source selected").weak());
        return;
    };

    let current_line = sources.current_line();
    let highlight = ui.visuals().selection.bg_fill;
    let gutter_width = source.lines().count().max(1).to_string().len();

    ScrollArea::both()
        .id_salt("sources_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            for (index, text) in source.lines().enumerate() {
                let number = index as u32 + 1;
                let line = format!("{:>width$}  {}", number, text, width = gutter_width);
                if current_line == Some(number) {
                    egui::Frame::NONE.fill(highlight).show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(RichText::new(line).monospace());
                    });
                } else {
                    ui.label(RichText::new(line).monospace());
                }
            }
        });
}

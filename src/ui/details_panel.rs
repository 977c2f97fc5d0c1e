//! Details panel UI rendering
//!
//! Shows the variable opened from the variables panel: its JSON form, the
//! primitive it converts to, and its children.

use crate::app::AppState;
use eframe::egui;
use egui::{Color32, RichText, ScrollArea};
use rdbgview::{convert_type, ConvertedValue, Variable};

/// Renders the details of the variable opened with a double-click.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_details_panel(ui: &mut egui::Ui, state: &AppState) {
    let variable = state
        .selection
        .details_variable()
        .and_then(|(scope, name)| state.session.variables().find(*scope, name));

    let Some(variable) = variable else {
        ui.label("Variable details (double-click a variable to view)");
        return;
    };

    ui.label(RichText::new(format!("Details for variable: {}", variable.name)).strong());
    ui.separator();

    let available_height = ui.available_height();
    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .max_height(available_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let summary = serde_json::json!({
                "name": variable.name,
                "type": variable.type_name,
                "value": variable.value,
                "evaluate_name": variable.evaluate_name,
                "variables_reference": variable.variables_reference,
            });
            let text = serde_json::to_string_pretty(&summary).unwrap_or_else(|e| e.to_string());
            ui.label(RichText::new(text).monospace().color(Color32::from_rgb(90, 150, 230)));

            ui.add_space(10.0);

            ui.label(RichText::new("Converted:").strong());
            ui.label(RichText::new(describe_converted(&convert_type(variable))).monospace());

            ui.add_space(10.0);

            ui.label(RichText::new("Children:").strong());
            if variable.children.is_empty() {
                ui.colored_label(Color32::GRAY, "(no children)");
            } else {
                render_children(ui, &variable.children, 0);
            }
        });
}

fn render_children(ui: &mut egui::Ui, children: &[Variable], depth: usize) {
    for child in children {
        ui.horizontal(|ui| {
            ui.add_space(depth as f32 * 12.0);
            ui.colored_label(
                Color32::from_rgb(110, 180, 110),
                format!("{}: {} = {}", child.name, child.type_name, child.value),
            );
        });
        render_children(ui, &child.children, depth + 1);
    }
}

fn describe_converted(value: &ConvertedValue) -> String {
    match value {
        ConvertedValue::Int(i) => format!("int {}", i),
        ConvertedValue::Float(f) => format!("float {}", f),
        ConvertedValue::Text(s) => format!("text {:?}", s),
    }
}

//! Variables panel UI rendering
//!
//! Presents the scopes of the current frame either as a tree of collapsing
//! headers or as a flat Name/Type/Value table with resizable columns.
//! Clicking selects a variable; double-clicking opens it in the details view.

use crate::rendering::text_utils::paint_cell_text;
use crate::state::{LayoutState, SelectionState, VariablesView};
use crate::ui::table_header;
use eframe::egui;
use egui::{RichText, ScrollArea};
use rdbgview::{Variable, VariablesModel};

const ROW_HEIGHT: f32 = 20.0;

/// Result of user interaction with the variables panel
pub enum VariablesInteraction {
    /// User switched between tree and table view
    ViewToggled,
    /// User clicked a variable
    VariableSelected { scope: usize, name: String },
    /// User double-clicked a variable
    DetailsRequested { scope: usize, name: String },
}

/// Renders the Tree/Table switch in the panel header.
pub fn render_toolbar(ui: &mut egui::Ui, view: VariablesView) -> Option<VariablesInteraction> {
    // Right-to-left layout: the last added button is the leftmost.
    let table = ui.selectable_label(view == VariablesView::Table, "Table");
    let tree = ui.selectable_label(view == VariablesView::Tree, "Tree");
    let switch = match view {
        VariablesView::Tree => table.clicked(),
        VariablesView::Table => tree.clicked(),
    };
    switch.then_some(VariablesInteraction::ViewToggled)
}

/// Renders the variables of all scopes in the current view mode.
pub fn render_variables_panel(
    ui: &mut egui::Ui,
    variables: &VariablesModel,
    selection: &SelectionState,
    layout: &mut LayoutState,
) -> Option<VariablesInteraction> {
    if variables.scopes().is_empty() {
        ui.label(RichText::new("No variables").weak());
        return None;
    }

    match layout.variables_view() {
        VariablesView::Tree => render_tree(ui, variables, selection),
        VariablesView::Table => render_table(ui, variables, selection, layout),
    }
}

// ===== Tree View =====

fn render_tree(
    ui: &mut egui::Ui,
    variables: &VariablesModel,
    selection: &SelectionState,
) -> Option<VariablesInteraction> {
    let mut interaction = None;

    ScrollArea::vertical()
        .id_salt("variables_tree_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (scope_index, scope) in variables.scopes().iter().enumerate() {
                egui::CollapsingHeader::new(RichText::new(&scope.name).strong())
                    .id_salt(("scope", scope_index))
                    .default_open(scope_index == 0)
                    .show(ui, |ui| {
                        for variable in variables.visible_variables(scope) {
                            let selected = selection.is_selected(scope_index, &variable.name);
                            let response = if variable.children.is_empty() {
                                ui.selectable_label(selected, variable_text(variable))
                            } else {
                                egui::CollapsingHeader::new(variable_text(variable))
                                    .id_salt(("variable", scope_index, &variable.name))
                                    .show(ui, |ui| render_children(ui, &variable.children))
                                    .header_response
                            };
                            if let Some(i) = variable_interaction(&response, scope_index, &variable.name) {
                                interaction = Some(i);
                            }
                        }
                    });
            }
        });

    interaction
}

fn render_children(ui: &mut egui::Ui, children: &[Variable]) {
    for child in children {
        if child.children.is_empty() {
            ui.label(variable_text(child));
        } else {
            egui::CollapsingHeader::new(variable_text(child))
                .id_salt(("child", &child.evaluate_name, &child.name))
                .show(ui, |ui| render_children(ui, &child.children));
        }
    }
}

fn variable_text(variable: &Variable) -> String {
    if variable.type_name.is_empty() {
        format!("{} = {}", variable.name, variable.value)
    } else {
        format!("{}: {} = {}", variable.name, variable.type_name, variable.value)
    }
}

fn variable_interaction(response: &egui::Response, scope: usize, name: &str) -> Option<VariablesInteraction> {
    if response.double_clicked() {
        Some(VariablesInteraction::DetailsRequested {
            scope,
            name: name.to_string(),
        })
    } else if response.clicked() {
        Some(VariablesInteraction::VariableSelected {
            scope,
            name: name.to_string(),
        })
    } else {
        None
    }
}

// ===== Table View =====

fn render_table(
    ui: &mut egui::Ui,
    variables: &VariablesModel,
    selection: &SelectionState,
    layout: &mut LayoutState,
) -> Option<VariablesInteraction> {
    let rows: Vec<(usize, &Variable)> = variables
        .scopes()
        .iter()
        .enumerate()
        .flat_map(|(index, scope)| variables.visible_variables(scope).map(move |v| (index, v)))
        .collect();
    layout.sync_variable_rows(rows.len());

    let mut interaction = None;

    ScrollArea::both()
        .id_salt("variables_table_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            table_header::render_table_header(ui, layout);

            let font_id = egui::FontId::proportional(13.0);
            let text_color = ui.visuals().text_color();
            let selection_fill = ui.visuals().selection.bg_fill;
            let selection_text = ui.visuals().selection.stroke.color;

            let table = layout.variables_table();
            for ((scope, variable), cells) in rows.iter().zip(table.rows()) {
                let row_width: f32 = cells.iter().map(|c| c.offset_width()).sum();
                let (row_rect, response) = ui.allocate_exact_size(
                    egui::vec2(row_width.max(ui.available_width()), ROW_HEIGHT),
                    egui::Sense::click(),
                );
                if !ui.is_rect_visible(row_rect) {
                    continue;
                }

                let selected = selection.is_selected(*scope, &variable.name);
                let painter = ui.painter_at(row_rect);
                if response.hovered() {
                    painter.rect_filled(row_rect, 0.0, ui.visuals().widgets.hovered.weak_bg_fill);
                }

                let texts = [variable.name.as_str(), variable.type_name.as_str(), variable.value.as_str()];
                let mut x = row_rect.left();
                for (column, cell) in cells.iter().enumerate() {
                    let cell_rect = egui::Rect::from_min_size(
                        egui::pos2(x, row_rect.top()),
                        egui::vec2(cell.offset_width(), ROW_HEIGHT),
                    );
                    // Selection highlights the value cell only.
                    let is_value = column + 1 == cells.len();
                    let color = if selected && is_value {
                        painter.rect_filled(cell_rect, 0.0, selection_fill);
                        selection_text
                    } else {
                        text_color
                    };
                    let text = texts.get(column).copied().unwrap_or("");
                    paint_cell_text(
                        &painter,
                        cell_rect,
                        (cell.padding_left(), cell.padding_right()),
                        text,
                        &font_id,
                        color,
                    );
                    x += cell.offset_width();
                }

                if let Some(i) = variable_interaction(&response, *scope, &variable.name) {
                    interaction = Some(i);
                }
            }
        });

    interaction
}

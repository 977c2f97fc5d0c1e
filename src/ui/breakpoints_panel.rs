//! Breakpoints panel UI rendering
//!
//! Lists breakpoints grouped by source file. Clicking a breakpoint shows its
//! source at that line; the toolbar removes all breakpoints at once.

use eframe::egui;
use egui::{Color32, RichText, ScrollArea};
use rdbgview::BreakpointsModel;

/// Result of user interaction with the breakpoints panel
pub enum BreakpointsInteraction {
    /// User clicked "remove all" in the toolbar
    RemoveAllRequested,
    /// User clicked a breakpoint
    BreakpointClicked { source: String, line: u32 },
}

/// Renders the toolbar in the breakpoints panel header.
pub fn render_toolbar(ui: &mut egui::Ui, breakpoints: &BreakpointsModel) -> Option<BreakpointsInteraction> {
    let button = ui
        .add_enabled(!breakpoints.is_empty(), egui::Button::new("🗑").frame(false))
        .on_hover_text("Remove all breakpoints");
    if button.clicked() {
        return Some(BreakpointsInteraction::RemoveAllRequested);
    }
    ui.label(RichText::new(breakpoints.total_count().to_string()).weak());
    None
}

/// Renders the breakpoint list.
pub fn render_breakpoints_panel(
    ui: &mut egui::Ui,
    breakpoints: &BreakpointsModel,
) -> Option<BreakpointsInteraction> {
    if breakpoints.is_empty() {
        ui.label(RichText::new("No breakpoints").weak());
        return None;
    }

    let mut interaction = None;
    ScrollArea::vertical()
        .id_salt("breakpoints_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (source, group) in breakpoints.grouped() {
                ui.label(RichText::new(source).strong());
                for breakpoint in group {
                    ui.horizontal(|ui| {
                        let (marker, color) = if breakpoint.verified {
                            ("●", Color32::from_rgb(220, 60, 60))
                        } else {
                            ("○", Color32::GRAY)
                        };
                        ui.colored_label(color, marker);
                        let response = ui.selectable_label(false, format!("line {}", breakpoint.line));
                        if response.clicked() {
                            interaction = Some(BreakpointsInteraction::BreakpointClicked {
                                source: breakpoint.source.clone(),
                                line: breakpoint.line,
                            });
                        }
                    });
                }
            }
        });
    interaction
}

//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying session counts.

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        if !state.session.is_loaded() {
            ui.label(RichText::new("No session loaded").strong());
            return;
        }

        let session = &state.session;
        let origin = if session.file_path().is_some() { "Session" } else { "Demo Session" };
        ui.label(
            RichText::new(format!(
                "{}: {} | Frames: {} | Breakpoints: {} | Variables: {}",
                origin,
                session.name().unwrap_or("unnamed"),
                session.callstack().frames().len(),
                session.breakpoints().total_count(),
                session.variables().visible_count(),
            ))
            .strong(),
        );

        if let Some(frame) = session.callstack().current_frame() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Paused in {}", frame.name)).strong());
        }

        if let Some((_, name)) = state.selection.selected_variable() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Selected: {}", name)).strong());
        }
    });
}

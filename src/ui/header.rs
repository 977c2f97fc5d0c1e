//! Header panel UI rendering
//!
//! Handles the top bar with session controls, the loaded session name and
//! the last error.

use crate::app::AppState;
use crate::io::AsyncLoader;
use eframe::egui;
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a session file
    OpenFileRequested(PathBuf),
    /// User clicked "Demo Session" button
    OpenDemoSessionRequested,
}

/// Renders the application header with session controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Loader, queried for an in-flight load
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let loading = loader.is_loading();

        if ui.add_enabled(!loading, egui::Button::new("📁 Open Session")).clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Debug Sessions", &["json", "br"])
                .add_filter("All Files", &["*"]);

            let start_dir = state
                .last_session_dir
                .clone()
                .or_else(|| std::env::current_dir().ok());
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.add_enabled(!loading, egui::Button::new("🎲 Demo Session")).clicked() {
            interaction = Some(HeaderInteraction::OpenDemoSessionRequested);
        }

        ui.separator();

        if loading {
            ui.spinner();
            ui.label("Loading session…");
        } else if let Some(name) = state.session.name() {
            ui.label(RichText::new(name).strong());
            if let Some(path) = state.session.file_path() {
                ui.label(RichText::new(path.display().to_string()).weak());
            }
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}

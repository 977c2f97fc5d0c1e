//! Call stack panel UI rendering

use crate::utils::format_location;
use eframe::egui;
use egui::{RichText, ScrollArea};
use rdbgview::CallstackModel;

/// Result of user interaction with the call stack panel
pub enum CallstackInteraction {
    /// User clicked a frame
    FrameSelected(u64),
}

/// Renders the frames of the call stack, innermost first.
pub fn render_callstack_panel(ui: &mut egui::Ui, callstack: &CallstackModel) -> Option<CallstackInteraction> {
    if callstack.frames().is_empty() {
        ui.label(RichText::new("Not paused").weak());
        return None;
    }

    let current_id = callstack.current_frame().map(|f| f.id);
    let mut interaction = None;

    ScrollArea::vertical()
        .id_salt("callstack_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for frame in callstack.frames() {
                let selected = current_id == Some(frame.id);
                let location = format_location(frame.source.as_deref(), frame.line);
                let response = ui.selectable_label(selected, frame.name.as_str());
                ui.label(RichText::new(location).weak().small());
                if response.clicked() && !selected {
                    interaction = Some(CallstackInteraction::FrameSelected(frame.id));
                }
            }
        });
    interaction
}

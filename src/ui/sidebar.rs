//! Debugger sidebar rendering
//!
//! Lays the sidebar panels out top to bottom from the split container's
//! relative sizes. Every panel has an always-visible header (caret, title and
//! toolbar); its content is drawn only while the panel is expanded. Between
//! panels sits a splitter handle that can be dragged unless it is hidden.

use crate::app::AppState;
use crate::state::{LayoutState, SelectionState, SessionState, SidebarPanel};
use crate::ui::breakpoints_panel::{self, BreakpointsInteraction};
use crate::ui::callstack_panel::{self, CallstackInteraction};
use crate::ui::sources_panel;
use crate::ui::variables_panel::{self, VariablesInteraction};
use eframe::egui;
use egui::{Color32, RichText};

const PANEL_HEADER_HEIGHT: f32 = 24.0;
const HANDLE_THICKNESS: f32 = 4.0;

/// Result of user interaction with the sidebar
pub enum SidebarInteraction {
    /// A caret was clicked
    PanelToggled(SidebarPanel),
    Breakpoints(BreakpointsInteraction),
    Callstack(CallstackInteraction),
    Variables(VariablesInteraction),
}

/// Renders all sidebar panels into the remaining space of `ui`.
pub fn render_sidebar(ui: &mut egui::Ui, state: &mut AppState) -> Option<SidebarInteraction> {
    let AppState {
        session,
        selection,
        layout,
        ..
    } = state;
    let mut interaction = None;

    let rect = ui.available_rect_before_wrap();
    ui.allocate_rect(rect, egui::Sense::hover());

    let slots: Vec<(bool, bool)> = layout
        .sidebar()
        .panels()
        .iter()
        .map(|p| (p.is_content_visible(), p.is_handle_hidden()))
        .collect();

    // Headers and handles have a fixed height; panel shares split the rest.
    let handle_count = slots.len().saturating_sub(1);
    let fixed = slots.len() as f32 * PANEL_HEADER_HEIGHT + handle_count as f32 * HANDLE_THICKNESS;
    let content_total = (rect.height() - fixed).max(0.0);
    let extents = layout.sidebar().extents(content_total);

    let mut y = rect.top();
    for (index, panel) in SidebarPanel::ALL.into_iter().enumerate() {
        let Some(&(content_visible, handle_hidden)) = slots.get(index) else {
            break;
        };
        let extent = extents.get(index).copied().unwrap_or(0.0);

        // ===== Header =====
        let header_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left(), y),
            egui::vec2(rect.width(), PANEL_HEADER_HEIGHT),
        );
        ui.painter().rect_filled(header_rect, 0.0, ui.visuals().faint_bg_color);
        let mut header_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(header_rect.shrink2(egui::vec2(4.0, 0.0)))
                .layout(egui::Layout::left_to_right(egui::Align::Center))
                .id_salt(("panel_header", index)),
        );
        if let Some(i) = render_panel_header(&mut header_ui, panel, session, layout) {
            interaction = Some(i);
        }
        y += PANEL_HEADER_HEIGHT;

        // ===== Content =====
        let content_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left(), y),
            egui::vec2(rect.width(), extent),
        );
        if content_visible && extent >= 1.0 {
            let mut content_ui = ui.new_child(
                egui::UiBuilder::new()
                    .max_rect(content_rect.shrink2(egui::vec2(4.0, 2.0)))
                    .layout(egui::Layout::top_down(egui::Align::Min))
                    .id_salt(("panel_content", index)),
            );
            content_ui.set_clip_rect(content_rect.intersect(ui.clip_rect()));
            if let Some(i) = render_panel_content(&mut content_ui, panel, session, selection, layout) {
                interaction = Some(i);
            }
        }
        y += extent;

        // ===== Splitter handle =====
        if index < handle_count {
            let handle_rect = egui::Rect::from_min_size(
                egui::pos2(rect.left(), y),
                egui::vec2(rect.width(), HANDLE_THICKNESS),
            );
            render_handle(ui, layout, index, handle_rect, handle_hidden, content_total);
            y += HANDLE_THICKNESS;
        }
    }

    interaction
}

fn render_panel_header(
    ui: &mut egui::Ui,
    panel: SidebarPanel,
    session: &SessionState,
    layout: &LayoutState,
) -> Option<SidebarInteraction> {
    let caret = layout.caret(panel);
    let hover = if caret.is_collapsed() { "Expand" } else { "Collapse" };
    let caret_button = ui
        .add(egui::Button::new(caret.icon().glyph()).frame(false))
        .on_hover_text(hover);
    if caret_button.clicked() {
        return Some(SidebarInteraction::PanelToggled(panel));
    }

    ui.label(RichText::new(panel.title()).strong());

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match panel {
        SidebarPanel::Variables => {
            variables_panel::render_toolbar(ui, layout.variables_view()).map(SidebarInteraction::Variables)
        }
        SidebarPanel::Callstack => {
            ui.label(RichText::new(session.callstack().frames().len().to_string()).weak());
            None
        }
        SidebarPanel::Breakpoints => {
            breakpoints_panel::render_toolbar(ui, session.breakpoints()).map(SidebarInteraction::Breakpoints)
        }
        SidebarPanel::Sources => {
            sources_panel::render_toolbar(ui, session.sources());
            None
        }
    })
    .inner
}

fn render_panel_content(
    ui: &mut egui::Ui,
    panel: SidebarPanel,
    session: &SessionState,
    selection: &SelectionState,
    layout: &mut LayoutState,
) -> Option<SidebarInteraction> {
    match panel {
        SidebarPanel::Variables => {
            variables_panel::render_variables_panel(ui, session.variables(), selection, layout)
                .map(SidebarInteraction::Variables)
        }
        SidebarPanel::Callstack => {
            callstack_panel::render_callstack_panel(ui, session.callstack()).map(SidebarInteraction::Callstack)
        }
        SidebarPanel::Breakpoints => {
            breakpoints_panel::render_breakpoints_panel(ui, session.breakpoints())
                .map(SidebarInteraction::Breakpoints)
        }
        SidebarPanel::Sources => {
            sources_panel::render_sources_panel(ui, session.sources());
            None
        }
    }
}

fn render_handle(
    ui: &mut egui::Ui,
    layout: &mut LayoutState,
    index: usize,
    handle_rect: egui::Rect,
    hidden: bool,
    content_total: f32,
) {
    let line_stroke = ui.visuals().widgets.noninteractive.bg_stroke;

    // A hidden handle still separates the panels but cannot be dragged.
    if hidden {
        ui.painter().hline(handle_rect.x_range(), handle_rect.center().y, line_stroke);
        return;
    }

    let response = ui.interact(handle_rect, ui.id().with(("sidebar_handle", index)), egui::Sense::drag());
    if response.dragged() && content_total > 0.0 {
        layout.drag_sidebar_handle(index, response.drag_delta().y / content_total);
    }

    if response.hovered() || response.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeVertical);
        ui.painter().rect_filled(handle_rect, 0.0, Color32::from_rgb(100, 150, 255));
    } else {
        ui.painter().hline(handle_rect.x_range(), handle_rect.center().y, line_stroke);
    }
}

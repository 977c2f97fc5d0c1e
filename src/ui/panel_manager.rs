//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, sidebar, details, status) and turns
//! their interactions into one `PanelInteraction` for the application.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::state::SidebarPanel;
use crate::ui::breakpoints_panel::BreakpointsInteraction;
use crate::ui::callstack_panel::CallstackInteraction;
use crate::ui::sidebar::{self, SidebarInteraction};
use crate::ui::variables_panel::VariablesInteraction;
use crate::ui::{details_panel, header, status_bar};
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a session file
    OpenFileRequested(PathBuf),
    /// User requested the demo session
    OpenDemoSessionRequested,
    /// A panel caret was clicked
    PanelToggleRequested(SidebarPanel),
    /// "Remove all" was clicked in the breakpoints toolbar
    RemoveAllBreakpointsRequested,
    /// A breakpoint was clicked
    BreakpointClicked { source: String, line: u32 },
    /// A call stack frame was clicked
    FrameSelected(u64),
    /// The variables view was switched between tree and table
    VariablesViewToggled,
    /// A variable was clicked
    VariableSelected { scope: usize, name: String },
    /// A variable was double-clicked
    VariableDetailsRequested { scope: usize, name: String },
}

impl From<SidebarInteraction> for PanelInteraction {
    fn from(interaction: SidebarInteraction) -> Self {
        match interaction {
            SidebarInteraction::PanelToggled(panel) => PanelInteraction::PanelToggleRequested(panel),
            SidebarInteraction::Breakpoints(BreakpointsInteraction::RemoveAllRequested) => {
                PanelInteraction::RemoveAllBreakpointsRequested
            }
            SidebarInteraction::Breakpoints(BreakpointsInteraction::BreakpointClicked { source, line }) => {
                PanelInteraction::BreakpointClicked { source, line }
            }
            SidebarInteraction::Callstack(CallstackInteraction::FrameSelected(id)) => {
                PanelInteraction::FrameSelected(id)
            }
            SidebarInteraction::Variables(VariablesInteraction::ViewToggled) => {
                PanelInteraction::VariablesViewToggled
            }
            SidebarInteraction::Variables(VariablesInteraction::VariableSelected { scope, name }) => {
                PanelInteraction::VariableSelected { scope, name }
            }
            SidebarInteraction::Variables(VariablesInteraction::DetailsRequested { scope, name }) => {
                PanelInteraction::VariableDetailsRequested { scope, name }
            }
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, loader) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoSessionRequested => {
                        PanelInteraction::OpenDemoSessionRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Right panel: debugger sidebar
        let sidebar_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(2))
            .fill(ctx.style().visuals.panel_fill);

        egui::SidePanel::right("debug_sidebar")
            .default_width(ctx.content_rect().width() * state.layout.sidebar_width_ratio())
            .resizable(true)
            .frame(sidebar_frame)
            .show(ctx, |ui| {
                if let Some(sidebar_interaction) = sidebar::render_sidebar(ui, state) {
                    interaction = Some(sidebar_interaction.into());
                }
            });

        // Remaining space: details of the opened variable
        let details_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(details_frame)
            .show(ctx, |ui| {
                details_panel::render_details_panel(ui, state);
            });

        interaction
    }
}

//! Debugger front-end GUI application
//!
//! This module provides an interactive viewer for debug session snapshots
//! using the egui framework. The viewer features:
//! - A sidebar of collapsible Variables, Callstack, Breakpoints and Source panels
//! - A variables table with drag-resizable columns, or a tree view
//! - Asynchronous session loading with a loading indicator
//! - Persistent view preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Background session loading
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Low-level text drawing helpers
//! - `state/` - State management for the session, selection and layout

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the debugger GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    log::info!(
        "starting debugger front-end{}",
        initial_file
            .as_ref()
            .map(|p| format!(" with {}", p.display()))
            .unwrap_or_default()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Debugger"),
        ..Default::default()
    };

    eframe::run_native(
        "rdbgview",
        options,
        Box::new(move |cc| Ok(Box::new(DebuggerApp::new(cc, initial_file)))),
    )
}

/// The main debugger application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles session loading and interaction logic
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct DebuggerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous session loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl DebuggerApp {
    /// Creates a new viewer instance with preferences loaded from persistent storage.
    /// Optionally accepts an initial session file to load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let variables_view = SettingsCoordinator::load_variables_view(cc.storage);
        let last_session_dir = SettingsCoordinator::load_last_session_dir(cc.storage);

        Self {
            state: AppState::with_settings(variables_view, last_session_dir),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenDemoSessionRequested => {
                ApplicationCoordinator::open_demo_session(&mut self.state, &mut self.loader);
            }
            PanelInteraction::PanelToggleRequested(panel) => {
                ApplicationCoordinator::handle_panel_toggle(&mut self.state, panel);
            }
            PanelInteraction::RemoveAllBreakpointsRequested => {
                ApplicationCoordinator::remove_all_breakpoints(&mut self.state);
            }
            PanelInteraction::BreakpointClicked { source, line } => {
                ApplicationCoordinator::handle_breakpoint_click(&mut self.state, &source, line);
            }
            PanelInteraction::FrameSelected(frame_id) => {
                ApplicationCoordinator::handle_frame_selection(&mut self.state, frame_id);
            }
            PanelInteraction::VariablesViewToggled => {
                ApplicationCoordinator::toggle_variables_view(&mut self.state);
            }
            PanelInteraction::VariableSelected { scope, name } => {
                ApplicationCoordinator::handle_variable_selection(&mut self.state, scope, &name);
            }
            PanelInteraction::VariableDetailsRequested { scope, name } => {
                ApplicationCoordinator::handle_variable_details(&mut self.state, scope, &name);
            }
        }
    }

    fn save_preferences(&self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_preferences(
            storage,
            self.state.layout.variables_view(),
            self.state.last_session_dir.as_ref(),
        );
    }
}

impl eframe::App for DebuggerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_preferences(storage);
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Check for async loading completion
    /// 2. Load initial file if specified via command line
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions and persist changed preferences
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Check for async loading completion
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            let persist = matches!(
                interaction,
                PanelInteraction::VariablesViewToggled | PanelInteraction::OpenFileRequested(_)
            );
            self.handle_panel_interaction(interaction, ctx);

            // Persist preferences right away (for crash resilience)
            if persist {
                if let Some(storage) = frame.storage_mut() {
                    self.save_preferences(storage);
                }
            }
        }
    }
}

//! Debug session state management.
//!
//! This module owns the debugger models filled from a loaded session
//! snapshot, along with where that snapshot came from.

use rdbgview::{
    BreakpointsModel, CallstackModel, DebugSession, SourcesModel, VariablesModel,
};
use std::path::PathBuf;

/// State related to the loaded debug session.
///
/// Responsibilities:
/// - Holding the breakpoints, call stack, sources and variables models
/// - Tracking the session name and source file path
/// - Keeping the shown source in step with the selected frame
#[derive(Debug, Default)]
pub struct SessionState {
    breakpoints: BreakpointsModel,
    callstack: CallstackModel,
    sources: SourcesModel,
    variables: VariablesModel,
    /// Name of the loaded session (None when nothing is loaded)
    name: Option<String>,
    /// Path to the loaded file (None for demo sessions)
    file_path: Option<PathBuf>,
}

impl SessionState {
    /// Creates a new session state with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills all models from a session snapshot.
    ///
    /// # Arguments
    /// * `session` - The snapshot to load
    /// * `path` - Optional file path (None for demo sessions)
    pub fn load_session(&mut self, session: DebugSession, path: Option<PathBuf>) {
        let DebugSession {
            name,
            breakpoints,
            frames,
            scopes,
            sources,
        } = session;

        self.breakpoints.set_all(breakpoints);
        self.callstack.set_frames(frames);
        self.sources.set_sources(sources);
        self.variables.set_scopes(scopes);
        self.name = Some(name);
        self.file_path = path;
        self.show_current_frame_source();
    }

    /// Clears all session state.
    pub fn clear(&mut self) {
        self.breakpoints.clear();
        self.callstack.set_frames(Vec::new());
        self.sources.set_sources(Vec::new());
        self.variables.set_scopes(Vec::new());
        self.name = None;
        self.file_path = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.name.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    // ===== Models =====

    pub fn breakpoints(&self) -> &BreakpointsModel {
        &self.breakpoints
    }

    pub fn breakpoints_mut(&mut self) -> &mut BreakpointsModel {
        &mut self.breakpoints
    }

    pub fn callstack(&self) -> &CallstackModel {
        &self.callstack
    }

    pub fn sources(&self) -> &SourcesModel {
        &self.sources
    }

    pub fn sources_mut(&mut self) -> &mut SourcesModel {
        &mut self.sources
    }

    pub fn variables(&self) -> &VariablesModel {
        &self.variables
    }

    // ===== Frame Navigation =====

    /// Selects a frame and shows its source at the frame's line.
    pub fn select_frame(&mut self, frame_id: u64) -> bool {
        if !self.callstack.select_frame(frame_id) {
            return false;
        }
        self.show_current_frame_source();
        true
    }

    fn show_current_frame_source(&mut self) {
        let location = self
            .callstack
            .current_frame()
            .and_then(|f| f.source.clone().map(|s| (s, f.line)));
        if let Some((path, line)) = location {
            self.sources.open(&path, Some(line));
        }
    }
}

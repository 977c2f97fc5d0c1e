//! Background session loading.
//!
//! Session snapshots are parsed on a worker thread so the GUI keeps drawing
//! while a large file is read and decompressed. The worker reports back over
//! a channel and wakes the GUI with a repaint request.

use eframe::egui;
use rdbgview::{DebugSession, DemoSessionReader, JsonSessionReader, SessionReader};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Busy flag shared with the worker thread.
#[derive(Debug, Default)]
struct LoadingState {
    in_progress: bool,
}

/// A load that has been started but not yet picked up.
struct PendingLoad {
    path: PathBuf,
    receiver: Receiver<Result<DebugSession, String>>,
}

/// What `check_completion` found.
pub enum LoadResult {
    /// The session was read
    Success {
        session: DebugSession,
        /// Source file; None for the demo session
        path: Option<PathBuf>,
    },
    /// Reading failed; carries the full error chain
    Error(String),
    /// Nothing finished since the last check
    None,
}

/// Runs session loads off the GUI thread, one at a time.
///
/// Starting a new load drops the receiver of the previous one, so a slow
/// earlier load can never overwrite a later one.
pub struct AsyncLoader {
    state: Arc<Mutex<LoadingState>>,
    pending: Option<PendingLoad>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(LoadingState::default())),
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().map(|s| s.in_progress).unwrap_or(false)
    }

    /// Reads `path` on a worker thread.
    ///
    /// `ctx` is used to request a repaint once the worker is done, so the
    /// result is picked up by the next `check_completion()`.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        set_in_progress(&self.state, true);

        let state = Arc::clone(&self.state);
        let repaint = ctx.clone();
        let file = path.to_string_lossy().into_owned();
        log::info!("loading session from {}", file);

        thread::spawn(move || {
            // `{:#}` keeps the context chain, so the header shows the root cause.
            let result = JsonSessionReader::new()
                .read(&file)
                .map_err(|e| format!("{:#}", e));
            // The receiver is gone when a newer load replaced this one.
            let _ = sender.send(result);
            set_in_progress(&state, false);
            repaint.request_repaint();
        });

        self.pending = Some(PendingLoad { path, receiver });
    }

    /// Builds the demo session right away; generating it is cheap.
    pub fn load_demo_session(&mut self) -> Result<DebugSession, String> {
        let reader = DemoSessionReader::new();
        log::info!("generating {} with seed {}", reader.source_name(), reader.seed());
        reader.read("").map_err(|e| e.to_string())
    }

    /// Picks up the result of the pending load, if the worker has finished.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(pending) = &self.pending else {
            return LoadResult::None;
        };
        let Ok(result) = pending.receiver.try_recv() else {
            return LoadResult::None;
        };

        let Some(PendingLoad { path, .. }) = self.pending.take() else {
            return LoadResult::None;
        };
        match result {
            Ok(session) => LoadResult::Success {
                session,
                path: Some(path),
            },
            Err(message) => {
                log::warn!("session load failed: {}", message);
                LoadResult::Error(message)
            }
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn set_in_progress(state: &Mutex<LoadingState>, in_progress: bool) {
    if let Ok(mut state) = state.lock() {
        state.in_progress = in_progress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loader_is_idle() {
        let mut loader = AsyncLoader::new();
        assert!(!loader.is_loading());
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_demo_session_is_generated_synchronously() {
        let mut loader = AsyncLoader::new();
        let session = loader.load_demo_session().expect("demo session should generate");
        assert!(!session.frames.is_empty());
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_missing_file_reports_error() {
        let mut loader = AsyncLoader::new();
        let ctx = egui::Context::default();
        loader.start_file_load(PathBuf::from("/nonexistent/session.json"), &ctx);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        loop {
            match loader.check_completion() {
                LoadResult::Error(message) => {
                    assert!(message.contains("/nonexistent/session.json"));
                    break;
                }
                LoadResult::Success { .. } => panic!("missing file must not load"),
                LoadResult::None => {
                    assert!(std::time::Instant::now() < deadline, "load did not finish");
                    thread::sleep(std::time::Duration::from_millis(10));
                }
            }
        }
    }
}

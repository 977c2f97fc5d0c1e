//! Sources model: the source files of a session and the one being shown.

use serde::{Deserialize, Serialize};

/// A source file known to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

impl Source {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourcesModel {
    sources: Vec<Source>,
    current: Option<usize>,
    current_line: Option<u32>,
    revision: u64,
}

impl SourcesModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the known sources and clears the current one.
    pub fn set_sources(&mut self, sources: Vec<Source>) {
        self.sources = sources;
        self.current = None;
        self.current_line = None;
        self.revision += 1;
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Shows `path`, optionally at `line`. Returns `false` for an unknown path.
    pub fn open(&mut self, path: &str, line: Option<u32>) -> bool {
        let Some(index) = self.sources.iter().position(|s| s.path == path) else {
            log::debug!("no source loaded for {}", path);
            return false;
        };
        self.current = Some(index);
        self.current_line = line;
        self.revision += 1;
        true
    }

    pub fn current_source(&self) -> Option<&Source> {
        self.current.and_then(|i| self.sources.get(i))
    }

    /// 1-based line to highlight in the current source.
    pub fn current_line(&self) -> Option<u32> {
        self.current_line
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

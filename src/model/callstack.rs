//! Call stack model.

use serde::{Deserialize, Serialize};

/// A stack frame of the paused thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub line: u32,
}

/// Frames of the paused thread, innermost first, plus the selected frame.
#[derive(Debug, Clone, Default)]
pub struct CallstackModel {
    frames: Vec<Frame>,
    current: Option<u64>,
    revision: u64,
}

impl CallstackModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the frames and selects the innermost one.
    pub fn set_frames(&mut self, frames: Vec<Frame>) {
        self.current = frames.first().map(|f| f.id);
        self.frames = frames;
        self.revision += 1;
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Selects the frame with `id`. Unknown ids leave the selection as is.
    pub fn select_frame(&mut self, id: u64) -> bool {
        if self.current == Some(id) || !self.frames.iter().any(|f| f.id == id) {
            return false;
        }
        self.current = Some(id);
        self.revision += 1;
        true
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        let id = self.current?;
        self.frames.iter().find(|f| f.id == id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(id: u64) -> Frame {
        Frame { id, name: format!("f{}", id), source: None, line: 1 }
    }

    #[test]
    fn test_innermost_frame_selected_on_set() {
        let mut model = CallstackModel::new();
        model.set_frames(vec![frame(3), frame(2), frame(1)]);
        assert_eq!(model.current_frame().map(|f| f.id), Some(3));
    }

    #[test]
    fn test_select_frame() {
        let mut model = CallstackModel::new();
        model.set_frames(vec![frame(3), frame(2)]);
        assert!(model.select_frame(2));
        assert!(!model.select_frame(2));
        assert!(!model.select_frame(42));
        assert_eq!(model.current_frame().map(|f| f.id), Some(2));
    }
}

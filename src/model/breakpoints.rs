//! Breakpoints model.
//!
//! Breakpoints are kept grouped by source path. Each mutation bumps the
//! revision counter so views can tell when to rebuild.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_verified() -> bool {
    true
}

/// A breakpoint set in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub source: String,
    pub line: u32,
    #[serde(default = "default_verified")]
    pub verified: bool,
}

/// Breakpoints of a session, grouped by source path.
#[derive(Debug, Clone, Default)]
pub struct BreakpointsModel {
    by_source: BTreeMap<String, Vec<Breakpoint>>,
    revision: u64,
}

impl BreakpointsModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all breakpoints.
    pub fn set_all(&mut self, breakpoints: Vec<Breakpoint>) {
        self.by_source.clear();
        for bp in breakpoints {
            self.by_source.entry(bp.source.clone()).or_default().push(bp);
        }
        self.revision += 1;
    }

    /// Replaces the breakpoints of one source file. An empty list removes the
    /// file's group.
    pub fn set_breakpoints(&mut self, source: &str, breakpoints: Vec<Breakpoint>) {
        if breakpoints.is_empty() {
            self.by_source.remove(source);
        } else {
            self.by_source.insert(source.to_string(), breakpoints);
        }
        self.revision += 1;
    }

    /// Removes every breakpoint.
    pub fn clear(&mut self) {
        self.by_source.clear();
        self.revision += 1;
    }

    /// Groups ordered by source path, each sorted by line.
    pub fn grouped(&self) -> Vec<(&str, Vec<&Breakpoint>)> {
        self.by_source
            .iter()
            .map(|(source, bps)| {
                let mut sorted: Vec<&Breakpoint> = bps.iter().collect();
                sorted.sort_by_key(|bp| bp.line);
                (source.as_str(), sorted)
            })
            .collect()
    }

    pub fn total_count(&self) -> usize {
        self.by_source.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_source.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(source: &str, line: u32) -> Breakpoint {
        Breakpoint { source: source.to_string(), line, verified: true }
    }

    #[test]
    fn test_grouped_sorts_by_path_and_line() {
        let mut model = BreakpointsModel::new();
        model.set_all(vec![bp("b.py", 9), bp("a.py", 30), bp("b.py", 2), bp("a.py", 4)]);

        let groups = model.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a.py");
        assert_eq!(groups[0].1.iter().map(|b| b.line).collect::<Vec<_>>(), vec![4, 30]);
        assert_eq!(groups[1].1.iter().map(|b| b.line).collect::<Vec<_>>(), vec![2, 9]);
        assert_eq!(model.total_count(), 4);
    }

    #[test]
    fn test_set_breakpoints_replaces_one_source() {
        let mut model = BreakpointsModel::new();
        model.set_all(vec![bp("a.py", 1), bp("b.py", 2)]);
        model.set_breakpoints("a.py", vec![]);
        assert_eq!(model.total_count(), 1);

        let rev = model.revision();
        model.clear();
        assert!(model.is_empty());
        assert!(model.revision() > rev);
    }
}

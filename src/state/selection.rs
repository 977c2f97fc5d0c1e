//! Selection state management.
//!
//! Tracks which variable is selected and which one is opened in the
//! details view.

/// Reference to a variable: scope index plus variable name.
pub type VariableRef = (usize, String);

/// State related to user selection.
///
/// Responsibilities:
/// - Tracking the selected variable
/// - Tracking the variable shown in the details view
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Currently selected variable
    selected_variable: Option<VariableRef>,
    /// Variable whose details are shown
    details_variable: Option<VariableRef>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self {
            selected_variable: None,
            details_variable: None,
        }
    }

    /// Clears all selection state.
    pub fn clear(&mut self) {
        self.selected_variable = None;
        self.details_variable = None;
    }

    // ===== Selection Queries =====

    pub fn selected_variable(&self) -> Option<&VariableRef> {
        self.selected_variable.as_ref()
    }

    pub fn is_selected(&self, scope: usize, name: &str) -> bool {
        matches!(&self.selected_variable, Some((s, n)) if *s == scope && n == name)
    }

    pub fn details_variable(&self) -> Option<&VariableRef> {
        self.details_variable.as_ref()
    }

    // ===== Selection Mutations =====

    /// Selects a variable.
    ///
    /// # Returns
    /// `false` if that variable was already selected.
    pub fn select_variable(&mut self, scope: usize, name: &str) -> bool {
        if self.is_selected(scope, name) {
            return false;
        }
        self.selected_variable = Some((scope, name.to_string()));
        true
    }

    /// Selects a variable and shows it in the details view.
    pub fn open_details(&mut self, scope: usize, name: &str) {
        self.selected_variable = Some((scope, name.to_string()));
        self.details_variable = Some((scope, name.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_same_variable_twice() {
        let mut selection = SelectionState::new();
        assert!(selection.select_variable(0, "x"));
        assert!(!selection.select_variable(0, "x"));
        assert!(selection.select_variable(1, "x"));
    }

    #[test]
    fn test_open_details_selects_too() {
        let mut selection = SelectionState::new();
        selection.open_details(1, "items");
        assert!(selection.is_selected(1, "items"));
        assert_eq!(selection.details_variable(), Some(&(1, "items".to_string())));
        selection.clear();
        assert!(selection.details_variable().is_none());
    }
}

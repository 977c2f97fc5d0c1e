//! Settings persistence coordination.
//!
//! Stores user preferences in eframe's persistent storage as JSON strings.
//! Only view preferences are kept; panel sizes and column widths start fresh
//! every session.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::VariablesView;

const VARIABLES_VIEW_KEY: &str = "variables_view";
const LAST_SESSION_DIR_KEY: &str = "last_session_dir";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// Missing keys and values that no longer deserialize both fall back to
    /// `T::default()`.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring stored setting '{}': {}", key, e);
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
        }
    }

    // ===== Typed Preferences =====

    pub fn load_variables_view(storage: Option<&dyn eframe::Storage>) -> VariablesView {
        Self::load_setting(storage, VARIABLES_VIEW_KEY)
    }

    pub fn load_last_session_dir(storage: Option<&dyn eframe::Storage>) -> Option<PathBuf> {
        Self::try_load_setting(storage, LAST_SESSION_DIR_KEY)
    }

    /// Saves all view preferences and flushes the storage.
    pub fn save_preferences(
        storage: &mut dyn eframe::Storage,
        variables_view: VariablesView,
        last_session_dir: Option<&PathBuf>,
    ) {
        Self::save_setting(storage, VARIABLES_VIEW_KEY, &variables_view);
        if let Some(dir) = last_session_dir {
            Self::save_setting(storage, LAST_SESSION_DIR_KEY, dir);
        }
        storage.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_variables_view_defaults_to_tree() {
        let storage = MockStorage::default();
        assert_eq!(SettingsCoordinator::load_variables_view(Some(&storage)), VariablesView::Tree);
        assert_eq!(SettingsCoordinator::load_variables_view(None), VariablesView::Tree);
    }

    #[test]
    fn test_preferences_round_trip() {
        let mut storage = MockStorage::default();
        let dir = PathBuf::from("/tmp/sessions");
        SettingsCoordinator::save_preferences(&mut storage, VariablesView::Table, Some(&dir));

        assert_eq!(SettingsCoordinator::load_variables_view(Some(&storage)), VariablesView::Table);
        assert_eq!(SettingsCoordinator::load_last_session_dir(Some(&storage)), Some(dir));
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let mut storage = MockStorage::default();
        storage.set_string(VARIABLES_VIEW_KEY, "not json".to_string());
        assert_eq!(SettingsCoordinator::load_variables_view(Some(&storage)), VariablesView::Tree);
    }
}

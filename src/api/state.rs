//! Application state for the pay stub engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the tax tables loaded at startup; cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    tables: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state from loaded tax tables.
    pub fn new(tables: ConfigLoader) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns the loaded tax tables.
    pub fn tables(&self) -> &ConfigLoader {
        &self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::sample_tables;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_tables() {
        let state = AppState::new(ConfigLoader::from(sample_tables()));
        let clone = state.clone();
        assert!(std::ptr::eq(state.tables(), clone.tables()));
    }
}

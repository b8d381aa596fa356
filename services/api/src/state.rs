//! Application state shared across handlers

use common::UserRegistry;

/// Application state shared across handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub user_registry: UserRegistry,
}

impl AppState {
    pub fn new(user_registry: UserRegistry) -> Self {
        Self { user_registry }
    }
}

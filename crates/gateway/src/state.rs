//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::{UserRepository, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub user_store: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, user_store: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service,
            user_store,
        }
    }
}

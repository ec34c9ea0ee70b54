//! User Service Library
//!
//! This crate provides user management over an in-memory store.
//! The gateway embeds it directly and exposes it over HTTP.
//!
//! - **repository**: the `UserRepository` seam and its in-memory `UserStore`
//! - **service**: the `UserService` use cases, resolving absence into NotFound

pub mod repository;
pub mod service;

use std::sync::Arc;

pub use repository::{UserRepository, UserStore};
pub use service::{UserManager, UserService};

/// Build the user service over a freshly constructed in-memory store.
///
/// Returns both handles so callers can share the store with other
/// components (for example a health check).
pub fn in_memory() -> (Arc<UserStore>, Arc<UserManager>) {
    let store = Arc::new(UserStore::new());
    let service = Arc::new(UserManager::new(store.clone()));
    (store, service)
}

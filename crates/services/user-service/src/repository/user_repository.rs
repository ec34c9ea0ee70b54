//! In-memory user repository.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Absence is a normal outcome at this layer: lookups return `Option`,
/// removals return `bool`. Every method is atomic on its own; callers that
/// chain two calls get no atomicity across them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of all users, in no particular order
    async fn list(&self) -> Vec<User>;

    /// Find user by ID
    async fn find(&self, id: &str) -> Option<User>;

    /// Create a user under a freshly generated ID
    async fn create(&self, name: String, age: i32) -> User;

    /// Replace name and age of an existing user, keeping its ID
    async fn replace(&self, id: &str, name: String, age: i32) -> Option<User>;

    /// Remove user by ID, returning whether a record was removed
    async fn remove(&self, id: &str) -> bool;

    /// Number of stored users
    async fn count(&self) -> usize;
}

/// Concurrent in-memory implementation of UserRepository.
///
/// Records live in a sharded `DashMap` keyed by ID. Values are cloned on the
/// way out, so no caller ever holds a reference into the map.
#[derive(Debug, Default)]
pub struct UserStore {
    users: DashMap<String, User>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> Vec<User> {
        self.users
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    async fn find(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    async fn create(&self, name: String, age: i32) -> User {
        let user = User::new(Uuid::new_v4().to_string(), name, age);
        self.users.insert(user.id.clone(), user.clone());
        user
    }

    async fn replace(&self, id: &str, name: String, age: i32) -> Option<User> {
        // get_mut holds the shard lock, so a concurrent remove cannot
        // interleave and the record is never re-inserted once gone.
        self.users.get_mut(id).map(|mut entry| {
            let updated = User::new(id, name, age);
            *entry = updated.clone();
            updated
        })
    }

    async fn remove(&self, id: &str) -> bool {
        self.users.remove(id).is_some()
    }

    async fn count(&self) -> usize {
        self.users.len()
    }
}

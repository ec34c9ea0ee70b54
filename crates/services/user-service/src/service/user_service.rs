//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{user_not_found_message, User, UserRequestBody};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// Lookups by ID fail with `AppError::NotFound` when the user is absent.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Create a new user
    async fn create_user(&self, request: UserRequestBody) -> AppResult<User>;

    /// Replace name and age of an existing user
    async fn update_user(&self, id: &str, request: UserRequestBody) -> AppResult<User>;

    /// Delete an existing user
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
///
/// Update and delete check existence first and then act. The two steps are
/// not atomic: a delete landing in between turns the second step into a
/// no-op and the call still succeeds.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.list().await)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repo
            .find(id)
            .await
            .ok_or_not_found(|| user_not_found_message(id))
    }

    async fn create_user(&self, request: UserRequestBody) -> AppResult<User> {
        let user = self.repo.create(request.name, request.age).await;
        tracing::debug!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: &str, request: UserRequestBody) -> AppResult<User> {
        let existing = self.get_user(id).await?;
        let replacement = existing.replaced_with(&request);

        match self.repo.replace(id, request.name, request.age).await {
            Some(user) => {
                tracing::debug!(user_id = %id, "User updated");
                Ok(user)
            }
            None => {
                tracing::warn!(user_id = %id, "User removed concurrently, update not applied");
                Ok(replacement)
            }
        }
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.get_user(id).await?;

        if self.repo.remove(id).await {
            tracing::debug!(user_id = %id, "User deleted");
        } else {
            tracing::debug!(user_id = %id, "User already removed concurrently");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use common::AppError;

    fn stored_user() -> User {
        User::new("abc", "John Smith", 30)
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find().returning(|_| None);

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user("UNKNOWN").await;

        assert_eq!(
            result,
            Err(AppError::NotFound(
                "User with uuid 'UNKNOWN' not found".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_update_missing_user_never_replaces() {
        let mut repo = MockUserRepository::new();
        repo.expect_find().returning(|_| None);
        repo.expect_replace().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .update_user("UNKNOWN", UserRequestBody::new("John Smith", 55))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_user_never_removes() {
        let mut repo = MockUserRepository::new();
        repo.expect_find().returning(|_| None);
        repo.expect_remove().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.delete_user("UNKNOWN").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_checks_then_replaces() {
        let mut repo = MockUserRepository::new();
        repo.expect_find()
            .withf(|id: &str| id == "abc")
            .times(1)
            .returning(|_| Some(stored_user()));
        repo.expect_replace()
            .withf(|id: &str, name: &String, age: &i32| {
                id == "abc" && name == "Jane Smith" && *age == 45
            })
            .times(1)
            .returning(|id, name, age| Some(User::new(id, name, age)));

        let service = UserManager::new(Arc::new(repo));
        let updated = service
            .update_user("abc", UserRequestBody::new("Jane Smith", 45))
            .await
            .unwrap();

        assert_eq!(updated, User::new("abc", "Jane Smith", 45));
    }

    #[tokio::test]
    async fn test_update_racing_delete_is_silent_no_op() {
        // find sees the user, then a concurrent delete wins before replace.
        let mut repo = MockUserRepository::new();
        repo.expect_find().returning(|_| Some(stored_user()));
        repo.expect_replace().times(1).returning(|_, _, _| None);
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .update_user("abc", UserRequestBody::new("Jane Smith", 45))
            .await;

        assert_eq!(result, Ok(User::new("abc", "Jane Smith", 45)));
    }

    #[tokio::test]
    async fn test_delete_racing_delete_is_silent_no_op() {
        let mut repo = MockUserRepository::new();
        repo.expect_find().returning(|_| Some(stored_user()));
        repo.expect_remove().times(1).returning(|_| false);

        let service = UserManager::new(Arc::new(repo));

        assert_eq!(service.delete_user("abc").await, Ok(()));
    }

    #[tokio::test]
    async fn test_create_delegates_to_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|name: &String, age: &i32| name == "John Smith" && *age == 30)
            .times(1)
            .returning(|name, age| User::new("generated", name, age));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(UserRequestBody::new("John Smith", 30))
            .await
            .unwrap();

        assert_eq!(user, User::new("generated", "John Smith", 30));
    }
}

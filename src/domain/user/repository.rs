//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their username
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Get a user by their email address
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user with its pre-assigned id
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// List all users ordered by id
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count all users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a username exists
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_username(username).await?.is_some())
    }

    /// Check if an email exists
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<BTreeMap<i64, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(&id.value()).cloned())
        }

        async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.username() == username).cloned())
        }

        async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.email() == email).cloned())
        }

        async fn create(&self, user: User) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let id = user.id().value();

            if users.contains_key(&id) {
                return Err(DomainError::conflict(format!(
                    "User with ID '{}' already exists",
                    id
                )));
            }

            if users.values().any(|u| u.username() == user.username()) {
                return Err(DomainError::conflict(format!(
                    "Username '{}' already exists",
                    user.username()
                )));
            }

            if users.values().any(|u| u.email() == user.email()) {
                return Err(DomainError::conflict(format!(
                    "Email '{}' already exists",
                    user.email()
                )));
            }

            users.insert(id, user.clone());
            Ok(user)
        }

        async fn list(&self) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().cloned().collect())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn create_test_user(id: i64, username: &str, email: &str) -> User {
            User::new(UserId::new(id), username, "Test User", email, "hash")
        }

        #[tokio::test]
        async fn test_create_and_get() {
            let repo = MockUserRepository::new();
            let user = create_test_user(1, "100001", "one@example.com");

            repo.create(user.clone()).await.unwrap();

            let retrieved = repo.get(user.id()).await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().username(), "100001");
        }

        #[tokio::test]
        async fn test_get_by_username_and_email() {
            let repo = MockUserRepository::new();
            repo.create(create_test_user(1, "100001", "one@example.com"))
                .await
                .unwrap();

            assert!(repo.get_by_username("100001").await.unwrap().is_some());
            assert!(repo.get_by_email("one@example.com").await.unwrap().is_some());
            assert!(repo.get_by_username("999999").await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_duplicate_id_conflicts() {
            let repo = MockUserRepository::new();
            repo.create(create_test_user(1, "100001", "one@example.com"))
                .await
                .unwrap();

            let result = repo
                .create(create_test_user(1, "100002", "two@example.com"))
                .await;
            assert!(matches!(result, Err(DomainError::Conflict { .. })));
        }

        #[tokio::test]
        async fn test_duplicate_email_conflicts() {
            let repo = MockUserRepository::new();
            repo.create(create_test_user(1, "100001", "one@example.com"))
                .await
                .unwrap();

            let result = repo
                .create(create_test_user(2, "100002", "one@example.com"))
                .await;
            assert!(matches!(result, Err(DomainError::Conflict { .. })));
        }

        #[tokio::test]
        async fn test_list_ordered_by_id() {
            let repo = MockUserRepository::new();
            repo.create(create_test_user(2, "100002", "two@example.com"))
                .await
                .unwrap();
            repo.create(create_test_user(1, "100001", "one@example.com"))
                .await
                .unwrap();

            let users = repo.list().await.unwrap();
            let ids: Vec<i64> = users.iter().map(|u| u.id().value()).collect();
            assert_eq!(ids, vec![1, 2]);
        }
    }
}

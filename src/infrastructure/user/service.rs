//! User provisioning service

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::event::{EventPublisher, UserCreated};
use crate::domain::user::{
    User, UserId, UserRepository, validate_email, validate_password, validate_username,
};

use super::password::PasswordHasher;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub email_verified: bool,
}

/// Creation path for users: validate, hash, insert, then publish.
///
/// The `UserCreated` event is published synchronously after the row commits,
/// once per created user. The publisher is injected so tests can observe or
/// silence it.
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher, P: EventPublisher> {
    repository: Arc<R>,
    hasher: Arc<H>,
    publisher: Arc<P>,
}

impl<R: UserRepository, H: PasswordHasher, P: EventPublisher> UserService<R, H, P> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>, publisher: Arc<P>) -> Self {
        Self {
            repository,
            hasher,
            publisher,
        }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_username(&request.username)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.username_exists(&request.username).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let mut user = User::new(
            UserId::new(request.id),
            &request.username,
            &request.name,
            &request.email,
            password_hash,
        );

        if request.email_verified {
            user.mark_email_verified();
        }

        let user = self.repository.create(user).await?;

        self.publisher.publish(UserCreated::new(user.clone())).await;

        Ok(user)
    }

    /// Get a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repository.get_by_username(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::mock::RecordingPublisher;
    use crate::domain::user::mock::MockUserRepository;
    use crate::infrastructure::user::password::Argon2Hasher;

    fn request(id: i64, username: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            id,
            username: username.to_string(),
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            email_verified: true,
        }
    }

    fn service() -> UserService<MockUserRepository, Argon2Hasher, RecordingPublisher> {
        UserService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(Argon2Hasher::new()),
            Arc::new(RecordingPublisher::new()),
        )
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let service = service();

        let user = service
            .create(request(1, "100001", "one@example.com"))
            .await
            .unwrap();

        assert_ne!(user.password_hash(), "secret");
        assert!(!user.password_hash().contains("secret"));
        assert!(service.hasher.verify("secret", user.password_hash()));
        assert!(user.is_email_verified());
    }

    #[tokio::test]
    async fn test_create_publishes_exactly_one_event() {
        let service = service();

        service
            .create(request(1, "100001", "one@example.com"))
            .await
            .unwrap();

        let events = service.publisher.events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].user.username(), "100001");
    }

    #[tokio::test]
    async fn test_events_observed_in_creation_order() {
        let service = service();

        for (id, username) in [(1, "100001"), (2, "100002"), (3, "100003")] {
            service
                .create(request(id, username, &format!("{}@example.com", username)))
                .await
                .unwrap();
        }

        assert_eq!(
            service.publisher.usernames().await,
            vec!["100001", "100002", "100003"]
        );
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected_without_event() {
        let service = service();

        service
            .create(request(1, "100001", "one@example.com"))
            .await
            .unwrap();
        let result = service.create(request(2, "100001", "two@example.com")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(service.publisher.events().await.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_username_rejected() {
        let service = service();

        let result = service.create(request(1, "not-numeric", "one@example.com")).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.publisher.events().await.is_empty());
    }
}

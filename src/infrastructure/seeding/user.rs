//! User table seeder

use std::sync::Arc;

use async_trait::async_trait;

use super::{SeedReport, Seeder};
use crate::domain::DomainError;
use crate::domain::event::EventPublisher;
use crate::domain::user::UserRepository;
use crate::infrastructure::user::{CreateUserRequest, PasswordHasher, UserService};

/// One fixed provisioning record
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub id: i64,
    pub username: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

/// The fixed provisioning accounts
pub fn default_users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            id: 1,
            username: "100001",
            name: "Super Admin",
            email: "super@example.com",
            password: "secret",
        },
        SeedUser {
            id: 2,
            username: "100002",
            name: "Admin Istrator",
            email: "admin@example.com",
            password: "secret",
        },
        SeedUser {
            id: 3,
            username: "100003",
            name: "Manager User",
            email: "manager@example.com",
            password: "secret",
        },
        SeedUser {
            id: 4,
            username: "100004",
            name: "Executive User",
            email: "executive@example.com",
            password: "secret",
        },
        SeedUser {
            id: 5,
            username: "100005",
            name: "General User",
            email: "user@example.com",
            password: "secret",
        },
    ]
}

/// Seeds the fixed user accounts through the provisioning service, so each
/// row is hashed, committed and announced exactly like any other creation.
pub struct UserSeeder<R: UserRepository, H: PasswordHasher, P: EventPublisher> {
    service: Arc<UserService<R, H, P>>,
}

impl<R: UserRepository, H: PasswordHasher, P: EventPublisher> UserSeeder<R, H, P> {
    pub fn new(service: Arc<UserService<R, H, P>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: UserRepository, H: PasswordHasher, P: EventPublisher> Seeder for UserSeeder<R, H, P> {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn run(&self) -> Result<SeedReport, DomainError> {
        let mut created = 0;

        for seed in default_users() {
            self.service
                .create(CreateUserRequest {
                    id: seed.id,
                    username: seed.username.to_string(),
                    name: seed.name.to_string(),
                    email: seed.email.to_string(),
                    password: seed.password.to_string(),
                    email_verified: true,
                })
                .await?;

            created += 1;
        }

        Ok(SeedReport {
            seeder: self.name(),
            created,
        })
    }
}

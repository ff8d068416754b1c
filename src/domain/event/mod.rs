//! Domain events
//!
//! Events are published after a successful commit and consumed by whatever
//! listeners the hosting application wires up. Delivery is best-effort,
//! at-most-once; publishers never fail the operation that emitted the event.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::user::User;

/// Published after a user row has been committed
#[derive(Debug, Clone, Serialize)]
pub struct UserCreated {
    pub user: User,
    pub occurred_at: DateTime<Utc>,
}

impl UserCreated {
    pub fn new(user: User) -> Self {
        Self {
            user,
            occurred_at: Utc::now(),
        }
    }
}

/// Fire-and-forget event publisher.
///
/// Injected into the creation path so tests can substitute a recording
/// publisher and wiring code can choose what actually listens.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: UserCreated);
}

/// Publisher that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPublisher;

#[async_trait]
impl EventPublisher for NullPublisher {
    async fn publish(&self, _event: UserCreated) {}
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Publisher that records every event for assertions
    #[derive(Debug, Default)]
    pub struct RecordingPublisher {
        events: Arc<Mutex<Vec<UserCreated>>>,
    }

    impl RecordingPublisher {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn events(&self) -> Vec<UserCreated> {
            self.events.lock().await.clone()
        }

        pub async fn usernames(&self) -> Vec<String> {
            self.events
                .lock()
                .await
                .iter()
                .map(|e| e.user.username().to_string())
                .collect()
        }
    }

    #[async_trait]
    impl EventPublisher for RecordingPublisher {
        async fn publish(&self, event: UserCreated) {
            self.events.lock().await.push(event);
        }
    }
}

//! In-process event dispatch
//!
//! The publisher walks its listener registry in order and keeps going when a
//! listener fails; delivery is best-effort, at-most-once. Anything needing
//! stronger guarantees belongs on a real bus outside this core.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::DomainError;
use crate::domain::event::{EventPublisher, UserCreated};
use std::sync::Arc;

/// A subscriber interested in `UserCreated` events
#[async_trait]
pub trait EventListener: Send + Sync {
    fn name(&self) -> &'static str;

    async fn handle(&self, event: &UserCreated) -> Result<(), DomainError>;
}

/// Publisher dispatching serially to registered listeners
#[derive(Default)]
pub struct ListenerEventPublisher {
    listeners: Vec<Arc<dyn EventListener>>,
}

impl ListenerEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(mut self, listener: Arc<dyn EventListener>) -> Self {
        self.listeners.push(listener);
        self
    }
}

#[async_trait]
impl EventPublisher for ListenerEventPublisher {
    async fn publish(&self, event: UserCreated) {
        for listener in &self.listeners {
            if let Err(e) = listener.handle(&event).await {
                warn!(
                    listener = listener.name(),
                    username = event.user.username(),
                    error = %e,
                    "Event listener failed"
                );
            }
        }
    }
}

/// Stand-in for the welcome-email sender: records the notification in the
/// log. Actual mail delivery is wired up by the hosting application.
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomeMessageListener;

#[async_trait]
impl EventListener for WelcomeMessageListener {
    fn name(&self) -> &'static str {
        "welcome-message"
    }

    async fn handle(&self, event: &UserCreated) -> Result<(), DomainError> {
        debug!(
            username = event.user.username(),
            email = event.user.email(),
            "Queueing welcome message for new user"
        );
        Ok(())
    }
}

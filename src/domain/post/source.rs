//! Legacy post source interface
//!
//! The old website exposes posts as a read-only, paginated feed. This
//! module defines the shape of that feed; the HTTP implementation lives in
//! the infrastructure layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single post record as the legacy source exposes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyPostRecord {
    /// Stable identifier on the legacy side
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// One page of the legacy feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyPage {
    pub posts: Vec<LegacyPostRecord>,
    /// Next page number, or None when this is the last page
    #[serde(default)]
    pub next_page: Option<u32>,
}

/// Read-only, paginated access to the legacy post source
#[async_trait]
pub trait LegacyPostSource: Send + Sync {
    /// Fetch one page of the feed. Pages start at 1.
    async fn fetch_page(&self, page: u32) -> Result<LegacyPage, DomainError>;
}

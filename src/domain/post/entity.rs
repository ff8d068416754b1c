//! Post entity and import payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::source::LegacyPostRecord;
use crate::domain::DomainError;
use crate::domain::category::slugify;

/// Post identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(Uuid);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Insert payload for a post migrated from the legacy source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    legacy_id: i64,
    title: String,
    slug: String,
    content: String,
    published_at: Option<DateTime<Utc>>,
}

impl NewPost {
    /// Map a legacy record into an insert payload.
    ///
    /// A record with a blank title is malformed; the importer counts it as
    /// failed and moves on.
    pub fn from_legacy(record: LegacyPostRecord) -> Result<Self, DomainError> {
        let title = record.title.trim().to_string();

        if title.is_empty() {
            return Err(DomainError::validation(format!(
                "Legacy post {} has an empty title",
                record.id
            )));
        }

        let slug = slugify(&title);

        if slug.is_empty() {
            return Err(DomainError::validation(format!(
                "Legacy post {} title does not produce a valid slug",
                record.id
            )));
        }

        Ok(Self {
            legacy_id: record.id,
            title,
            slug,
            content: record.content,
            published_at: record.published_at,
        })
    }

    /// Stable identifier on the legacy side; the idempotency key
    pub fn legacy_id(&self) -> i64 {
        self.legacy_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }
}

/// Persisted post row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    legacy_id: i64,
    title: String,
    slug: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Post {
    /// Rehydrate a post from storage
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: PostId,
        legacy_id: i64,
        title: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
        published_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            legacy_id,
            title: title.into(),
            slug: slug.into(),
            content: content.into(),
            published_at,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn legacy_id(&self) -> i64 {
        self.legacy_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

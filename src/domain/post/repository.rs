//! Post repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewPost, Post, PostId};
use crate::domain::DomainError;

/// Repository trait for post storage
#[async_trait]
pub trait PostRepository: Send + Sync + Debug {
    /// Insert a post unless one with the same legacy id already exists.
    ///
    /// Returns the created post, or None when the legacy id was already
    /// present. This is the idempotency guarantee the importer relies on.
    async fn create_if_absent(&self, new: &NewPost) -> Result<Option<Post>, DomainError>;

    /// Get a post by its ID
    async fn get(&self, id: PostId) -> Result<Option<Post>, DomainError>;

    /// Get a post by its legacy id
    async fn get_by_legacy_id(&self, legacy_id: i64) -> Result<Option<Post>, DomainError>;

    /// Count all posts
    async fn count(&self) -> Result<usize, DomainError>;
}

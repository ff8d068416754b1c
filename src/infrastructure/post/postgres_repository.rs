//! PostgreSQL post repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::post::{NewPost, Post, PostId, PostRepository};

/// PostgreSQL implementation of PostRepository
#[derive(Debug, Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_if_absent(&self, new: &NewPost) -> Result<Option<Post>, DomainError> {
        // ON CONFLICT DO NOTHING keyed on legacy_id makes re-imports idempotent
        let row = sqlx::query(
            r#"
            INSERT INTO posts (id, legacy_id, title, slug, content, published_at,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            ON CONFLICT (legacy_id) DO NOTHING
            RETURNING id, legacy_id, title, slug, content, published_at, created_at, updated_at
            "#,
        )
        .bind(PostId::generate().as_uuid())
        .bind(new.legacy_id())
        .bind(new.title())
        .bind(new.slug())
        .bind(new.content())
        .bind(new.published_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create post: {}", e)))?;

        row.map(|row| row_to_post(&row)).transpose()
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query(
            "SELECT id, legacy_id, title, slug, content, published_at, created_at, updated_at \
             FROM posts WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get post: {}", e)))?;

        row.map(|row| row_to_post(&row)).transpose()
    }

    async fn get_by_legacy_id(&self, legacy_id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query(
            "SELECT id, legacy_id, title, slug, content, published_at, created_at, updated_at \
             FROM posts WHERE legacy_id = $1",
        )
        .bind(legacy_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get post by legacy id: {}", e)))?;

        row.map(|row| row_to_post(&row)).transpose()
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count posts: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_post(row: &sqlx::postgres::PgRow) -> Result<Post, DomainError> {
    let id: Uuid = row.get("id");
    let legacy_id: i64 = row.get("legacy_id");
    let title: String = row.get("title");
    let slug: String = row.get("slug");
    let content: String = row.get("content");
    let published_at: Option<chrono::DateTime<chrono::Utc>> = row.get("published_at");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    Ok(Post::restore(
        PostId::from_uuid(id),
        legacy_id,
        title,
        slug,
        content,
        published_at,
        created_at,
        updated_at,
    ))
}

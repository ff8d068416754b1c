//! PostgreSQL category repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::category::{
    Category, CategoryId, CategoryRepository, CategoryStatus, NewCategory,
};

/// PostgreSQL implementation of CategoryRepository
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, new: &NewCategory) -> Result<Category, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO categories (name, slug, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, name, slug, description, status, created_at, updated_at
            "#,
        )
        .bind(new.name())
        .bind(new.slug())
        .bind(new.description())
        .bind(new.status().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("Category '{}' already exists", new.name()))
            } else {
                DomainError::storage(format!("Failed to create category: {}", e))
            }
        })?;

        row_to_category(&row)
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, slug, description, status, created_at, updated_at \
             FROM categories WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get category: {}", e)))?;

        row.map(|row| row_to_category(&row)).transpose()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, slug, description, status, created_at, updated_at \
             FROM categories WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get category by slug: {}", e)))?;

        row.map(|row| row_to_category(&row)).transpose()
    }

    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, name, slug, description, status, created_at, updated_at \
             FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list categories: {}", e)))?;

        rows.iter().map(row_to_category).collect()
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count categories: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_category(row: &sqlx::postgres::PgRow) -> Result<Category, DomainError> {
    let id: i64 = row.get("id");
    let name: String = row.get("name");
    let slug: String = row.get("slug");
    let description: String = row.get("description");
    let status: String = row.get("status");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let status = CategoryStatus::parse(&status)
        .map_err(|e| DomainError::storage(format!("Invalid status in database: {}", e)))?;

    Ok(Category::restore(
        CategoryId::new(id),
        name,
        slug,
        description,
        status,
        created_at,
        updated_at,
    ))
}

//! Category repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Category, CategoryId, NewCategory};
use crate::domain::DomainError;

/// Repository trait for category storage
#[async_trait]
pub trait CategoryRepository: Send + Sync + Debug {
    /// Insert a new category; the store assigns id and timestamps
    async fn create(&self, new: &NewCategory) -> Result<Category, DomainError>;

    /// Get a category by its ID
    async fn get(&self, id: CategoryId) -> Result<Option<Category>, DomainError>;

    /// Get a category by its slug
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError>;

    /// List all categories in insertion order
    async fn list(&self) -> Result<Vec<Category>, DomainError>;

    /// Count all categories
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock category repository for testing
    #[derive(Debug, Default)]
    pub struct MockCategoryRepository {
        categories: Arc<RwLock<Vec<Category>>>,
        fail_after: Arc<RwLock<Option<usize>>>,
    }

    impl MockCategoryRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make `create` fail once the store holds this many rows
        pub async fn set_fail_after(&self, count: usize) {
            *self.fail_after.write().await = Some(count);
        }
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepository {
        async fn create(&self, new: &NewCategory) -> Result<Category, DomainError> {
            let mut categories = self.categories.write().await;

            if let Some(limit) = *self.fail_after.read().await {
                if categories.len() >= limit {
                    return Err(DomainError::storage("Mock repository configured to fail"));
                }
            }

            if categories.iter().any(|c| c.name() == new.name()) {
                return Err(DomainError::conflict(format!(
                    "Category '{}' already exists",
                    new.name()
                )));
            }

            let now = Utc::now();
            let category = Category::restore(
                CategoryId::new(categories.len() as i64 + 1),
                new.name(),
                new.slug(),
                new.description(),
                new.status(),
                now,
                now,
            );

            categories.push(category.clone());
            Ok(category)
        }

        async fn get(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
            let categories = self.categories.read().await;
            Ok(categories.iter().find(|c| c.id() == id).cloned())
        }

        async fn get_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
            let categories = self.categories.read().await;
            Ok(categories.iter().find(|c| c.slug() == slug).cloned())
        }

        async fn list(&self) -> Result<Vec<Category>, DomainError> {
            let categories = self.categories.read().await;
            Ok(categories.clone())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            let categories = self.categories.read().await;
            Ok(categories.len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::CategoryStatus;

        #[tokio::test]
        async fn test_create_and_get() {
            let repo = MockCategoryRepository::new();
            let new = NewCategory::new("Books", "printed things", CategoryStatus::Active).unwrap();

            let created = repo.create(&new).await.unwrap();

            let retrieved = repo.get(created.id()).await.unwrap().unwrap();
            assert_eq!(retrieved.name(), "Books");
            assert_eq!(retrieved.slug(), "books");
        }

        #[tokio::test]
        async fn test_get_by_slug() {
            let repo = MockCategoryRepository::new();
            let new = NewCategory::new("Source Code", "repos", CategoryStatus::Pending).unwrap();
            repo.create(&new).await.unwrap();

            let retrieved = repo.get_by_slug("source-code").await.unwrap();
            assert!(retrieved.is_some());
        }

        #[tokio::test]
        async fn test_duplicate_name_conflicts() {
            let repo = MockCategoryRepository::new();
            let new = NewCategory::new("Books", "a", CategoryStatus::Active).unwrap();

            repo.create(&new).await.unwrap();
            let result = repo.create(&new).await;

            assert!(matches!(result, Err(DomainError::Conflict { .. })));
        }

        #[tokio::test]
        async fn test_count() {
            let repo = MockCategoryRepository::new();

            for name in ["Books", "Courses"] {
                let new = NewCategory::new(name, "x", CategoryStatus::Active).unwrap();
                repo.create(&new).await.unwrap();
            }

            assert_eq!(repo.count().await.unwrap(), 2);
        }
    }
}

//! Category entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slug::slugify;
use crate::domain::DomainError;

/// Database-assigned category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(i64);

impl CategoryId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl CategoryStatus {
    /// The closed set of permissible statuses
    pub const ALL: [CategoryStatus; 3] = [Self::Active, Self::Inactive, Self::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    /// Parse a stored status string
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            other => Err(DomainError::validation(format!(
                "Unknown category status '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insert payload for a category; the store assigns id and timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    name: String,
    slug: String,
    description: String,
    status: CategoryStatus,
}

impl NewCategory {
    /// Create a new category payload.
    ///
    /// The slug is derived from the name here, as an explicit step. The
    /// name must be non-empty and must produce a non-empty slug.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: CategoryStatus,
    ) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("Category name cannot be empty"));
        }

        let slug = slugify(&name);

        if slug.is_empty() {
            return Err(DomainError::validation(format!(
                "Category name '{}' does not produce a valid slug",
                name
            )));
        }

        Ok(Self {
            name,
            slug,
            description: description.into(),
            status,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> CategoryStatus {
        self.status
    }
}

/// Persisted category row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    slug: String,
    description: String,
    status: CategoryStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Category {
    /// Rehydrate a category from storage
    pub fn restore(
        id: CategoryId,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        status: CategoryStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> CategoryStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Update the status
    pub fn set_status(&mut self, status: CategoryStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

//! Database seeders
//!
//! Seeders populate a fresh store with baseline rows. They run once at
//! provisioning time, sequentially; they are not safe to run concurrently
//! against the same store (fixed primary keys, store-global integrity
//! toggling).

mod category;
mod integrity;
mod user;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::DomainError;

pub use category::{CATEGORY_NAMES, CategorySeeder};
pub use integrity::{IntegrityControl, PgIntegrityControl, with_checks_disabled};
pub use user::{SeedUser, UserSeeder, default_users};

#[cfg(test)]
pub use integrity::mock as integrity_mock;

/// Result of one seeder run
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub seeder: &'static str,
    pub created: usize,
}

/// A one-time data-population routine
#[async_trait]
pub trait Seeder: Send + Sync {
    fn name(&self) -> &'static str;

    /// Run the seeder. Aborts on the first row failure: seed data is meant
    /// to be deterministic and complete, so partial runs are treated as
    /// provisioning errors rather than papered over.
    async fn run(&self) -> Result<SeedReport, DomainError>;
}

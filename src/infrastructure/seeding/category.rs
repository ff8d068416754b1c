//! Category seeder

use std::sync::Arc;

use async_trait::async_trait;
use fake::Fake;
use fake::faker::lorem::en::Paragraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::integrity::{IntegrityControl, with_checks_disabled};
use super::{SeedReport, Seeder};
use crate::domain::DomainError;
use crate::domain::category::{CategoryRepository, CategoryStatus, NewCategory};

/// The fixed, ordered set of baseline categories
pub const CATEGORY_NAMES: [&str; 5] =
    ["Books", "Courses", "Podcasts", "Conferences", "Source Code"];

/// Seeds the five baseline categories.
///
/// Statuses are fixture data drawn from the status set with the seeder's
/// RNG; pass a fixed seed for a reproducible run. The bulk insert happens
/// with integrity checks disabled and restored around it.
pub struct CategorySeeder<R: CategoryRepository, C: IntegrityControl> {
    repository: Arc<R>,
    integrity: C,
    rng_seed: Option<u64>,
}

impl<R: CategoryRepository, C: IntegrityControl> CategorySeeder<R, C> {
    pub fn new(repository: Arc<R>, integrity: C) -> Self {
        Self {
            repository,
            integrity,
            rng_seed: None,
        }
    }

    /// Fix the RNG seed so repeated runs pick the same statuses
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Build the insert payloads for all baseline categories
pub fn build_categories<R: Rng>(rng: &mut R) -> Result<Vec<NewCategory>, DomainError> {
    CATEGORY_NAMES
        .iter()
        .map(|name| {
            let status =
                CategoryStatus::ALL[rng.random_range(0..CategoryStatus::ALL.len())];
            let description: String = Paragraph(1..3).fake_with_rng(rng);

            NewCategory::new(*name, description, status)
        })
        .collect()
}

#[async_trait]
impl<R: CategoryRepository, C: IntegrityControl> Seeder for CategorySeeder<R, C> {
    fn name(&self) -> &'static str {
        "categories"
    }

    async fn run(&self) -> Result<SeedReport, DomainError> {
        let mut rng = self.rng();
        let categories = build_categories(&mut rng)?;

        let created = with_checks_disabled(&self.integrity, || async {
            let mut created = 0;

            for category in &categories {
                self.repository.create(category).await?;
                created += 1;
            }

            Ok(created)
        })
        .await?;

        Ok(SeedReport {
            seeder: self.name(),
            created,
        })
    }
}

//! Seed command - populates the database with baseline rows

use std::sync::Arc;

use clap::{Args, ValueEnum};
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::category::PostgresCategoryRepository;
use crate::infrastructure::event::{ListenerEventPublisher, WelcomeMessageListener};
use crate::infrastructure::seeding::{
    CategorySeeder, PgIntegrityControl, Seeder, UserSeeder,
};
use crate::infrastructure::user::{Argon2Hasher, PostgresUserRepository, UserService};
use crate::infrastructure::{db, logging};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Run only one seeder
    #[arg(long, value_enum)]
    pub only: Option<SeedTarget>,

    /// Fix the RNG seed so fixture data is reproducible
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedTarget {
    Categories,
    Users,
}

impl SeedArgs {
    fn runs(&self, target: SeedTarget) -> bool {
        self.only.is_none_or(|only| only == target)
    }
}

/// Run the seeders sequentially.
///
/// Seeding is a provisioning-time operation; it must not run concurrently
/// with other writers against the same database.
pub async fn run(args: SeedArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    let mut seeders: Vec<Box<dyn Seeder>> = Vec::new();

    if args.runs(SeedTarget::Categories) {
        let repository = Arc::new(PostgresCategoryRepository::new(pool.clone()));
        let integrity = PgIntegrityControl::new(pool.clone(), vec!["categories"]);

        let mut seeder = CategorySeeder::new(repository, integrity);
        if let Some(seed) = args.seed {
            seeder = seeder.with_rng_seed(seed);
        }

        seeders.push(Box::new(seeder));
    }

    if args.runs(SeedTarget::Users) {
        let repository = Arc::new(PostgresUserRepository::new(pool.clone()));
        let publisher = Arc::new(
            ListenerEventPublisher::new().with_listener(Arc::new(WelcomeMessageListener)),
        );
        let service = Arc::new(UserService::new(
            repository,
            Arc::new(Argon2Hasher::new()),
            publisher,
        ));

        seeders.push(Box::new(UserSeeder::new(service)));
    }

    for seeder in seeders {
        let report = seeder.run().await?;
        info!(
            seeder = report.seeder,
            created = report.created,
            "Seeder finished"
        );
    }

    Ok(())
}

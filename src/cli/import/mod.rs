//! Post import command (`post:import`)
//!
//! With no legacy source configured this succeeds without processing any
//! records. With `import.source_url` set it walks the legacy feed and
//! upserts posts keyed on their legacy id, so re-runs never duplicate.

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::post::{HttpLegacyPostSource, PostImporter, PostgresPostRepository};
use crate::infrastructure::{db, logging};

/// Run the post import
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let Some(source_url) = config.import.source_url else {
        info!("No legacy source configured; nothing to import");
        return Ok(());
    };

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    let source = Arc::new(HttpLegacyPostSource::new(
        source_url,
        config.import.page_size,
    )?);
    let repository = Arc::new(PostgresPostRepository::new(pool));

    PostImporter::new(source, repository).run().await?;

    Ok(())
}

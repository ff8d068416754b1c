//! Post importer - migrates posts from the legacy source

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::DomainError;
use crate::domain::post::{LegacyPostSource, NewPost, PostRepository};

/// Structured result of an import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    /// Records inserted during this run
    pub imported: usize,
    /// Records already present (idempotent re-import)
    pub skipped: usize,
    /// Malformed records and per-record storage failures
    pub failed: usize,
}

impl ImportOutcome {
    pub fn total_processed(&self) -> usize {
        self.imported + self.skipped + self.failed
    }
}

/// Walks the legacy feed page by page and upserts posts keyed on legacy id.
///
/// Connectivity failures abort the run; malformed records are counted and
/// skipped so one bad row cannot sink an entire migration.
pub struct PostImporter<S: LegacyPostSource, R: PostRepository> {
    source: Arc<S>,
    repository: Arc<R>,
}

impl<S: LegacyPostSource, R: PostRepository> PostImporter<S, R> {
    pub fn new(source: Arc<S>, repository: Arc<R>) -> Self {
        Self { source, repository }
    }

    pub async fn run(&self) -> Result<ImportOutcome, DomainError> {
        let mut outcome = ImportOutcome::default();
        let mut page = Some(1u32);

        while let Some(current) = page {
            let batch = self.source.fetch_page(current).await?;

            if batch.next_page == Some(current) {
                return Err(DomainError::source(format!(
                    "Legacy paginator did not advance past page {}",
                    current
                )));
            }

            for record in batch.posts {
                let legacy_id = record.id;

                match NewPost::from_legacy(record) {
                    Ok(new_post) => match self.repository.create_if_absent(&new_post).await {
                        Ok(Some(_)) => outcome.imported += 1,
                        Ok(None) => outcome.skipped += 1,
                        Err(e) => {
                            warn!(legacy_id, error = %e, "Failed to store imported post");
                            outcome.failed += 1;
                        }
                    },
                    Err(e) => {
                        warn!(legacy_id, error = %e, "Skipping malformed legacy record");
                        outcome.failed += 1;
                    }
                }
            }

            page = batch.next_page;
        }

        info!(
            imported = outcome.imported,
            skipped = outcome.skipped,
            failed = outcome.failed,
            "Post import finished"
        );

        Ok(outcome)
    }
}

//! Scoped referential-integrity toggling for bulk seeding
//!
//! Disabling checks is a store-global change: nothing else may write while a
//! seed run holds it. `with_checks_disabled` is the only entry point and it
//! restores enforcement on every exit path.

use async_trait::async_trait;
use sqlx::PgPool;
use std::future::Future;
use tracing::warn;

use crate::domain::DomainError;

/// Store-global switch for referential-integrity enforcement
#[async_trait]
pub trait IntegrityControl: Send + Sync {
    async fn disable(&self) -> Result<(), DomainError>;

    async fn restore(&self) -> Result<(), DomainError>;
}

/// Run `op` with integrity checks disabled, restoring them afterwards.
///
/// Restoration runs whether `op` succeeds or fails. When both `op` and the
/// restore fail, the operation error wins and the restore failure is logged.
pub async fn with_checks_disabled<C, F, Fut, T>(control: &C, op: F) -> Result<T, DomainError>
where
    C: IntegrityControl + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, DomainError>>,
{
    control.disable().await?;

    let result = op().await;
    let restored = control.restore().await;

    match (result, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(restore_err)) => Err(restore_err),
        (Err(op_err), Ok(())) => Err(op_err),
        (Err(op_err), Err(restore_err)) => {
            warn!(error = %restore_err, "Failed to restore integrity checks after seed error");
            Err(op_err)
        }
    }
}

/// Postgres implementation toggling FK-enforcement triggers table by table.
///
/// `DISABLE TRIGGER ALL` is visible to every session, which is what makes a
/// concurrent writer unsafe during a seed run.
pub struct PgIntegrityControl {
    pool: PgPool,
    tables: Vec<&'static str>,
}

impl PgIntegrityControl {
    pub fn new(pool: PgPool, tables: Vec<&'static str>) -> Self {
        Self { pool, tables }
    }
}

#[async_trait]
impl IntegrityControl for PgIntegrityControl {
    async fn disable(&self) -> Result<(), DomainError> {
        for table in &self.tables {
            sqlx::query(&format!("ALTER TABLE {} DISABLE TRIGGER ALL", table))
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!(
                        "Failed to disable integrity checks on '{}': {}",
                        table, e
                    ))
                })?;
        }

        Ok(())
    }

    async fn restore(&self) -> Result<(), DomainError> {
        for table in self.tables.iter().rev() {
            sqlx::query(&format!("ALTER TABLE {} ENABLE TRIGGER ALL", table))
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!(
                        "Failed to restore integrity checks on '{}': {}",
                        table, e
                    ))
                })?;
        }

        Ok(())
    }
}

//! Versioned schema migrations
//!
//! Each step in `MIGRATIONS` runs in its own transaction and is recorded in
//! `schema_migrations` with a SHA-256 of its SQL. Steps already recorded are
//! skipped; a changed checksum is only warned about.

use std::collections::HashMap;
use std::time::Instant;

use sqlx::SqlitePool;

use super::error::SqliteError;
use super::schema::{MIGRATIONS, MIGRATIONS_TABLE, Migration};
use crate::utils::crypto::sha256_hex;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteError> {
    sqlx::query(MIGRATIONS_TABLE).execute(pool).await?;

    let applied: HashMap<i32, String> =
        sqlx::query_as::<_, (i32, String)>("SELECT version, checksum FROM schema_migrations")
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect();

    let mut ran = 0;
    for migration in MIGRATIONS {
        let checksum = sha256_hex(migration.sql);
        match applied.get(&migration.version) {
            Some(recorded) if *recorded != checksum => tracing::warn!(
                version = migration.version,
                name = migration.name,
                "Applied migration no longer matches its recorded checksum"
            ),
            Some(_) => {}
            None => {
                apply(pool, migration, &checksum).await?;
                ran += 1;
            }
        }
    }

    tracing::debug!(applied = ran, total = MIGRATIONS.len(), "Schema migrations checked");
    Ok(())
}

async fn apply(pool: &SqlitePool, migration: &Migration, checksum: &str) -> Result<(), SqliteError> {
    let started = Instant::now();
    let failed = |e: sqlx::Error| SqliteError::MigrationFailed {
        version: migration.version,
        name: migration.name.to_string(),
        error: e.to_string(),
    };

    let mut tx = pool.begin().await?;
    sqlx::query(migration.sql)
        .execute(&mut *tx)
        .await
        .map_err(failed)?;

    let elapsed_ms = started.elapsed().as_millis() as i64;
    sqlx::query(
        "INSERT INTO schema_migrations (version, name, applied_at, checksum, execution_time_ms) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(migration.version)
    .bind(migration.name)
    .bind(chrono::Utc::now().timestamp_millis())
    .bind(checksum)
    .bind(elapsed_ms)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    tracing::debug!(
        version = migration.version,
        name = migration.name,
        elapsed_ms,
        "Applied migration"
    );
    Ok(())
}

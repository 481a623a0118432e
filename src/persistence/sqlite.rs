//! SQLite save store

use sqlx::SqlitePool;
use tracing::debug;

use super::{SaveRecord, SaveStore};
use crate::db::Database;
use crate::error::GameResult;

/// Save records persisted in the `saves` table
#[derive(Debug, Clone)]
pub struct SqliteSaveStore {
    pool: SqlitePool,
}

impl SqliteSaveStore {
    /// Create a store on an existing pool (schema must be migrated)
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `path` (in-memory when None) and wrap it
    pub async fn open(path: Option<&str>) -> GameResult<Self> {
        let db = Database::new(path).await?;
        Ok(Self::new(db.pool().clone()))
    }
}

impl SaveStore for SqliteSaveStore {
    async fn save(&self, record: &SaveRecord) -> GameResult<()> {
        let json = record.to_json()?;
        let now = chrono::Utc::now().to_rfc3339();

        // Single upsert statement: readers never see a half-written row
        sqlx::query(
            r#"
            INSERT INTO saves (name, version, record, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET
                version = excluded.version,
                record = excluded.record,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&record.name)
        .bind(record.version as i64)
        .bind(&json)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        debug!("Wrote save record for {}", record.name);
        Ok(())
    }

    async fn load(&self, name: &str) -> GameResult<Option<SaveRecord>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT record FROM saves WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some((json,)) => Ok(Some(SaveRecord::from_json(name, &json)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, name: &str) -> GameResult<bool> {
        let result = sqlx::query("DELETE FROM saves WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> GameResult<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT name FROM saves ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

use artikel_core::{CoreError, ProgressSet, ProgressStore};
use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Row, SqlitePool,
};
use std::path::Path;
use tracing::warn;

/// Name of the single entry holding the progress list.
pub const PROGRESS_ENTRY: &str = "correct_answers";

pub struct SqliteProgressStore {
    pool: SqlitePool,
}

impl SqliteProgressStore {
    pub async fn open_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let opts = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .map_err(|err| {
                warn!(error = %err, "sqlite connect failed");
                CoreError::Storage("sqlite connect")
            })?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn open_memory() -> Result<Self, CoreError> {
        // One connection: every in-memory connection is its own database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|_| CoreError::Storage("sqlite connect"))?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), CoreError> {
        const STMT: &str = r#"
        CREATE TABLE IF NOT EXISTS progress_entries (
          name        TEXT PRIMARY KEY,
          value       TEXT NOT NULL,
          updated_at  TEXT NOT NULL
        )
        "#;
        sqlx::query(STMT)
            .execute(&self.pool)
            .await
            .map_err(|_| CoreError::Storage("sqlite schema"))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProgressStore for SqliteProgressStore {
    async fn load(&self) -> Result<ProgressSet, CoreError> {
        let row = sqlx::query("SELECT value FROM progress_entries WHERE name=?")
            .bind(PROGRESS_ENTRY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| CoreError::Storage("read progress"))?;
        let Some(row) = row else {
            return Ok(ProgressSet::default());
        };
        let value: String = row.get("value");
        match serde_json::from_str::<ProgressSet>(&value) {
            Ok(p) => Ok(p),
            Err(err) => {
                warn!(error = %err, "unreadable progress entry, starting empty");
                Ok(ProgressSet::default())
            }
        }
    }

    async fn save(&self, progress: &ProgressSet) -> Result<(), CoreError> {
        let value =
            serde_json::to_string(progress).map_err(|_| CoreError::Storage("encode progress"))?;
        sqlx::query(
            "INSERT INTO progress_entries (name,value,updated_at) VALUES (?,?,?) \
             ON CONFLICT(name) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
        )
        .bind(PROGRESS_ENTRY)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|_| CoreError::Storage("write progress"))?;
        Ok(())
    }
}

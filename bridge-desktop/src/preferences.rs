//! Preference storage using SQLite

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::PreferenceStore,
};
use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Row,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::sync::OnceCell;
use tracing::debug;

/// Default location of the preference database for a storage namespace.
///
/// Returns `None` when the platform has no per-user data directory.
pub fn default_preferences_path(namespace: &str) -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(namespace).join("preferences.db"))
}

fn storage_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> BridgeError {
    move |e| BridgeError::Storage(format!("{context}: {e}"))
}

/// SQLite-backed preference store
///
/// Values are opaque strings stored under a single key column. The pool is
/// created lazily so the store can be built before any runtime exists; the
/// parent directory and table are created on first use.
pub struct SqlitePreferenceStore {
    pool: SqlitePool,
    path: Option<PathBuf>,
    schema: OnceCell<()>,
}

impl SqlitePreferenceStore {
    /// Prepare a store backed by `db_path` without touching the disk.
    pub fn open_lazy(db_path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        // No idle or lifetime limits, so no maintenance task needs a runtime.
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_lazy_with(options);

        Ok(Self {
            pool,
            path: Some(db_path.to_path_buf()),
            schema: OnceCell::new(),
        })
    }

    /// Open a store and create its table immediately.
    pub async fn open(db_path: &Path) -> Result<Self> {
        let store = Self::open_lazy(db_path)?;
        store.ensure_schema().await?;
        debug!(path = ?db_path, "Initialized preference store");
        Ok(store)
    }

    /// In-memory store (for testing)
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(storage_error("Invalid in-memory options"))?;

        // A single connection that is never recycled keeps the database alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(storage_error("Failed to open in-memory DB"))?;

        let store = Self {
            pool,
            path: None,
            schema: OnceCell::new(),
        };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.schema
            .get_or_try_init(|| async {
                if let Some(parent) = self.path.as_deref().and_then(Path::parent) {
                    tokio::fs::create_dir_all(parent).await?;
                }

                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS preferences (
                        key TEXT PRIMARY KEY,
                        value TEXT NOT NULL,
                        updated_at INTEGER NOT NULL
                    )
                    "#,
                )
                .execute(&self.pool)
                .await
                .map_err(storage_error("Failed to create table"))?;

                Ok::<(), BridgeError>(())
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_schema().await?;

        sqlx::query(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(storage_error("Failed to set preference"))?;

        debug!(key, "Stored preference");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.ensure_schema().await?;

        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to get preference"))?;

        Ok(row.map(|row| row.get(0)))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.ensure_schema().await?;

        sqlx::query("DELETE FROM preferences WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to remove preference"))?;

        debug!(key, "Removed preference");
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        self.ensure_schema().await?;

        let rows = sqlx::query("SELECT key FROM preferences ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("Failed to list keys"))?;

        Ok(rows.into_iter().map(|row| row.get(0)).collect())
    }

    async fn clear(&self) -> Result<()> {
        self.ensure_schema().await?;

        sqlx::query("DELETE FROM preferences")
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to clear preferences"))?;

        debug!("Cleared preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = SqlitePreferenceStore::in_memory().await.unwrap();

        assert_eq!(store.get("last_district").await.unwrap(), None);

        store.set("last_district", "Lobia").await.unwrap();
        assert_eq!(
            store.get("last_district").await.unwrap().as_deref(),
            Some("Lobia")
        );
        assert!(store.contains("last_district").await.unwrap());

        store.remove("last_district").await.unwrap();
        assert_eq!(store.get("last_district").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = SqlitePreferenceStore::in_memory().await.unwrap();

        store.set("theme", "light").await.unwrap();
        store.set("theme", "dark").await.unwrap();

        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
        assert_eq!(store.keys().await.unwrap(), vec!["theme".to_string()]);
    }

    #[tokio::test]
    async fn test_keys_sorted_and_clear() {
        let store = SqlitePreferenceStore::in_memory().await.unwrap();

        store.set("b", "2").await.unwrap();
        store.set("a", "1").await.unwrap();
        assert_eq!(store.keys().await.unwrap(), vec!["a", "b"]);

        store.clear().await.unwrap();
        assert!(store.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lazy_store_creates_directory_on_first_use() {
        let base = std::env::temp_dir().join(format!("prefs-{}", uuid::Uuid::new_v4()));
        let path = base.join("nested").join("preferences.db");

        let store = SqlitePreferenceStore::open_lazy(&path).unwrap();
        assert!(!path.exists());

        store.set("onboarded", "true").await.unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));

        drop(store);
        let reopened = SqlitePreferenceStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("onboarded").await.unwrap().as_deref(),
            Some("true")
        );

        drop(reopened);
        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn test_default_path_uses_namespace() {
        if let Some(path) = default_preferences_path("daloa-market") {
            assert!(path.ends_with("daloa-market/preferences.db"));
        }
    }
}

//! Key-value preference storage.

use crate::{error::Result, platform::PlatformSendSync};

/// Key-value preference storage trait
///
/// Abstracts platform-specific preferences storage:
/// - iOS: UserDefaults
/// - Android: SharedPreferences
/// - Desktop: SQLite file in the app data directory
/// - Web: localStorage
///
/// Values are opaque strings; callers own any encoding.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::PreferenceStore;
///
/// async fn remember_district(store: &dyn PreferenceStore) -> Result<()> {
///     store.set("last_district", "Lobia").await?;
///     Ok(())
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait PreferenceStore: PlatformSendSync {
    /// Store a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Retrieve a value
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Delete a value
    async fn remove(&self, key: &str) -> Result<()>;

    /// List all stored keys
    async fn keys(&self) -> Result<Vec<String>>;

    /// Remove every stored value
    async fn clear(&self) -> Result<()>;

    /// Check if a key exists
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

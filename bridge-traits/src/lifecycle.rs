//! App lifecycle notifications.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    platform::{PlatformSend, PlatformSendSync},
};

/// Events emitted by the shell about the application itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LifecycleEvent {
    /// The app moved to the foreground (`is_active`) or background.
    StateChanged { is_active: bool },
    /// The app was opened through a deep link or universal link.
    UrlOpened { url: String },
}

/// Lifecycle observer trait
///
/// # Platform Support
///
/// - **Native shell**: `appStateChange` and `appUrlOpen` listeners
/// - **Desktop**: always foreground, never emits
/// - **Web**: not available
///
/// # Example
///
/// ```ignore
/// use bridge_traits::lifecycle::{AppLifecycle, LifecycleEvent};
///
/// async fn watch(lifecycle: &dyn AppLifecycle) -> Result<()> {
///     let mut stream = lifecycle.subscribe().await?;
///     while let Some(event) = stream.next().await {
///         if let LifecycleEvent::UrlOpened { url } = event {
///             route_to(url);
///         }
///     }
///     Ok(())
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait AppLifecycle: PlatformSendSync {
    /// Register listeners for both lifecycle events
    async fn subscribe(&self) -> Result<Box<dyn LifecycleEventStream>>;
}

/// Stream of lifecycle events
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait LifecycleEventStream: PlatformSend {
    /// Returns `None` when the stream is closed.
    async fn next(&mut self) -> Option<LifecycleEvent>;
}

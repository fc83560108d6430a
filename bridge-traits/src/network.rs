//! Network Monitoring Abstraction
//!
//! Provides the current connectivity snapshot and a stream of changes.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    platform::{PlatformSend, PlatformSendSync},
};

/// Network connection type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// WiFi connection
    Wifi,
    /// Cellular/mobile data connection
    Cellular,
    /// No connection at all
    None,
    /// Connected, but the medium cannot be determined
    #[default]
    Unknown,
}

/// Connectivity snapshot.
///
/// Each update fully replaces the previous one; nothing is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub connected: bool,
    pub connection_type: ConnectionType,
}

impl NetworkStatus {
    pub fn online(connection_type: ConnectionType) -> Self {
        Self {
            connected: true,
            connection_type,
        }
    }

    pub fn offline() -> Self {
        Self {
            connected: false,
            connection_type: ConnectionType::None,
        }
    }
}

/// Network monitor trait
///
/// # Platform Support
///
/// - **Native shell**: the runtime's network plugin (`getStatus` plus the
///   `networkStatusChange` listener)
/// - **Desktop**: periodic reachability probe
/// - **Web**: `navigator.onLine` plus `online`/`offline` window events
///
/// # Example
///
/// ```ignore
/// use bridge_traits::network::NetworkMonitor;
///
/// async fn banner_needed(monitor: &dyn NetworkMonitor) -> bool {
///     matches!(monitor.get_status().await, Ok(status) if !status.connected)
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait NetworkMonitor: PlatformSendSync {
    /// Get the current connectivity snapshot
    async fn get_status(&self) -> Result<NetworkStatus>;

    /// Check if currently connected to any network
    async fn is_connected(&self) -> bool {
        matches!(self.get_status().await, Ok(status) if status.connected)
    }

    /// Subscribe to network status changes
    ///
    /// Every call registers a new listener with the host. Dropping the
    /// returned stream releases it.
    async fn subscribe_changes(&self) -> Result<Box<dyn NetworkChangeStream>>;
}

/// Stream of network status changes
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait NetworkChangeStream: PlatformSend {
    /// Get the next status update, in emission order
    ///
    /// Returns `None` when the stream is closed.
    async fn next(&mut self) -> Option<NetworkStatus>;
}

//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided capability bridges into the marketplace
//! client core. Desktop hosts typically enable the `desktop-shims` feature
//! (which depends on `bridge-desktop`), whereas WebAssembly builds enable the
//! `wasm` feature and rely on the adapters from `bridge-wasm`.
//!
//! - [`features::NativeFeatures`]: the capability bridge
//! - [`notifications::NotificationCenter`]: in-app notifications
//! - [`components`]: offline banner, photo selector, share trigger, listing
//!   card and navigation chrome

pub mod components;
pub mod error;
pub mod features;
pub mod notifications;
pub mod state;

pub use error::{CoreError, Result};
pub use features::{NativeFeatures, ShareResult};
pub use notifications::{Notification, NotificationCenter, NotificationKind, Notifier};

use core_runtime::config::AppConfig;
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "wasm")]
pub use bridge_wasm::WasmBridgeConfig;
#[cfg(feature = "wasm")]
use bridge_wasm::{build_wasm_bridges, WasmBridgeSet};

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct CoreService {
    features: Arc<NativeFeatures>,
    notifications: NotificationCenter,
}

impl CoreService {
    /// Probe the host and assemble the service. Nothing native runs until
    /// [`CoreService::start`].
    pub fn new(config: AppConfig) -> Self {
        let notifications = NotificationCenter::new(config.toast);
        Self {
            features: Arc::new(NativeFeatures::new(config)),
            notifications,
        }
    }

    /// Run native initialization; safe to call repeatedly.
    pub async fn start(&self) {
        self.features.initialize().await;
        info!(platform = %self.features.platform(), "Core service started");
    }

    pub fn features(&self) -> Arc<NativeFeatures> {
        Arc::clone(&self.features)
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Release every platform listener.
    pub fn shutdown(&self) {
        self.features.detach();
    }
}

impl std::fmt::Debug for CoreService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreService")
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}

/// Build and start a service with the desktop shims filling every slot the
/// builder leaves empty.
///
/// Must be called from within a Tokio runtime.
#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
pub async fn bootstrap_desktop() -> Result<CoreService> {
    let config = AppConfig::builder().build()?;
    let core = CoreService::new(config);
    core.start().await;
    Ok(core)
}

/// Convenience bootstrapper for WebAssembly hosts.
///
/// ```ignore
/// use core_service::{bootstrap_wasm, WasmBridgeConfig};
///
/// let core = bootstrap_wasm(WasmBridgeConfig::new("daloa-market")).await?;
/// let online = core.features().network_status();
/// ```
#[cfg(feature = "wasm")]
pub async fn bootstrap_wasm(config: WasmBridgeConfig) -> Result<CoreService> {
    let namespace = config.namespace.clone();
    let bridges = build_wasm_bridges(config)
        .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    let app_config = wasm_app_config(bridges, namespace)?;

    let core = CoreService::new(app_config);
    core.start().await;
    Ok(core)
}

#[cfg(feature = "wasm")]
fn wasm_app_config(set: WasmBridgeSet, namespace: String) -> Result<AppConfig> {
    let mut builder = AppConfig::builder()
        .host_probe(set.host_probe)
        .storage_namespace(namespace);

    if let Some(camera) = set.camera {
        builder = builder.camera(camera);
    }
    if let Some(geolocation) = set.geolocation {
        builder = builder.geolocation(geolocation);
    }
    if let Some(share) = set.native_share {
        builder = builder.native_share(share);
    }
    if let Some(haptics) = set.haptics {
        builder = builder.haptics(haptics);
    }
    if let Some(toaster) = set.toaster {
        builder = builder.toaster(toaster);
    }
    if let Some(status_bar) = set.status_bar {
        builder = builder.status_bar(status_bar);
    }
    if let Some(keyboard) = set.keyboard {
        builder = builder.keyboard(keyboard);
    }
    if let Some(splash_screen) = set.splash_screen {
        builder = builder.splash_screen(splash_screen);
    }
    if let Some(device_info) = set.device_info {
        builder = builder.device_info(device_info);
    }
    if let Some(network) = set.network {
        builder = builder.network_monitor(network);
    }
    if let Some(lifecycle) = set.lifecycle {
        builder = builder.lifecycle(lifecycle);
    }
    if let Some(preferences) = set.preferences {
        builder = builder.preferences(preferences);
    }
    if let Some(web_share) = set.web_share {
        builder = builder.web_share(web_share);
    }
    if let Some(clipboard) = set.clipboard {
        builder = builder.clipboard(clipboard);
    }

    Ok(builder.build()?)
}

//! Device descriptor.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Descriptive record of the device, fetched once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceInfo {
    /// User-assigned device name, when the platform exposes it
    pub name: Option<String>,
    pub model: String,
    /// `ios`, `android`, `web`, or the desktop OS family
    pub platform: String,
    pub operating_system: String,
    pub os_version: String,
    pub manufacturer: String,
    pub is_virtual: bool,
    pub web_view_version: Option<String>,
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait DeviceInfoProvider: PlatformSendSync {
    async fn get_info(&self) -> Result<DeviceInfo>;
}

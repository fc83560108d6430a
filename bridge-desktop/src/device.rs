//! Device descriptor for desktop hosts

use async_trait::async_trait;
use bridge_traits::{
    device::{DeviceInfo, DeviceInfoProvider},
    error::Result,
};
use std::env;

/// Describes the desktop machine from compile-time and environment facts.
#[derive(Debug, Clone, Default)]
pub struct DesktopDeviceInfo {
    name: Option<String>,
}

impl DesktopDeviceInfo {
    pub fn new() -> Self {
        let name = env::var("HOSTNAME")
            .or_else(|_| env::var("COMPUTERNAME"))
            .ok()
            .filter(|name| !name.is_empty());
        Self { name }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

fn manufacturer_for(os: &str) -> &'static str {
    match os {
        "macos" => "Apple",
        "windows" => "Microsoft",
        _ => "unknown",
    }
}

#[async_trait]
impl DeviceInfoProvider for DesktopDeviceInfo {
    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo {
            name: self.name.clone(),
            model: env::consts::ARCH.to_string(),
            platform: "desktop".to_string(),
            operating_system: env::consts::OS.to_string(),
            os_version: "unknown".to_string(),
            manufacturer: manufacturer_for(env::consts::OS).to_string(),
            is_virtual: false,
            web_view_version: None,
        })
    }
}

//! System chrome owned by the native shell: status bar, soft keyboard and
//! launch splash screen.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Status bar text/icon style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusBarStyle {
    /// Light text, for dark backgrounds
    #[default]
    Light,
    /// Dark text, for light backgrounds
    Dark,
    /// Follow the system theme
    Default,
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait StatusBar: PlatformSendSync {
    async fn set_style(&self, style: StatusBarStyle) -> Result<()>;

    /// `color` is a `#RRGGBB` hex string.
    async fn set_background_color(&self, color: &str) -> Result<()>;
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Keyboard: PlatformSendSync {
    async fn hide(&self) -> Result<()>;
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait SplashScreen: PlatformSendSync {
    async fn hide(&self) -> Result<()>;
}

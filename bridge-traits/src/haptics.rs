//! Haptic feedback.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Impact strength, matching the host plugin's wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImpactStyle {
    Light,
    #[default]
    Medium,
    Heavy,
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Haptics: PlatformSendSync {
    async fn impact(&self, style: ImpactStyle) -> Result<()>;
}

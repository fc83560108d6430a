//! Native toast messages drawn by the host OS.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastPosition {
    Top,
    Center,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRequest {
    pub text: String,
    pub duration: ToastDuration,
    pub position: ToastPosition,
}

impl ToastRequest {
    pub fn new(text: impl Into<String>, duration: ToastDuration) -> Self {
        Self {
            text: text.into(),
            duration,
            position: ToastPosition::default(),
        }
    }

    pub fn at(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Toaster: PlatformSendSync {
    async fn show(&self, request: ToastRequest) -> Result<()>;
}

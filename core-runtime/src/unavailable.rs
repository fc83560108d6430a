//! Placeholder for capabilities the host does not provide.
//!
//! Every call logs a warning and fails with [`BridgeError::NotAvailable`], so
//! a missing capability goes down the same path as a failing one.

use bridge_traits::{
    error::Result, AppLifecycle, BridgeError, CaptureOptions, CapturedPhoto, Clipboard,
    DeviceInfo, DeviceInfoProvider, Geolocation, Haptics, ImpactStyle, Keyboard,
    LifecycleEventStream, NativeShare, NetworkChangeStream, NetworkMonitor, NetworkStatus,
    PhotoCapture, Position, PreferenceStore, ShareRequest, SplashScreen, StatusBar,
    StatusBarStyle, ToastRequest, Toaster, WebShare,
};
use tracing::warn;

/// Capability slot filler that always fails.
#[derive(Debug, Clone)]
pub struct Unavailable {
    capability: &'static str,
}

impl Unavailable {
    pub fn new(capability: &'static str) -> Self {
        Self { capability }
    }

    pub fn capability(&self) -> &'static str {
        self.capability
    }

    fn fail<T>(&self, operation: &str) -> Result<T> {
        warn!(
            capability = self.capability,
            operation, "Capability not provided by host"
        );
        Err(BridgeError::NotAvailable(self.capability.to_string()))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl PhotoCapture for Unavailable {
    async fn get_photo(&self, _options: CaptureOptions) -> Result<CapturedPhoto> {
        self.fail("get_photo")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Geolocation for Unavailable {
    async fn current_position(&self) -> Result<Position> {
        self.fail("current_position")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl NativeShare for Unavailable {
    async fn share(&self, _request: &ShareRequest) -> Result<()> {
        self.fail("share")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl WebShare for Unavailable {
    async fn share(&self, _request: &ShareRequest) -> Result<()> {
        self.fail("web_share")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Clipboard for Unavailable {
    async fn write_text(&self, _text: &str) -> Result<()> {
        self.fail("write_text")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Haptics for Unavailable {
    async fn impact(&self, _style: ImpactStyle) -> Result<()> {
        self.fail("impact")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Toaster for Unavailable {
    async fn show(&self, _request: ToastRequest) -> Result<()> {
        self.fail("show")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl StatusBar for Unavailable {
    async fn set_style(&self, _style: StatusBarStyle) -> Result<()> {
        self.fail("set_style")
    }

    async fn set_background_color(&self, _color: &str) -> Result<()> {
        self.fail("set_background_color")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Keyboard for Unavailable {
    async fn hide(&self) -> Result<()> {
        self.fail("hide_keyboard")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl SplashScreen for Unavailable {
    async fn hide(&self) -> Result<()> {
        self.fail("hide_splash")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl DeviceInfoProvider for Unavailable {
    async fn get_info(&self) -> Result<DeviceInfo> {
        self.fail("get_info")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl NetworkMonitor for Unavailable {
    async fn get_status(&self) -> Result<NetworkStatus> {
        self.fail("get_status")
    }

    async fn subscribe_changes(&self) -> Result<Box<dyn NetworkChangeStream>> {
        self.fail("subscribe_changes")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl AppLifecycle for Unavailable {
    async fn subscribe(&self) -> Result<Box<dyn LifecycleEventStream>> {
        self.fail("subscribe")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl PreferenceStore for Unavailable {
    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        self.fail("set")
    }

    async fn get(&self, _key: &str) -> Result<Option<String>> {
        self.fail("get")
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        self.fail("remove")
    }

    async fn keys(&self) -> Result<Vec<String>> {
        self.fail("keys")
    }

    async fn clear(&self) -> Result<()> {
        self.fail("clear")
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use bridge_traits::PhotoSource;

    #[tokio::test]
    async fn test_every_call_is_not_available() {
        let camera = Unavailable::new("camera");
        let err = camera
            .get_photo(CaptureOptions::new(PhotoSource::Camera))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::NotAvailable(ref c) if c == "camera"));

        let prefs = Unavailable::new("preferences");
        assert!(prefs.get("k").await.is_err());
        assert!(prefs.contains("k").await.is_err());

        let network = Unavailable::new("network");
        assert!(network.subscribe_changes().await.is_err());
        assert!(!network.is_connected().await);
    }
}

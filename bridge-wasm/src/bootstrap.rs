//! Convenience helpers for wiring the wasm bridge implementations together.
//!
//! Host pages call [`build_wasm_bridges`] once during startup. Inside the
//! native shell every capability is backed by [`CapacitorBridge`]; in a plain
//! browser only the slots with a real browser equivalent are filled and the
//! rest stay `None`, for the core to replace with unavailable stand-ins.

use std::sync::Arc;

use bridge_traits::{
    error::Result as BridgeResult, AppLifecycle, Clipboard, DeviceInfoProvider, Geolocation,
    Haptics, HostProbe, Keyboard, NativeShare, NetworkMonitor, PhotoCapture, PlatformMode,
    PreferenceStore, SplashScreen, StatusBar, Toaster, WebShare,
};
use tracing::{debug, warn};

use crate::{
    browser::{BrowserClipboard, BrowserHostProbe, BrowserNetworkMonitor, BrowserWebShare},
    capacitor::CapacitorBridge,
    storage::LocalStoragePreferenceStore,
};

/// Configuration for [`build_wasm_bridges`].
#[derive(Debug, Clone)]
pub struct WasmBridgeConfig {
    /// Prefix for `localStorage` keys.
    pub namespace: String,
}

impl WasmBridgeConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for WasmBridgeConfig {
    fn default() -> Self {
        Self::new("daloa-market")
    }
}

/// Bridge objects ready for injection into the core.
pub struct WasmBridgeSet {
    pub platform: PlatformMode,
    pub host_probe: Arc<dyn HostProbe>,
    pub camera: Option<Arc<dyn PhotoCapture>>,
    pub geolocation: Option<Arc<dyn Geolocation>>,
    pub native_share: Option<Arc<dyn NativeShare>>,
    pub haptics: Option<Arc<dyn Haptics>>,
    pub toaster: Option<Arc<dyn Toaster>>,
    pub status_bar: Option<Arc<dyn StatusBar>>,
    pub keyboard: Option<Arc<dyn Keyboard>>,
    pub splash_screen: Option<Arc<dyn SplashScreen>>,
    pub device_info: Option<Arc<dyn DeviceInfoProvider>>,
    pub network: Option<Arc<dyn NetworkMonitor>>,
    pub lifecycle: Option<Arc<dyn AppLifecycle>>,
    pub preferences: Option<Arc<dyn PreferenceStore>>,
    /// `navigator.share`, when the browser has it
    pub web_share: Option<Arc<dyn WebShare>>,
    /// `navigator.clipboard`, when the browser has it
    pub clipboard: Option<Arc<dyn Clipboard>>,
}

impl WasmBridgeSet {
    fn empty(platform: PlatformMode) -> Self {
        Self {
            platform,
            host_probe: Arc::new(BrowserHostProbe),
            camera: None,
            geolocation: None,
            native_share: None,
            haptics: None,
            toaster: None,
            status_bar: None,
            keyboard: None,
            splash_screen: None,
            device_info: None,
            network: None,
            lifecycle: None,
            preferences: None,
            web_share: BrowserWebShare::detect().map(|s| Arc::new(s) as Arc<dyn WebShare>),
            clipboard: BrowserClipboard::detect().map(|c| Arc::new(c) as Arc<dyn Clipboard>),
        }
    }
}

/// Build the wasm bridge stack for the current page.
pub fn build_wasm_bridges(config: WasmBridgeConfig) -> BridgeResult<WasmBridgeSet> {
    let platform = BrowserHostProbe.probe();
    let mut set = WasmBridgeSet::empty(platform);

    match platform {
        PlatformMode::Native => {
            let bridge = Arc::new(CapacitorBridge::new());
            set.camera = Some(bridge.clone());
            set.geolocation = Some(bridge.clone());
            set.native_share = Some(bridge.clone());
            set.haptics = Some(bridge.clone());
            set.toaster = Some(bridge.clone());
            set.status_bar = Some(bridge.clone());
            set.keyboard = Some(bridge.clone());
            set.splash_screen = Some(bridge.clone());
            set.device_info = Some(bridge.clone());
            set.network = Some(bridge.clone());
            set.lifecycle = Some(bridge.clone());
            set.preferences = Some(bridge);
        }
        PlatformMode::Web => {
            set.network = Some(Arc::new(BrowserNetworkMonitor));
            match LocalStoragePreferenceStore::new(&config.namespace) {
                Ok(store) => set.preferences = Some(Arc::new(store)),
                Err(err) => warn!(error = %err, "localStorage unavailable, preferences disabled"),
            }
        }
    }

    debug!(
        ?platform,
        web_share = set.web_share.is_some(),
        clipboard = set.clipboard.is_some(),
        "Wasm bridges built"
    );
    Ok(set)
}

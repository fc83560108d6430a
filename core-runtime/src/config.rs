//! # App Configuration Module
//!
//! Assembles the capability set and the settings the marketplace core runs
//! with.
//!
//! ## Overview
//!
//! [`AppConfig::builder()`] collects one adapter per capability trait plus the
//! browser fallbacks. The platform is probed later from the configured
//! [`HostProbe`]; every capability slot left empty is filled with an
//! [`Unavailable`] adapter, so the façade never has to branch on presence.
//!
//! ## Required Dependencies
//!
//! - `HostProbe` - decides Native vs Web once at startup
//!
//! ## Platform defaults
//!
//! With the `desktop-shims` feature, the probe, network monitor, device info,
//! lifecycle and preference store default to the `bridge-desktop` adapters.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::AppConfig;
//! use std::sync::Arc;
//!
//! let config = AppConfig::builder()
//!     .host_probe(Arc::new(MyProbe))
//!     .camera(Arc::new(MyCamera))
//!     .max_photos(8)
//!     .build()?;
//! ```
//!
//! ## Error Handling
//!
//! Without `desktop-shims` there is no probe to fall back on, and `build()`
//! fails with an actionable [`Error::CapabilityMissing`]:
//!
//! ```ignore
//! let err = AppConfig::builder().build().unwrap_err();
//! assert!(matches!(err, Error::CapabilityMissing { .. }));
//! ```

use crate::error::{Error, Result};
use crate::events::DEFAULT_EVENT_BUFFER_SIZE;
use crate::unavailable::Unavailable;
use bridge_traits::{
    AppLifecycle, Clipboard, DeviceInfoProvider, Geolocation, Haptics, HostProbe, Keyboard,
    NativeShare, NetworkMonitor, PhotoCapture, PreferenceStore, SplashScreen, StatusBar,
    StatusBarStyle, ToastPosition, Toaster, WebShare,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Namespace used for preference storage and data directories.
pub const DEFAULT_STORAGE_NAMESPACE: &str = "daloa-market";

/// Brand color applied to the status bar.
pub const DEFAULT_STATUS_BAR_COLOR: &str = "#FF7F00";

/// Status bar and splash handling during native initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellAppearance {
    pub status_bar_style: StatusBarStyle,
    /// `#RRGGBB`
    pub status_bar_color: String,
    pub hide_splash: bool,
}

impl Default for ShellAppearance {
    fn default() -> Self {
        Self {
            status_bar_style: StatusBarStyle::Light,
            status_bar_color: DEFAULT_STATUS_BAR_COLOR.to_string(),
            hide_splash: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// JPEG quality, 1 to 100
    pub quality: u8,
    pub allow_editing: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            quality: 90,
            allow_editing: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSettings {
    /// Title of the native share sheet (Android only)
    pub dialog_title: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            dialog_title: "Partager via".to_string(),
        }
    }
}

/// Where in-app notifications stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPlacement {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// In-app notification and native toast settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastSettings {
    pub duration_ms: u64,
    pub placement: NotificationPlacement,
    /// Position used for OS toasts
    pub native_position: ToastPosition,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            duration_ms: 4000,
            placement: NotificationPlacement::TopCenter,
            native_position: ToastPosition::Bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPolicy {
    pub max_photos: usize,
}

impl Default for PhotoPolicy {
    fn default() -> Self {
        Self { max_photos: 5 }
    }
}

/// One adapter per native capability.
#[derive(Clone)]
pub struct CapabilitySet {
    pub camera: Arc<dyn PhotoCapture>,
    pub geolocation: Arc<dyn Geolocation>,
    pub share: Arc<dyn NativeShare>,
    pub haptics: Arc<dyn Haptics>,
    pub toaster: Arc<dyn Toaster>,
    pub status_bar: Arc<dyn StatusBar>,
    pub keyboard: Arc<dyn Keyboard>,
    pub splash_screen: Arc<dyn SplashScreen>,
    pub device_info: Arc<dyn DeviceInfoProvider>,
    pub network: Arc<dyn NetworkMonitor>,
    pub lifecycle: Arc<dyn AppLifecycle>,
    pub preferences: Arc<dyn PreferenceStore>,
}

impl CapabilitySet {
    /// A set in which every capability fails with `NotAvailable`.
    pub fn unavailable() -> Self {
        Self {
            camera: Arc::new(Unavailable::new("camera")),
            geolocation: Arc::new(Unavailable::new("geolocation")),
            share: Arc::new(Unavailable::new("share")),
            haptics: Arc::new(Unavailable::new("haptics")),
            toaster: Arc::new(Unavailable::new("toast")),
            status_bar: Arc::new(Unavailable::new("status_bar")),
            keyboard: Arc::new(Unavailable::new("keyboard")),
            splash_screen: Arc::new(Unavailable::new("splash_screen")),
            device_info: Arc::new(Unavailable::new("device")),
            network: Arc::new(Unavailable::new("network")),
            lifecycle: Arc::new(Unavailable::new("app")),
            preferences: Arc::new(Unavailable::new("preferences")),
        }
    }
}

impl std::fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilitySet").finish_non_exhaustive()
    }
}

/// Browser APIs used by the share trigger outside the native shell.
#[derive(Clone, Default)]
pub struct BrowserFallbacks {
    pub web_share: Option<Arc<dyn WebShare>>,
    pub clipboard: Option<Arc<dyn Clipboard>>,
}

impl std::fmt::Debug for BrowserFallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserFallbacks")
            .field("web_share", &self.web_share.is_some())
            .field("clipboard", &self.clipboard.is_some())
            .finish()
    }
}

/// Everything the capability façade needs to start.
#[derive(Clone)]
pub struct AppConfig {
    pub host_probe: Arc<dyn HostProbe>,
    pub capabilities: CapabilitySet,
    pub browser: BrowserFallbacks,
    pub appearance: ShellAppearance,
    pub camera: CameraSettings,
    pub share: ShareSettings,
    pub toast: ToastSettings,
    pub photos: PhotoPolicy,
    pub event_buffer_size: usize,
    pub storage_namespace: String,
    /// Location of the desktop preference database
    pub preferences_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("browser", &self.browser)
            .field("appearance", &self.appearance)
            .field("camera", &self.camera)
            .field("share", &self.share)
            .field("toast", &self.toast)
            .field("photos", &self.photos)
            .field("event_buffer_size", &self.event_buffer_size)
            .field("storage_namespace", &self.storage_namespace)
            .field("preferences_path", &self.preferences_path)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Check settings for values the platform would reject.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.camera.quality) {
            return Err(Error::Config(format!(
                "Camera quality must be between 1 and 100 (got {}). \
                 Use .camera_settings() with a JPEG quality percentage.",
                self.camera.quality
            )));
        }

        if !is_hex_color(&self.appearance.status_bar_color) {
            return Err(Error::Config(format!(
                "Status bar color must be in #RRGGBB form (got {:?}).",
                self.appearance.status_bar_color
            )));
        }

        if self.photos.max_photos == 0 {
            return Err(Error::Config(
                "Maximum photo count must be greater than 0.".to_string(),
            ));
        }

        if self.toast.duration_ms == 0 {
            return Err(Error::Config(
                "Notification duration must be greater than 0 ms.".to_string(),
            ));
        }

        if self.event_buffer_size == 0 {
            return Err(Error::Config(
                "Event buffer size must be greater than 0.".to_string(),
            ));
        }

        if self.storage_namespace.trim().is_empty() {
            return Err(Error::Config(
                "Storage namespace must not be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Builder for [`AppConfig`].
#[derive(Default)]
pub struct AppConfigBuilder {
    host_probe: Option<Arc<dyn HostProbe>>,
    camera: Option<Arc<dyn PhotoCapture>>,
    geolocation: Option<Arc<dyn Geolocation>>,
    share: Option<Arc<dyn NativeShare>>,
    haptics: Option<Arc<dyn Haptics>>,
    toaster: Option<Arc<dyn Toaster>>,
    status_bar: Option<Arc<dyn StatusBar>>,
    keyboard: Option<Arc<dyn Keyboard>>,
    splash_screen: Option<Arc<dyn SplashScreen>>,
    device_info: Option<Arc<dyn DeviceInfoProvider>>,
    network: Option<Arc<dyn NetworkMonitor>>,
    lifecycle: Option<Arc<dyn AppLifecycle>>,
    preferences: Option<Arc<dyn PreferenceStore>>,
    browser: BrowserFallbacks,
    appearance: Option<ShellAppearance>,
    camera_settings: Option<CameraSettings>,
    share_settings: Option<ShareSettings>,
    toast_settings: Option<ToastSettings>,
    photos: Option<PhotoPolicy>,
    event_buffer_size: Option<usize>,
    storage_namespace: Option<String>,
    preferences_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    pub fn host_probe(mut self, probe: Arc<dyn HostProbe>) -> Self {
        self.host_probe = Some(probe);
        self
    }

    pub fn camera(mut self, camera: Arc<dyn PhotoCapture>) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn geolocation(mut self, geolocation: Arc<dyn Geolocation>) -> Self {
        self.geolocation = Some(geolocation);
        self
    }

    pub fn native_share(mut self, share: Arc<dyn NativeShare>) -> Self {
        self.share = Some(share);
        self
    }

    pub fn haptics(mut self, haptics: Arc<dyn Haptics>) -> Self {
        self.haptics = Some(haptics);
        self
    }

    pub fn toaster(mut self, toaster: Arc<dyn Toaster>) -> Self {
        self.toaster = Some(toaster);
        self
    }

    pub fn status_bar(mut self, status_bar: Arc<dyn StatusBar>) -> Self {
        self.status_bar = Some(status_bar);
        self
    }

    pub fn keyboard(mut self, keyboard: Arc<dyn Keyboard>) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn splash_screen(mut self, splash_screen: Arc<dyn SplashScreen>) -> Self {
        self.splash_screen = Some(splash_screen);
        self
    }

    pub fn device_info(mut self, provider: Arc<dyn DeviceInfoProvider>) -> Self {
        self.device_info = Some(provider);
        self
    }

    pub fn network_monitor(mut self, monitor: Arc<dyn NetworkMonitor>) -> Self {
        self.network = Some(monitor);
        self
    }

    pub fn lifecycle(mut self, lifecycle: Arc<dyn AppLifecycle>) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn preferences(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.preferences = Some(store);
        self
    }

    /// `navigator.share`, used when not inside the native shell.
    pub fn web_share(mut self, share: Arc<dyn WebShare>) -> Self {
        self.browser.web_share = Some(share);
        self
    }

    pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.browser.clipboard = Some(clipboard);
        self
    }

    pub fn appearance(mut self, appearance: ShellAppearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn camera_settings(mut self, settings: CameraSettings) -> Self {
        self.camera_settings = Some(settings);
        self
    }

    pub fn share_settings(mut self, settings: ShareSettings) -> Self {
        self.share_settings = Some(settings);
        self
    }

    pub fn toast_settings(mut self, settings: ToastSettings) -> Self {
        self.toast_settings = Some(settings);
        self
    }

    pub fn max_photos(mut self, max_photos: usize) -> Self {
        self.photos = Some(PhotoPolicy { max_photos });
        self
    }

    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    pub fn storage_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage_namespace = Some(namespace.into());
        self
    }

    pub fn preferences_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.preferences_path = Some(path.into());
        self
    }

    /// Fill defaults, then validate.
    ///
    /// # Errors
    ///
    /// [`Error::CapabilityMissing`] when no host probe is available and
    /// [`Error::Config`] for out-of-range settings.
    pub fn build(self) -> Result<AppConfig> {
        let storage_namespace = self
            .storage_namespace
            .unwrap_or_else(|| DEFAULT_STORAGE_NAMESPACE.to_string());
        let platform = platform_defaults(
            &storage_namespace,
            self.preferences_path.clone(),
            self.preferences.is_none(),
        )?;
        let fallback = CapabilitySet::unavailable();

        let host_probe = self
            .host_probe
            .or(platform.host_probe)
            .ok_or_else(host_probe_missing_error)?;

        let capabilities = CapabilitySet {
            camera: self.camera.unwrap_or(fallback.camera),
            geolocation: self.geolocation.unwrap_or(fallback.geolocation),
            share: self.share.unwrap_or(fallback.share),
            haptics: self.haptics.unwrap_or(fallback.haptics),
            toaster: self.toaster.unwrap_or(fallback.toaster),
            status_bar: self.status_bar.unwrap_or(fallback.status_bar),
            keyboard: self.keyboard.unwrap_or(fallback.keyboard),
            splash_screen: self.splash_screen.unwrap_or(fallback.splash_screen),
            device_info: self
                .device_info
                .or(platform.device_info)
                .unwrap_or(fallback.device_info),
            network: self
                .network
                .or(platform.network)
                .unwrap_or(fallback.network),
            lifecycle: self
                .lifecycle
                .or(platform.lifecycle)
                .unwrap_or(fallback.lifecycle),
            preferences: self
                .preferences
                .or(platform.preferences)
                .unwrap_or(fallback.preferences),
        };

        let config = AppConfig {
            host_probe,
            capabilities,
            browser: self.browser,
            appearance: self.appearance.unwrap_or_default(),
            camera: self.camera_settings.unwrap_or_default(),
            share: self.share_settings.unwrap_or_default(),
            toast: self.toast_settings.unwrap_or_default(),
            photos: self.photos.unwrap_or_default(),
            event_buffer_size: self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE),
            storage_namespace,
            preferences_path: self.preferences_path.or(platform.preferences_path),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Adapters the host platform supplies when the builder leaves a slot empty.
#[derive(Default)]
struct PlatformDefaults {
    host_probe: Option<Arc<dyn HostProbe>>,
    device_info: Option<Arc<dyn DeviceInfoProvider>>,
    network: Option<Arc<dyn NetworkMonitor>>,
    lifecycle: Option<Arc<dyn AppLifecycle>>,
    preferences: Option<Arc<dyn PreferenceStore>>,
    preferences_path: Option<PathBuf>,
}

#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
fn platform_defaults(
    namespace: &str,
    path: Option<PathBuf>,
    open_preferences: bool,
) -> Result<PlatformDefaults> {
    use bridge_desktop::{
        default_preferences_path, DesktopDeviceInfo, DesktopHostProbe, DesktopLifecycle,
        DesktopNetworkMonitor, SqlitePreferenceStore,
    };

    let mut defaults = PlatformDefaults {
        host_probe: Some(Arc::new(DesktopHostProbe)),
        device_info: Some(Arc::new(DesktopDeviceInfo::new())),
        network: Some(Arc::new(DesktopNetworkMonitor::new())),
        lifecycle: Some(Arc::new(DesktopLifecycle::new())),
        preferences: None,
        preferences_path: path.clone(),
    };
    if !open_preferences {
        return Ok(defaults);
    }

    let path = match path {
        Some(path) => path,
        None => default_preferences_path(namespace).ok_or_else(|| {
            Error::Config(
                "No data directory available for preferences. \
                 Use .preferences_path() to choose one."
                    .to_string(),
            )
        })?,
    };

    let preferences = SqlitePreferenceStore::open_lazy(&path)
        .map_err(|e| Error::PreferenceStore(e.to_string()))?;

    defaults.preferences = Some(Arc::new(preferences));
    defaults.preferences_path = Some(path);
    Ok(defaults)
}

#[cfg(not(all(feature = "desktop-shims", not(target_arch = "wasm32"))))]
fn platform_defaults(
    _namespace: &str,
    _path: Option<PathBuf>,
    _open_preferences: bool,
) -> Result<PlatformDefaults> {
    Ok(PlatformDefaults::default())
}

fn host_probe_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "HostProbe".to_string(),
        message: "A HostProbe is required to decide between native shell and browser. \
                  Desktop: enable the 'desktop-shims' feature to use DesktopHostProbe. \
                  Web: inject bridge_wasm::BrowserHostProbe."
            .to_string(),
    }
}

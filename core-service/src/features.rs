//! # Native Capability Bridge
//!
//! [`NativeFeatures`] is the single entry point the UI uses for device
//! capabilities.
//!
//! ## Overview
//!
//! - The host is probed once at construction; [`PlatformMode`] never changes
//!   afterwards.
//! - [`NativeFeatures::initialize`] configures the system chrome, fetches the
//!   device descriptor and the current network status, and attaches the
//!   network and lifecycle listeners. It runs at most once, inside the native
//!   shell only; concurrent callers await the same run.
//! - Every capability operation returns a neutral value (`None` / `false`)
//!   when the platform call fails. Failures are logged here and published as
//!   [`CapabilityEvent::Unavailable`]; nothing propagates to the caller.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_runtime::config::AppConfig;
//! use core_service::features::NativeFeatures;
//! use bridge_traits::PhotoSource;
//!
//! let features = NativeFeatures::new(AppConfig::builder().build()?);
//! features.initialize().await;
//!
//! if features.is_native() {
//!     if let Some(photo) = features.capture_photo(PhotoSource::Camera).await {
//!         upload(photo.local_reference).await;
//!     }
//! }
//! ```
//!
//! ## Listeners
//!
//! Each subscription is pumped by a background task owned by a
//! [`ListenerGuard`]. [`NativeFeatures::detach`] or dropping the bridge
//! aborts every pump, which releases the platform registration.

use crate::state::NetworkStatusStore;
use bridge_traits::{
    BridgeError, CaptureOptions, CapturedPhoto, Coordinates, DeviceInfo, ImpactStyle,
    LifecycleEvent, LifecycleEventStream, NetworkChangeStream, NetworkStatus, PhotoSource,
    PlatformMode, ShareRequest, ToastDuration, ToastRequest,
};
use core_runtime::config::{
    AppConfig, BrowserFallbacks, CameraSettings, CapabilitySet, PhotoPolicy, ShareSettings,
    ShellAppearance, ToastSettings,
};
use core_runtime::events::{AppEvent, CapabilityEvent, EventBus};
use core_runtime::logging::{coarse_position, strip_path};
use core_runtime::task::{spawn_listener, ListenerGuard};
use std::fmt;
use std::sync::Mutex;
use tokio::sync::{watch, OnceCell};
use tracing::{debug, info, instrument, warn};

/// How a native share sheet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareResult {
    Shared,
    /// Dismissed by the user; not a failure.
    Cancelled,
    Failed,
}

/// Capability façade over the host bridges.
pub struct NativeFeatures {
    platform: PlatformMode,
    capabilities: CapabilitySet,
    browser: BrowserFallbacks,
    appearance: ShellAppearance,
    camera: CameraSettings,
    share: ShareSettings,
    toast: ToastSettings,
    photos: PhotoPolicy,
    network: NetworkStatusStore,
    device_info: OnceCell<DeviceInfo>,
    events: EventBus,
    initialized: OnceCell<()>,
    listeners: Mutex<Vec<ListenerGuard>>,
}

impl NativeFeatures {
    /// Probe the host and take ownership of the configured adapters.
    ///
    /// No platform call other than the probe happens here.
    pub fn new(config: AppConfig) -> Self {
        let platform = config.host_probe.probe();
        info!(%platform, "Host platform detected");

        Self {
            platform,
            capabilities: config.capabilities,
            browser: config.browser,
            appearance: config.appearance,
            camera: config.camera,
            share: config.share,
            toast: config.toast,
            photos: config.photos,
            network: NetworkStatusStore::new(),
            device_info: OnceCell::new(),
            events: EventBus::new(config.event_buffer_size),
            initialized: OnceCell::new(),
            listeners: Mutex::new(Vec::new()),
        }
    }

    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    /// One-time native setup. A no-op outside the native shell and on every
    /// call after the first.
    ///
    /// Must be called from within a Tokio runtime on native targets, since
    /// listener pumps are spawned onto it.
    pub async fn initialize(&self) {
        self.initialized
            .get_or_init(|| async {
                if self.platform.is_native() {
                    self.run_native_initialization().await;
                } else {
                    debug!("Web platform, skipping native initialization");
                }
            })
            .await;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    #[instrument(skip(self), name = "native_init")]
    async fn run_native_initialization(&self) {
        self.configure_chrome().await;

        match self.capabilities.device_info.get_info().await {
            Ok(info) => {
                debug!(
                    platform = %info.platform,
                    os_version = %info.os_version,
                    model = %info.model,
                    "Device info loaded"
                );
                let _ = self.device_info.set(info);
            }
            Err(err) => self.report_failure("device", "get_info", &err),
        }

        match self.capabilities.network.get_status().await {
            Ok(status) => self.apply_network_status(status),
            Err(err) => self.report_failure("network", "get_status", &err),
        }

        match self.capabilities.network.subscribe_changes().await {
            Ok(stream) => {
                let guard = spawn_listener(
                    "network",
                    pump_network(stream, self.network.clone(), self.events.clone()),
                );
                self.attach(guard);
            }
            Err(err) => self.report_failure("network", "subscribe_changes", &err),
        }

        match self.capabilities.lifecycle.subscribe().await {
            Ok(stream) => {
                let guard = spawn_listener("app", pump_lifecycle(stream, self.events.clone()));
                self.attach(guard);
            }
            Err(err) => self.report_failure("app", "subscribe", &err),
        }

        info!("Native features initialized");
        let _ = self
            .events
            .emit(AppEvent::Capability(CapabilityEvent::ShellReady {
                platform: self.platform,
            }));
    }

    async fn configure_chrome(&self) {
        let status_bar = &self.capabilities.status_bar;
        if let Err(err) = status_bar.set_style(self.appearance.status_bar_style).await {
            self.report_failure("status_bar", "set_style", &err);
        }
        if let Err(err) = status_bar
            .set_background_color(&self.appearance.status_bar_color)
            .await
        {
            self.report_failure("status_bar", "set_background_color", &err);
        }

        if self.appearance.hide_splash {
            if let Err(err) = self.capabilities.splash_screen.hide().await {
                self.report_failure("splash_screen", "hide", &err);
            }
        }
    }

    fn apply_network_status(&self, status: NetworkStatus) {
        debug!(
            connected = status.connected,
            connection_type = ?status.connection_type,
            "Network status loaded"
        );
        self.network.replace(status);
        let _ = self.events.emit(AppEvent::Network(status.into()));
    }

    fn attach(&self, guard: ListenerGuard) {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(guard);
    }

    /// Abort every listener pump.
    ///
    /// Initialization does not run again afterwards; the published network
    /// status keeps its last value.
    pub fn detach(&self) {
        let guards = std::mem::take(
            &mut *self
                .listeners
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        );
        if !guards.is_empty() {
            info!(count = guards.len(), "Detaching native listeners");
        }
        drop(guards);
    }

    /// Names of the listeners currently attached.
    pub fn active_listeners(&self) -> Vec<&'static str> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|guard| guard.is_active())
            .map(ListenerGuard::name)
            .collect()
    }

    // ------------------------------------------------------------------
    // Published state
    // ------------------------------------------------------------------

    pub fn platform(&self) -> PlatformMode {
        self.platform
    }

    pub fn is_native(&self) -> bool {
        self.platform.is_native()
    }

    /// Latest network status, `None` until one is known.
    pub fn network_status(&self) -> Option<NetworkStatus> {
        self.network.current()
    }

    pub fn watch_network(&self) -> watch::Receiver<Option<NetworkStatus>> {
        self.network.subscribe()
    }

    pub fn device_info(&self) -> Option<DeviceInfo> {
        self.device_info.get().cloned()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn browser(&self) -> &BrowserFallbacks {
        &self.browser
    }

    pub fn photo_policy(&self) -> PhotoPolicy {
        self.photos
    }

    pub fn toast_settings(&self) -> &ToastSettings {
        &self.toast
    }

    // ------------------------------------------------------------------
    // Capabilities
    // ------------------------------------------------------------------

    pub async fn capture_photo(&self, source: PhotoSource) -> Option<CapturedPhoto> {
        let options = CaptureOptions::new(source)
            .with_quality(self.camera.quality)
            .with_editing(self.camera.allow_editing);

        match self.capabilities.camera.get_photo(options).await {
            Ok(photo) => {
                debug!(
                    ?source,
                    reference = strip_path(&photo.local_reference),
                    "Photo captured"
                );
                Some(photo)
            }
            Err(err) => {
                self.report_failure("camera", "get_photo", &err);
                None
            }
        }
    }

    pub async fn take_photo(&self) -> Option<CapturedPhoto> {
        self.capture_photo(PhotoSource::Camera).await
    }

    pub async fn select_photo(&self) -> Option<CapturedPhoto> {
        self.capture_photo(PhotoSource::Gallery).await
    }

    pub async fn current_position(&self) -> Option<Coordinates> {
        match self.capabilities.geolocation.current_position().await {
            Ok(position) => {
                let coords = position.coords;
                debug!(
                    position = %coarse_position(coords.latitude, coords.longitude),
                    accuracy = coords.accuracy,
                    "Position acquired"
                );
                Some(coords)
            }
            Err(err) => {
                self.report_failure("geolocation", "current_position", &err);
                None
            }
        }
    }

    /// Open the native share sheet. A dismissed sheet returns `false`.
    pub async fn share(&self, title: &str, text: &str, url: Option<&str>) -> bool {
        self.open_share_sheet(title, text, url).await == ShareResult::Shared
    }

    /// Like [`NativeFeatures::share`], keeping a dismissal apart from a failure.
    pub async fn open_share_sheet(
        &self,
        title: &str,
        text: &str,
        url: Option<&str>,
    ) -> ShareResult {
        let request = ShareRequest::new(title, text, url.map(str::to_string))
            .with_dialog_title(self.share.dialog_title.clone());

        match self.capabilities.share.share(&request).await {
            Ok(()) => ShareResult::Shared,
            Err(err) => {
                self.report_failure("share", "share", &err);
                if err.is_cancellation() {
                    ShareResult::Cancelled
                } else {
                    ShareResult::Failed
                }
            }
        }
    }

    pub async fn vibrate(&self, style: ImpactStyle) -> bool {
        self.settle(
            "haptics",
            "impact",
            self.capabilities.haptics.impact(style).await,
        )
    }

    pub async fn show_toast(&self, text: &str, duration: ToastDuration) -> bool {
        let request = ToastRequest::new(text, duration).at(self.toast.native_position);
        self.settle("toast", "show", self.capabilities.toaster.show(request).await)
    }

    pub async fn set_preference(&self, key: &str, value: &str) -> bool {
        let result = self.capabilities.preferences.set(key, value).await;
        if result.is_ok() {
            debug!(key, "Preference stored");
        }
        self.settle("preferences", "set", result)
    }

    /// `None` both when the key is missing and when the store fails.
    pub async fn get_preference(&self, key: &str) -> Option<String> {
        match self.capabilities.preferences.get(key).await {
            Ok(value) => value,
            Err(err) => {
                self.report_failure("preferences", "get", &err);
                None
            }
        }
    }

    pub async fn remove_preference(&self, key: &str) -> bool {
        self.settle(
            "preferences",
            "remove",
            self.capabilities.preferences.remove(key).await,
        )
    }

    pub async fn hide_keyboard(&self) -> bool {
        self.settle("keyboard", "hide", self.capabilities.keyboard.hide().await)
    }

    fn settle(
        &self,
        capability: &'static str,
        operation: &'static str,
        result: Result<(), BridgeError>,
    ) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                self.report_failure(capability, operation, &err);
                false
            }
        }
    }

    fn report_failure(&self, capability: &'static str, operation: &'static str, err: &BridgeError) {
        if err.is_cancellation() {
            debug!(capability, operation, "Cancelled by user");
            return;
        }

        warn!(capability, operation, error = %err, "Native call failed");
        let _ = self
            .events
            .emit(AppEvent::Capability(CapabilityEvent::Unavailable {
                capability: capability.to_string(),
                message: err.to_string(),
            }));
    }
}

impl fmt::Debug for NativeFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFeatures")
            .field("platform", &self.platform)
            .field("initialized", &self.is_initialized())
            .field("network", &self.network.current())
            .field("listeners", &self.active_listeners())
            .finish_non_exhaustive()
    }
}

async fn pump_network(
    mut stream: Box<dyn NetworkChangeStream>,
    store: NetworkStatusStore,
    events: EventBus,
) {
    while let Some(status) = stream.next().await {
        debug!(
            connected = status.connected,
            connection_type = ?status.connection_type,
            "Network status changed"
        );
        store.replace(status);
        let _ = events.emit(AppEvent::Network(status.into()));
    }
    debug!("Network change stream ended");
}

async fn pump_lifecycle(mut stream: Box<dyn LifecycleEventStream>, events: EventBus) {
    while let Some(event) = stream.next().await {
        match &event {
            LifecycleEvent::StateChanged { is_active } => {
                info!(is_active, "App state changed");
            }
            LifecycleEvent::UrlOpened { url } => {
                info!(url = strip_query(url), "App opened with URL");
            }
        }
        let _ = events.emit(AppEvent::Lifecycle(event));
    }
    debug!("Lifecycle stream ended");
}

/// Deep links may carry tokens in their query string.
fn strip_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

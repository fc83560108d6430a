//! Mocks shared by the core-service integration suites.
#![allow(dead_code)]

use async_trait::async_trait;
use bridge_traits::{
    error::Result, AppLifecycle, CaptureOptions, CapturedPhoto, Clipboard, ConnectionType,
    DeviceInfo, DeviceInfoProvider, FixedHostProbe, Geolocation, Haptics, ImpactStyle, Keyboard,
    LifecycleEvent, LifecycleEventStream, NativeShare, NetworkChangeStream, NetworkMonitor,
    NetworkStatus, PhotoCapture, PlatformMode, Position, PreferenceStore, SessionProvider,
    SessionUser, ShareRequest, SplashScreen, StatusBar, StatusBarStyle, ToastRequest, Toaster,
    UserProfile, WebShare,
};
use core_runtime::config::AppConfig;
use core_service::components::Router;
use core_service::{Notification, Notifier};
use mockall::mock;
use std::sync::Arc;
use tokio::sync::mpsc;

mock! {
    pub Camera {}
    #[async_trait]
    impl PhotoCapture for Camera {
        async fn get_photo(&self, options: CaptureOptions) -> Result<CapturedPhoto>;
    }
}

mock! {
    pub Geo {}
    #[async_trait]
    impl Geolocation for Geo {
        async fn current_position(&self) -> Result<Position>;
    }
}

mock! {
    pub Share {}
    #[async_trait]
    impl NativeShare for Share {
        async fn share(&self, request: &ShareRequest) -> Result<()>;
    }
}

mock! {
    pub Haptic {}
    #[async_trait]
    impl Haptics for Haptic {
        async fn impact(&self, style: ImpactStyle) -> Result<()>;
    }
}

mock! {
    pub Toast {}
    #[async_trait]
    impl Toaster for Toast {
        async fn show(&self, request: ToastRequest) -> Result<()>;
    }
}

mock! {
    pub Bar {}
    #[async_trait]
    impl StatusBar for Bar {
        async fn set_style(&self, style: StatusBarStyle) -> Result<()>;
        async fn set_background_color(&self, color: &str) -> Result<()>;
    }
}

mock! {
    pub Keys {}
    #[async_trait]
    impl Keyboard for Keys {
        async fn hide(&self) -> Result<()>;
    }
}

mock! {
    pub Splash {}
    #[async_trait]
    impl SplashScreen for Splash {
        async fn hide(&self) -> Result<()>;
    }
}

mock! {
    pub Device {}
    #[async_trait]
    impl DeviceInfoProvider for Device {
        async fn get_info(&self) -> Result<DeviceInfo>;
    }
}

mock! {
    pub Network {}
    #[async_trait]
    impl NetworkMonitor for Network {
        async fn get_status(&self) -> Result<NetworkStatus>;
        async fn is_connected(&self) -> bool;
        async fn subscribe_changes(&self) -> Result<Box<dyn NetworkChangeStream>>;
    }
}

mock! {
    pub Lifecycle {}
    #[async_trait]
    impl AppLifecycle for Lifecycle {
        async fn subscribe(&self) -> Result<Box<dyn LifecycleEventStream>>;
    }
}

mock! {
    pub Prefs {}
    #[async_trait]
    impl PreferenceStore for Prefs {
        async fn set(&self, key: &str, value: &str) -> Result<()>;
        async fn get(&self, key: &str) -> Result<Option<String>>;
        async fn remove(&self, key: &str) -> Result<()>;
        async fn keys(&self) -> Result<Vec<String>>;
        async fn clear(&self) -> Result<()>;
        async fn contains(&self, key: &str) -> Result<bool>;
    }
}

mock! {
    pub BrowserShare {}
    #[async_trait]
    impl WebShare for BrowserShare {
        async fn share(&self, request: &ShareRequest) -> Result<()>;
    }
}

mock! {
    pub Clip {}
    #[async_trait]
    impl Clipboard for Clip {
        async fn write_text(&self, text: &str) -> Result<()>;
    }
}

mock! {
    pub Notify {}
    impl Notifier for Notify {
        fn notify(&self, notification: Notification);
    }
}

mock! {
    pub Session {}
    #[async_trait]
    impl SessionProvider for Session {
        fn current_user(&self) -> Option<SessionUser>;
        fn profile(&self) -> Option<UserProfile>;
        async fn sign_out(&self) -> Result<()>;
    }
}

mock! {
    pub Nav {}
    impl Router for Nav {
        fn navigate(&self, path: &str);
        fn current_path(&self) -> String;
    }
}

/// Stream fed from a test-owned channel.
pub struct ChannelStream<T>(pub mpsc::UnboundedReceiver<T>);

#[async_trait]
impl NetworkChangeStream for ChannelStream<NetworkStatus> {
    async fn next(&mut self) -> Option<NetworkStatus> {
        self.0.recv().await
    }
}

#[async_trait]
impl LifecycleEventStream for ChannelStream<LifecycleEvent> {
    async fn next(&mut self) -> Option<LifecycleEvent> {
        self.0.recv().await
    }
}

/// One mock per capability slot. Unconfigured mocks panic when called.
#[derive(Default)]
pub struct Mocks {
    pub camera: MockCamera,
    pub geo: MockGeo,
    pub share: MockShare,
    pub haptics: MockHaptic,
    pub toast: MockToast,
    pub status_bar: MockBar,
    pub keyboard: MockKeys,
    pub splash: MockSplash,
    pub device: MockDevice,
    pub network: MockNetwork,
    pub lifecycle: MockLifecycle,
    pub prefs: MockPrefs,
    pub web_share: Option<MockBrowserShare>,
    pub clipboard: Option<MockClip>,
}

impl Mocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect a complete, successful native initialization and return the
    /// senders feeding the two listener streams.
    pub fn expect_native_init(
        &mut self,
        initial: NetworkStatus,
    ) -> (
        mpsc::UnboundedSender<NetworkStatus>,
        mpsc::UnboundedSender<LifecycleEvent>,
    ) {
        self.status_bar
            .expect_set_style()
            .times(1)
            .returning(|_| Ok(()));
        self.status_bar
            .expect_set_background_color()
            .times(1)
            .returning(|_| Ok(()));
        self.splash.expect_hide().times(1).returning(|| Ok(()));
        self.device
            .expect_get_info()
            .times(1)
            .returning(|| Ok(android_device()));
        self.network
            .expect_get_status()
            .times(1)
            .returning(move || Ok(initial));

        let (network_tx, network_rx) = mpsc::unbounded_channel();
        self.network
            .expect_subscribe_changes()
            .times(1)
            .return_once(move || {
                Ok(Box::new(ChannelStream(network_rx)) as Box<dyn NetworkChangeStream>)
            });

        let (lifecycle_tx, lifecycle_rx) = mpsc::unbounded_channel();
        self.lifecycle
            .expect_subscribe()
            .times(1)
            .return_once(move || {
                Ok(Box::new(ChannelStream(lifecycle_rx)) as Box<dyn LifecycleEventStream>)
            });

        (network_tx, lifecycle_tx)
    }

    pub fn into_config(self, platform: PlatformMode) -> AppConfig {
        let mut builder = AppConfig::builder()
            .host_probe(Arc::new(FixedHostProbe(platform)))
            .camera(Arc::new(self.camera))
            .geolocation(Arc::new(self.geo))
            .native_share(Arc::new(self.share))
            .haptics(Arc::new(self.haptics))
            .toaster(Arc::new(self.toast))
            .status_bar(Arc::new(self.status_bar))
            .keyboard(Arc::new(self.keyboard))
            .splash_screen(Arc::new(self.splash))
            .device_info(Arc::new(self.device))
            .network_monitor(Arc::new(self.network))
            .lifecycle(Arc::new(self.lifecycle))
            .preferences(Arc::new(self.prefs));

        if let Some(web_share) = self.web_share {
            builder = builder.web_share(Arc::new(web_share));
        }
        if let Some(clipboard) = self.clipboard {
            builder = builder.clipboard(Arc::new(clipboard));
        }

        builder.build().expect("valid test config")
    }
}

pub fn android_device() -> DeviceInfo {
    DeviceInfo {
        name: None,
        model: "SM-A145F".to_string(),
        platform: "android".to_string(),
        operating_system: "android".to_string(),
        os_version: "13".to_string(),
        manufacturer: "samsung".to_string(),
        is_virtual: false,
        web_view_version: Some("120.0".to_string()),
    }
}

pub fn wifi() -> NetworkStatus {
    NetworkStatus::online(ConnectionType::Wifi)
}

/// Camera whose capture never completes, for abandoned presses.
pub struct StalledCamera;

#[async_trait]
impl PhotoCapture for StalledCamera {
    async fn get_photo(&self, _options: CaptureOptions) -> Result<CapturedPhoto> {
        std::future::pending().await
    }
}

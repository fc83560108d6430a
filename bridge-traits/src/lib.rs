//! # Host Bridge Traits
//!
//! Capability traits that each host shell implements for the marketplace
//! client core.
//!
//! ## Overview
//!
//! This crate defines the contract between the core and the native bridge
//! runtime. Each trait is one device capability the core may ask for; whether
//! the host can actually provide it is decided at startup, and a missing
//! capability fails through the ordinary [`BridgeError`] path.
//!
//! ## Traits
//!
//! ### Environment
//! - [`HostProbe`](platform::HostProbe) - Native shell or plain browser
//! - [`DeviceInfoProvider`](device::DeviceInfoProvider) - Device descriptor
//! - [`NetworkMonitor`](network::NetworkMonitor) - Connectivity and change events
//! - [`AppLifecycle`](lifecycle::AppLifecycle) - Foreground/background and deep links
//!
//! ### Device capabilities
//! - [`PhotoCapture`](camera::PhotoCapture) - Camera and gallery
//! - [`Geolocation`](location::Geolocation) - Current position
//! - [`NativeShare`](share::NativeShare) - Share sheet
//! - [`Haptics`](haptics::Haptics) - Impact feedback
//! - [`Toaster`](toast::Toaster) - OS toast messages
//! - [`PreferenceStore`](storage::PreferenceStore) - Key-value preferences
//! - [`StatusBar`](chrome::StatusBar), [`Keyboard`](chrome::Keyboard),
//!   [`SplashScreen`](chrome::SplashScreen) - System chrome
//!
//! ### Browser fallbacks
//! - [`WebShare`](share::WebShare) - `navigator.share`
//! - [`Clipboard`](share::Clipboard) - `navigator.clipboard`
//!
//! ### Collaborators and utilities
//! - [`SessionProvider`](session::SessionProvider) - Backend session
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//! - [`LoggerSink`](time::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Notes |
//! |----------|---------------------|-------|
//! | Desktop  | `bridge-desktop`    | preferences, network, device, lifecycle |
//! | Native WebView | `bridge-wasm` | native runtime plugins |
//! | Browser  | `bridge-wasm`       | share, clipboard, localStorage, onLine |
//!
//! ## Error Handling
//!
//! Implementations convert platform failures into [`BridgeError`] and
//! propagate them. Swallowing happens once, in the core façade.
//!
//! ## Thread Safety
//!
//! Traits require `Send + Sync` on native targets through
//! [`PlatformSendSync`](platform::PlatformSendSync); on `wasm32` the bound is
//! relaxed because browser handles are single-threaded.

pub mod camera;
pub mod chrome;
pub mod device;
pub mod error;
pub mod haptics;
pub mod lifecycle;
pub mod location;
pub mod network;
pub mod platform;
pub mod session;
pub mod share;
pub mod storage;
pub mod time;
pub mod toast;

pub use error::BridgeError;

// Re-export commonly used types
pub use camera::{CaptureOptions, CapturedPhoto, PhotoCapture, PhotoSource};
pub use chrome::{Keyboard, SplashScreen, StatusBar, StatusBarStyle};
pub use device::{DeviceInfo, DeviceInfoProvider};
pub use haptics::{Haptics, ImpactStyle};
pub use lifecycle::{AppLifecycle, LifecycleEvent, LifecycleEventStream};
pub use location::{Coordinates, Geolocation, Position};
pub use network::{ConnectionType, NetworkChangeStream, NetworkMonitor, NetworkStatus};
pub use platform::{FixedHostProbe, HostProbe, PlatformMode};
pub use session::{SessionProvider, SessionUser, UserProfile};
pub use share::{Clipboard, NativeShare, ShareRequest, WebShare};
pub use storage::PreferenceStore;
pub use time::{Clock, FixedClock, LogEntry, LogLevel, LoggerSink, SystemClock};
pub use toast::{ToastDuration, ToastPosition, ToastRequest, Toaster};

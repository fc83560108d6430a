//! # Desktop Bridge Implementations
//!
//! Bridge adapters for running the marketplace core in a desktop host
//! (macOS, Windows, Linux), where the Rust process itself is the shell.
//!
//! ## Overview
//!
//! - `PreferenceStore` backed by SQLite in the user data directory
//! - `NetworkMonitor` using TCP reachability polling
//! - `DeviceInfoProvider` from compile-time target facts
//! - `AppLifecycle` that only emits what the host forwards
//! - `HostProbe` that always reports native
//!
//! Camera, geolocation, share sheet, haptics, toasts and system chrome have
//! no desktop adapter; those slots stay unavailable.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{default_preferences_path, SqlitePreferenceStore};
//!
//! let path = default_preferences_path("daloa-market").expect("data dir");
//! let prefs = SqlitePreferenceStore::open(&path).await?;
//! ```

mod device;
mod lifecycle;
mod network;
mod preferences;

pub use device::DesktopDeviceInfo;
pub use lifecycle::{DesktopHostProbe, DesktopLifecycle};
pub use network::DesktopNetworkMonitor;
pub use preferences::{default_preferences_path, SqlitePreferenceStore};

//! Host classification and the threading markers shared by every bridge trait.
//!
//! Native targets require `Send + Sync` so bridge implementations can be
//! shared across async tasks. WebAssembly builds run on a single thread and
//! hold browser objects (`JsValue`, `web_sys` types) that cannot satisfy those
//! bounds, so the markers below relax to no-ops on `wasm32`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker trait that applies `Send + Sync` on native targets while becoming a
/// no-op on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// Marker trait equivalent to `Send` on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSend for T where T: Send {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSend {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSend for T {}

/// Where the application is running.
///
/// Decided once at startup by a [`HostProbe`] and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformMode {
    /// Inside a native shell with access to device plugins.
    Native,
    /// A plain browser tab.
    Web,
}

impl PlatformMode {
    pub fn is_native(self) -> bool {
        matches!(self, PlatformMode::Native)
    }
}

impl fmt::Display for PlatformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformMode::Native => f.write_str("native"),
            PlatformMode::Web => f.write_str("web"),
        }
    }
}

/// Detects whether the host exposes native capabilities.
///
/// # Platform Support
///
/// - **Desktop**: always native (the Rust host is the shell)
/// - **Web**: checks the native runtime global injected into the WebView
pub trait HostProbe: PlatformSendSync {
    fn probe(&self) -> PlatformMode;
}

/// Probe that reports a fixed mode. Useful for hosts that already know where
/// they run, and for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedHostProbe(pub PlatformMode);

impl HostProbe for FixedHostProbe {
    fn probe(&self) -> PlatformMode {
        self.0
    }
}

//! WebAssembly bridge implementations.
//!
//! Implements the `bridge-traits` capabilities for the WebView build. Inside
//! the native shell calls go to the native runtime's plugins; in a plain
//! browser a smaller set of Web APIs stands in.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It compiles to nothing on native targets.
//!
//! # Implementations
//!
//! - [`CapacitorBridge`]: every native capability through the plugin registry
//! - [`BrowserHostProbe`]: native shell or plain browser
//! - [`BrowserWebShare`], [`BrowserClipboard`]: share fallbacks
//! - [`BrowserNetworkMonitor`]: `navigator.onLine` and window events
//! - [`LocalStoragePreferenceStore`]: namespaced `localStorage` preferences
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::{build_wasm_bridges, WasmBridgeConfig};
//!
//! let bridges = build_wasm_bridges(WasmBridgeConfig::new("daloa-market"))?;
//! if let Some(network) = &bridges.network {
//!     let status = network.get_status().await?;
//! }
//! ```

#![cfg(target_arch = "wasm32")]

pub mod bootstrap;
pub mod browser;
pub mod capacitor;
pub mod error;
pub mod storage;

pub use bootstrap::{build_wasm_bridges, WasmBridgeConfig, WasmBridgeSet};
pub use browser::{BrowserClipboard, BrowserHostProbe, BrowserNetworkMonitor, BrowserWebShare};
pub use capacitor::{is_native_platform, CapacitorBridge};
pub use error::{WasmError, WasmResult};
pub use storage::LocalStoragePreferenceStore;

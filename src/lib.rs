//! Umbrella crate for the marketplace client core.
//!
//! Re-exports the crates a host needs and maps the host-level feature flags
//! (`desktop-shims`, `wasm`) onto them, so an application depends on one
//! crate instead of wiring each workspace member.

pub use bridge_traits as bridge;
pub use core_runtime as runtime;
pub use core_service as service;

pub use core_runtime::config::AppConfig;
pub use core_runtime::logging::{init_logging, LoggingConfig};
pub use core_service::{CoreService, NativeFeatures};

#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
pub use core_service::bootstrap_desktop;

#[cfg(feature = "wasm")]
pub use core_service::{bootstrap_wasm, WasmBridgeConfig};

//! Error types for WebAssembly bridge implementations

use bridge_traits::error::BridgeError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type for WebAssembly bridge operations
pub type WasmResult<T> = Result<T, WasmError>;

/// Errors raised while talking to browser or native runtime JavaScript
#[derive(Error, Debug)]
pub enum WasmError {
    /// A rejected promise or thrown exception
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// The native runtime does not expose the named plugin
    #[error("Plugin not available: {0}")]
    PluginMissing(String),

    /// A browser API is missing from this environment
    #[error("Browser API not available: {0}")]
    ApiMissing(String),

    /// Values could not cross the JS boundary
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The user dismissed a system sheet
    #[error("Operation cancelled")]
    Cancelled,
}

impl WasmError {
    /// Classify a rejection from the browser or a plugin.
    ///
    /// `AbortError` DOM exceptions and plugin messages mentioning
    /// cancellation mean the user backed out.
    pub fn from_rejection(value: JsValue) -> Self {
        if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
            if exception.name() == "AbortError" {
                return WasmError::Cancelled;
            }
            return WasmError::JavaScript(exception.message());
        }

        let message = js_message(&value);
        if message.to_lowercase().contains("cancel") {
            WasmError::Cancelled
        } else {
            WasmError::JavaScript(message)
        }
    }
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        text
    } else if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        error.message().into()
    } else {
        format!("{value:?}")
    }
}

impl From<JsValue> for WasmError {
    fn from(value: JsValue) -> Self {
        WasmError::JavaScript(js_message(&value))
    }
}

impl From<serde_wasm_bindgen::Error> for WasmError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WasmError::Serialization(err.to_string())
    }
}

impl From<WasmError> for BridgeError {
    fn from(err: WasmError) -> Self {
        match err {
            WasmError::Cancelled => BridgeError::Cancelled,
            WasmError::PluginMissing(name) | WasmError::ApiMissing(name) => {
                BridgeError::NotAvailable(name)
            }
            WasmError::JavaScript(message) => {
                let lower = message.to_lowercase();
                if lower.contains("denied") || lower.contains("permission") {
                    BridgeError::PermissionDenied(message)
                } else {
                    BridgeError::OperationFailed(message)
                }
            }
            WasmError::Serialization(message) => BridgeError::OperationFailed(message),
        }
    }
}

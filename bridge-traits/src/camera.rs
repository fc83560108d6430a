//! Photo acquisition from the device camera or gallery.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Where a photo comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotoSource {
    /// Launch the camera
    #[serde(rename = "CAMERA")]
    Camera,
    /// Pick from the photo library
    #[serde(rename = "PHOTOS")]
    Gallery,
}

/// Options forwarded to the camera plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    pub source: PhotoSource,
    /// JPEG quality, 1-100
    pub quality: u8,
    pub allow_editing: bool,
}

impl CaptureOptions {
    pub fn new(source: PhotoSource) -> Self {
        Self {
            source,
            quality: 90,
            allow_editing: false,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_editing(mut self, allow_editing: bool) -> Self {
        self.allow_editing = allow_editing;
        self
    }
}

/// A photo handed back by the host.
///
/// The bridge never keeps it; ownership moves to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPhoto {
    /// Platform-local URI or path, preferring one the WebView can load
    pub local_reference: String,
    /// Image format reported by the host (e.g. `jpeg`)
    pub format: Option<String>,
}

impl CapturedPhoto {
    pub fn new(local_reference: impl Into<String>) -> Self {
        Self {
            local_reference: local_reference.into(),
            format: None,
        }
    }
}

/// Camera / gallery access.
///
/// Implementations return `BridgeError::Cancelled` when the user dismisses
/// the picker and `BridgeError::PermissionDenied` when access is refused.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait PhotoCapture: PlatformSendSync {
    async fn get_photo(&self, options: CaptureOptions) -> Result<CapturedPhoto>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_option_defaults() {
        let options = CaptureOptions::new(PhotoSource::Gallery);
        assert_eq!(options.quality, 90);
        assert!(!options.allow_editing);

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["source"], "PHOTOS");
        assert_eq!(json["allowEditing"], false);
    }
}

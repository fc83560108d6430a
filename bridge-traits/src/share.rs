//! Sharing: the native share sheet and its browser fallbacks.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Content handed to a share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Title of the chooser dialog (Android only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_title: Option<String>,
}

impl ShareRequest {
    pub fn new(title: impl Into<String>, text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url,
            dialog_title: None,
        }
    }

    pub fn with_dialog_title(mut self, dialog_title: impl Into<String>) -> Self {
        self.dialog_title = Some(dialog_title.into());
        self
    }

    /// Newline-joined payload used when only a clipboard is available.
    ///
    /// ```
    /// use bridge_traits::share::ShareRequest;
    ///
    /// let request = ShareRequest::new("Vélo", "Bon état", None);
    /// assert_eq!(request.plain_text(), "Vélo\nBon état");
    /// ```
    pub fn plain_text(&self) -> String {
        match &self.url {
            Some(url) => format!("{}\n{}\n{}", self.title, self.text, url),
            None => format!("{}\n{}", self.title, self.text),
        }
    }
}

/// Native share sheet provided by the shell.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait NativeShare: PlatformSendSync {
    async fn share(&self, request: &ShareRequest) -> Result<()>;
}

/// Browser share capability (`navigator.share`).
///
/// Returns `BridgeError::Cancelled` when the user dismisses the sheet.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait WebShare: PlatformSendSync {
    async fn share(&self, request: &ShareRequest) -> Result<()>;
}

/// Clipboard write access.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Clipboard: PlatformSendSync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_with_url() {
        let request = ShareRequest::new(
            "Canapé",
            "3 places",
            Some("https://example.com/listings/1".to_string()),
        );
        assert_eq!(
            request.plain_text(),
            "Canapé\n3 places\nhttps://example.com/listings/1"
        );
    }

    #[test]
    fn test_serialization_skips_missing_url() {
        let request = ShareRequest::new("a", "b", None).with_dialog_title("Partager via");
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("url").is_none());
        assert_eq!(json["dialogTitle"], "Partager via");
    }
}

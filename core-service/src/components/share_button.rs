//! Share trigger with browser fallbacks.

use crate::features::{NativeFeatures, ShareResult};
use crate::notifications::{Notifier, NotifierExt};
use bridge_traits::{ImpactStyle, ShareRequest};
use tracing::{debug, warn};

pub const SHARE_LABEL: &str = "Partager";

/// Which path a press took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share sheet, including a dismissed one.
    Native(ShareResult),
    /// `navigator.share`, including a dismissed sheet.
    Browser,
    Copied,
    /// No native shell, no Web Share and the clipboard write failed.
    Failed,
}

pub struct ShareButton<'a> {
    features: &'a NativeFeatures,
    notifier: &'a dyn Notifier,
}

impl<'a> ShareButton<'a> {
    pub fn new(features: &'a NativeFeatures, notifier: &'a dyn Notifier) -> Self {
        Self { features, notifier }
    }

    pub fn label(&self) -> &'static str {
        SHARE_LABEL
    }

    pub async fn press(&self, title: &str, text: &str, url: Option<&str>) -> ShareOutcome {
        let settings = self.features.toast_settings();
        self.features.vibrate(ImpactStyle::Medium).await;

        if self.features.is_native() {
            let result = self.features.open_share_sheet(title, text, url).await;
            if result == ShareResult::Failed {
                self.notifier.notify_error(settings, "Erreur lors du partage");
            }
            return ShareOutcome::Native(result);
        }

        let request = ShareRequest::new(title, text, url.map(str::to_string));

        if let Some(web_share) = &self.features.browser().web_share {
            match web_share.share(&request).await {
                Ok(()) => debug!("Shared through Web Share"),
                Err(err) if err.is_cancellation() => debug!("Web share dismissed"),
                Err(err) => warn!(error = %err, "Web share failed"),
            }
            return ShareOutcome::Browser;
        }

        let copied = match &self.features.browser().clipboard {
            Some(clipboard) => match clipboard.write_text(&request.plain_text()).await {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "Clipboard write failed");
                    false
                }
            },
            None => {
                warn!("No share fallback available");
                false
            }
        };

        if copied {
            self.notifier
                .notify_success(settings, "Lien copié dans le presse-papier");
            ShareOutcome::Copied
        } else {
            self.notifier
                .notify_error(settings, "Impossible de copier le lien");
            ShareOutcome::Failed
        }
    }
}

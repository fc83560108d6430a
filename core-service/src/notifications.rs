//! In-app notifications.
//!
//! Components never draw anything themselves; they hand a [`Notification`]
//! to a [`Notifier`] and the UI layer renders whatever arrives on the
//! [`NotificationCenter`] broadcast.

use bridge_traits::platform::PlatformSendSync;
use core_runtime::config::{NotificationPlacement, ToastSettings};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration_ms: u64,
    pub placement: NotificationPlacement,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>, settings: &ToastSettings) -> Self {
        Self {
            kind,
            message: message.into(),
            duration_ms: settings.duration_ms,
            placement: settings.placement,
        }
    }
}

/// Sink for transient user-facing messages.
pub trait Notifier: PlatformSendSync {
    fn notify(&self, notification: Notification);
}

/// Broadcasts notifications to every UI subscriber.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    sender: broadcast::Sender<Notification>,
    settings: ToastSettings,
}

impl NotificationCenter {
    pub fn new(settings: ToastSettings) -> Self {
        let (sender, _) = broadcast::channel(32);
        Self { sender, settings }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message);
    }

    fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        self.notify(Notification::new(kind, message, &self.settings));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(ToastSettings::default())
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        debug!(kind = ?notification.kind, "Notification");
        // Nobody rendering is fine.
        let _ = self.sender.send(notification);
    }
}

/// Shorthands for components holding a `dyn Notifier`.
pub(crate) trait NotifierExt {
    fn notify_success(&self, settings: &ToastSettings, message: impl Into<String>);
    fn notify_error(&self, settings: &ToastSettings, message: impl Into<String>);
}

impl<N: Notifier + ?Sized> NotifierExt for N {
    fn notify_success(&self, settings: &ToastSettings, message: impl Into<String>) {
        self.notify(Notification::new(NotificationKind::Success, message, settings));
    }

    fn notify_error(&self, settings: &ToastSettings, message: impl Into<String>) {
        self.notify(Notification::new(NotificationKind::Error, message, settings));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_center_applies_settings() {
        let center = NotificationCenter::new(ToastSettings {
            duration_ms: 2500,
            ..ToastSettings::default()
        });
        let mut rx = center.subscribe();

        center.error("Erreur lors du partage");

        let received = rx.recv().await.unwrap();
        assert_eq!(received.kind, NotificationKind::Error);
        assert_eq!(received.message, "Erreur lors du partage");
        assert_eq!(received.duration_ms, 2500);
        assert_eq!(received.placement, NotificationPlacement::TopCenter);
    }

    #[test]
    fn test_notify_without_subscribers_is_silent() {
        NotificationCenter::default().info("personne");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(Notification::new(
            NotificationKind::Success,
            "ok",
            &ToastSettings::default(),
        ))
        .unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["durationMs"], 4000);
        assert_eq!(json["placement"], "top-center");
    }
}

//! Offline banner.

use crate::features::NativeFeatures;
use bridge_traits::{NetworkStatus, PlatformMode};
use serde::Serialize;

pub const OFFLINE_MESSAGE: &str = "Aucune connexion Internet";

/// Fixed-position banner shown while the device is offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfflineBanner {
    pub message: &'static str,
}

/// Shown only inside the native shell, once a status is known, and only
/// while disconnected.
pub fn offline_banner(platform: PlatformMode, status: Option<NetworkStatus>) -> Option<OfflineBanner> {
    match (platform, status) {
        (PlatformMode::Native, Some(status)) if !status.connected => Some(OfflineBanner {
            message: OFFLINE_MESSAGE,
        }),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NetworkIndicator<'a> {
    features: &'a NativeFeatures,
}

impl<'a> NetworkIndicator<'a> {
    pub fn new(features: &'a NativeFeatures) -> Self {
        Self { features }
    }

    pub fn view(&self) -> Option<OfflineBanner> {
        offline_banner(self.features.platform(), self.features.network_status())
    }
}

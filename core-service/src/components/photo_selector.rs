//! Camera/gallery picker for the listing form.
//!
//! Only rendered inside the native shell; the web form uses a file input
//! instead.

use crate::features::NativeFeatures;
use crate::notifications::{Notifier, NotifierExt};
use bridge_traits::{ImpactStyle, PhotoSource};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

pub const TAKE_PHOTO_LABEL: &str = "Prendre une photo";
pub const GALLERY_LABEL: &str = "Galerie";
pub const BUSY_LABEL: &str = "Traitement...";

/// Holds the loading flag for one capture; cleared on drop so an abandoned
/// press does not leave the buttons disabled.
struct Busy<'f>(&'f AtomicBool);

impl<'f> Busy<'f> {
    fn enter(flag: &'f AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Result of one button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoOutcome {
    Selected(String),
    /// Limit reached before any native call.
    LimitReached,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSelectorView {
    pub take_photo_label: &'static str,
    pub gallery_label: &'static str,
    pub buttons_enabled: bool,
    /// "N / M photos sélectionnées", once at least one photo is selected
    pub counter: Option<String>,
    pub busy_label: Option<&'static str>,
}

pub struct PhotoSelector<'a> {
    features: &'a NativeFeatures,
    notifier: &'a dyn Notifier,
    on_selected: Box<dyn Fn(String) + 'a>,
    max_photos: usize,
    loading: AtomicBool,
}

impl<'a> PhotoSelector<'a> {
    /// The limit defaults to the configured photo policy.
    pub fn new(
        features: &'a NativeFeatures,
        notifier: &'a dyn Notifier,
        on_selected: impl Fn(String) + 'a,
    ) -> Self {
        Self {
            features,
            notifier,
            on_selected: Box::new(on_selected),
            max_photos: features.photo_policy().max_photos,
            loading: AtomicBool::new(false),
        }
    }

    pub fn with_max_photos(mut self, max_photos: usize) -> Self {
        self.max_photos = max_photos;
        self
    }

    pub fn max_photos(&self) -> usize {
        self.max_photos
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub async fn take_photo(&self, selected: usize) -> PhotoOutcome {
        self.acquire(PhotoSource::Camera, selected).await
    }

    pub async fn select_photo(&self, selected: usize) -> PhotoOutcome {
        self.acquire(PhotoSource::Gallery, selected).await
    }

    async fn acquire(&self, source: PhotoSource, selected: usize) -> PhotoOutcome {
        let settings = self.features.toast_settings();
        if selected >= self.max_photos {
            debug!(selected, max = self.max_photos, "Photo limit reached");
            self.notifier.notify_error(
                settings,
                format!("Maximum {} photos autorisées", self.max_photos),
            );
            return PhotoOutcome::LimitReached;
        }

        let photo = {
            let _busy = Busy::enter(&self.loading);
            self.features.vibrate(ImpactStyle::Medium).await;
            self.features.capture_photo(source).await
        };

        let (success, failure) = match source {
            PhotoSource::Camera => (
                "Photo prise avec succès",
                "Erreur lors de la prise de photo",
            ),
            PhotoSource::Gallery => (
                "Photo sélectionnée avec succès",
                "Erreur lors de la sélection de photo",
            ),
        };

        match photo {
            Some(photo) => {
                (self.on_selected)(photo.local_reference.clone());
                self.notifier.notify_success(settings, success);
                PhotoOutcome::Selected(photo.local_reference)
            }
            None => {
                self.notifier.notify_error(settings, failure);
                PhotoOutcome::Failed
            }
        }
    }

    /// `None` outside the native shell.
    pub fn view(&self, selected: usize) -> Option<PhotoSelectorView> {
        if !self.features.is_native() {
            return None;
        }

        let loading = self.is_loading();
        Some(PhotoSelectorView {
            take_photo_label: TAKE_PHOTO_LABEL,
            gallery_label: GALLERY_LABEL,
            buttons_enabled: !loading && selected < self.max_photos,
            counter: (selected > 0)
                .then(|| format!("{selected} / {} photos sélectionnées", self.max_photos)),
            busy_label: loading.then_some(BUSY_LABEL),
        })
    }
}

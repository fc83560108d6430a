//! Presentation components over the capability bridge.
//!
//! Components hold no platform logic of their own: they read the bridge's
//! published state, call its operations, and report to the user through a
//! [`Notifier`](crate::notifications::Notifier). Views are plain data for the
//! rendering layer.

pub mod listing_card;
pub mod navigation;
pub mod network_indicator;
pub mod photo_selector;
pub mod share_button;

pub use listing_card::{Listing, ListingCardOptions, ListingCardView, ListingStatus};
pub use navigation::{DrawerView, Header, HeaderView, MobileMenu, Route, Router};
pub use network_indicator::{offline_banner, NetworkIndicator, OfflineBanner};
pub use photo_selector::{PhotoOutcome, PhotoSelector, PhotoSelectorView};
pub use share_button::{ShareButton, ShareOutcome};

mod common;

use bridge_traits::{
    BridgeError, CapturedPhoto, FixedHostProbe, ImpactStyle, NetworkStatus, PhotoSource,
    PlatformMode, SessionUser, ShareRequest, UserProfile,
};
use common::{wifi, MockClip, MockNav, MockNotify, MockSession, Mocks, StalledCamera};
use core_runtime::config::AppConfig;
use core_service::components::navigation::SIGN_OUT_LABEL;
use core_service::components::{
    Header, MobileMenu, NetworkIndicator, PhotoOutcome, PhotoSelector, ShareButton, ShareOutcome,
};
use core_service::{NativeFeatures, Notification, NotificationKind, ShareResult};
use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::time::Duration;

fn expect_notification(notifier: &mut MockNotify, kind: NotificationKind, message: &'static str) {
    notifier
        .expect_notify()
        .withf(move |n: &Notification| n.kind == kind && n.message == message)
        .times(1)
        .return_const(());
}

fn expect_haptic(mocks: &mut Mocks) {
    mocks
        .haptics
        .expect_impact()
        .withf(|style| *style == ImpactStyle::Medium)
        .times(1)
        .returning(|_| Ok(()));
}

// ---------------------------------------------------------------------------
// Photo selector
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_photo_limit_rejects_without_touching_the_bridge() {
    // No camera or haptics expectations: any call panics.
    let features = NativeFeatures::new(Mocks::new().into_config(PlatformMode::Native));
    let mut notifier = MockNotify::new();
    expect_notification(
        &mut notifier,
        NotificationKind::Error,
        "Maximum 5 photos autorisées",
    );
    let selected = RefCell::new(Vec::new());
    let selector = PhotoSelector::new(&features, &notifier, |r| selected.borrow_mut().push(r));

    assert_eq!(selector.take_photo(5).await, PhotoOutcome::LimitReached);
    assert!(selected.borrow().is_empty());
}

#[tokio::test]
async fn test_gallery_limit_rejects_without_touching_the_bridge() {
    let features = NativeFeatures::new(Mocks::new().into_config(PlatformMode::Native));
    let mut notifier = MockNotify::new();
    expect_notification(
        &mut notifier,
        NotificationKind::Error,
        "Maximum 5 photos autorisées",
    );
    let selected = RefCell::new(Vec::new());
    let selector = PhotoSelector::new(&features, &notifier, |r| selected.borrow_mut().push(r));

    assert_eq!(selector.select_photo(5).await, PhotoOutcome::LimitReached);
    assert!(selected.borrow().is_empty());
}

#[tokio::test]
async fn test_abandoned_capture_releases_buttons() {
    let mut mocks = Mocks::new();
    expect_haptic(&mut mocks);
    let config = AppConfig::builder()
        .host_probe(Arc::new(FixedHostProbe(PlatformMode::Native)))
        .haptics(Arc::new(mocks.haptics))
        .camera(Arc::new(StalledCamera))
        .preferences(Arc::new(mocks.prefs))
        .build()
        .unwrap();
    let features = NativeFeatures::new(config);
    let notifier = MockNotify::new();
    let selector = PhotoSelector::new(&features, &notifier, |_| {});

    tokio::select! {
        _ = selector.take_photo(0) => panic!("capture should still be pending"),
        _ = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            assert!(selector.is_loading());
            assert!(!selector.view(0).unwrap().buttons_enabled);
        } => {}
    }

    assert!(!selector.is_loading());
    assert!(selector.view(0).unwrap().buttons_enabled);
}

#[tokio::test]
async fn test_photo_success_forwards_reference_and_confirms() {
    let mut mocks = Mocks::new();
    expect_haptic(&mut mocks);
    mocks
        .camera
        .expect_get_photo()
        .withf(|options| options.source == PhotoSource::Camera)
        .times(1)
        .returning(|_| Ok(CapturedPhoto::new("http://localhost/_capacitor_file_/p1.jpeg")));
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Native));
    let mut notifier = MockNotify::new();
    expect_notification(&mut notifier, NotificationKind::Success, "Photo prise avec succès");

    let selected = RefCell::new(Vec::new());
    let selector = PhotoSelector::new(&features, &notifier, |r| selected.borrow_mut().push(r));

    let outcome = selector.take_photo(2).await;
    assert!(matches!(outcome, PhotoOutcome::Selected(ref r) if r.ends_with("p1.jpeg")));
    assert_eq!(selected.borrow().len(), 1);
    assert!(!selector.is_loading());
}

#[tokio::test]
async fn test_photo_failure_notifies_error() {
    let mut mocks = Mocks::new();
    expect_haptic(&mut mocks);
    mocks
        .camera
        .expect_get_photo()
        .times(1)
        .returning(|_| Err(BridgeError::PermissionDenied("photos".to_string())));
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Native));
    let mut notifier = MockNotify::new();
    expect_notification(
        &mut notifier,
        NotificationKind::Error,
        "Erreur lors de la sélection de photo",
    );

    let selector = PhotoSelector::new(&features, &notifier, |_| panic!("no photo expected"));
    assert_eq!(selector.select_photo(0).await, PhotoOutcome::Failed);
}

#[test]
fn test_photo_selector_view() {
    let web = NativeFeatures::new(Mocks::new().into_config(PlatformMode::Web));
    let notifier = MockNotify::new();
    assert!(PhotoSelector::new(&web, &notifier, |_| {}).view(0).is_none());

    let native = NativeFeatures::new(Mocks::new().into_config(PlatformMode::Native));
    let selector = PhotoSelector::new(&native, &notifier, |_| {}).with_max_photos(3);

    let empty = selector.view(0).unwrap();
    assert!(empty.buttons_enabled);
    assert_eq!(empty.counter, None);
    assert_eq!(empty.busy_label, None);

    let partial = selector.view(2).unwrap();
    assert_eq!(partial.counter.as_deref(), Some("2 / 3 photos sélectionnées"));

    assert!(!selector.view(3).unwrap().buttons_enabled);
}

// ---------------------------------------------------------------------------
// Share trigger
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_native_share_failure_notifies() {
    let mut mocks = Mocks::new();
    expect_haptic(&mut mocks);
    mocks
        .share
        .expect_share()
        .times(1)
        .returning(|_| Err(BridgeError::OperationFailed("no activity".to_string())));
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Native));
    let mut notifier = MockNotify::new();
    expect_notification(&mut notifier, NotificationKind::Error, "Erreur lors du partage");

    let outcome = ShareButton::new(&features, &notifier)
        .press("Moto", "Bon état", None)
        .await;
    assert_eq!(outcome, ShareOutcome::Native(ShareResult::Failed));
}

#[tokio::test]
async fn test_native_share_cancellation_is_silent() {
    let mut mocks = Mocks::new();
    expect_haptic(&mut mocks);
    mocks
        .share
        .expect_share()
        .times(1)
        .returning(|_| Err(BridgeError::Cancelled));
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Native));
    // No expectations: any notification panics.
    let notifier = MockNotify::new();

    let outcome = ShareButton::new(&features, &notifier)
        .press("Moto", "Bon état", None)
        .await;
    assert_eq!(outcome, ShareOutcome::Native(ShareResult::Cancelled));
}

#[tokio::test]
async fn test_browser_share_cancellation_is_silent() {
    let mut mocks = Mocks::new();
    expect_haptic(&mut mocks);
    let mut web_share = common::MockBrowserShare::new();
    web_share
        .expect_share()
        .times(1)
        .returning(|_| Err(BridgeError::Cancelled));
    mocks.web_share = Some(web_share);
    // Clipboard must stay untouched.
    mocks.clipboard = Some(MockClip::new());
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Web));
    let notifier = MockNotify::new();

    let outcome = ShareButton::new(&features, &notifier)
        .press("Moto", "Bon état", Some("https://daloa.market/listings/3"))
        .await;
    assert_eq!(outcome, ShareOutcome::Browser);
}

async fn clipboard_fallback(url: Option<&'static str>, expected: &'static str) {
    let mut mocks = Mocks::new();
    expect_haptic(&mut mocks);
    let mut clipboard = MockClip::new();
    clipboard
        .expect_write_text()
        .withf(move |text: &str| text == expected)
        .times(1)
        .returning(|_| Ok(()));
    mocks.clipboard = Some(clipboard);
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Web));
    let mut notifier = MockNotify::new();
    expect_notification(
        &mut notifier,
        NotificationKind::Success,
        "Lien copié dans le presse-papier",
    );

    let outcome = ShareButton::new(&features, &notifier)
        .press("Moto", "Bon état", url)
        .await;
    assert_eq!(outcome, ShareOutcome::Copied);
}

#[tokio::test]
async fn test_clipboard_fallback_with_url() {
    clipboard_fallback(
        Some("https://daloa.market/listings/3"),
        "Moto\nBon état\nhttps://daloa.market/listings/3",
    )
    .await;
}

#[tokio::test]
async fn test_clipboard_fallback_without_url() {
    clipboard_fallback(None, "Moto\nBon état").await;
}

#[tokio::test]
async fn test_no_fallback_reports_failure() {
    let mut mocks = Mocks::new();
    expect_haptic(&mut mocks);
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Web));
    let mut notifier = MockNotify::new();
    expect_notification(
        &mut notifier,
        NotificationKind::Error,
        "Impossible de copier le lien",
    );

    let outcome = ShareButton::new(&features, &notifier)
        .press("Moto", "Bon état", None)
        .await;
    assert_eq!(outcome, ShareOutcome::Failed);
    assert_eq!(
        ShareRequest::new("Moto", "Bon état", None).plain_text(),
        "Moto\nBon état"
    );
}

// ---------------------------------------------------------------------------
// Network indicator
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_indicator_follows_initial_status() {
    let mut mocks = Mocks::new();
    let _senders = mocks.expect_native_init(NetworkStatus::offline());
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Native));

    assert!(NetworkIndicator::new(&features).view().is_none());
    features.initialize().await;
    let banner = NetworkIndicator::new(&features).view().unwrap();
    assert_eq!(banner.message, "Aucune connexion Internet");
}

#[tokio::test]
async fn test_indicator_hidden_when_online() {
    let mut mocks = Mocks::new();
    let _senders = mocks.expect_native_init(wifi());
    let features = NativeFeatures::new(mocks.into_config(PlatformMode::Native));
    features.initialize().await;

    assert!(NetworkIndicator::new(&features).view().is_none());
}

// ---------------------------------------------------------------------------
// Navigation chrome
// ---------------------------------------------------------------------------

fn signed_in(full_name: Option<&str>) -> MockSession {
    let mut session = MockSession::new();
    session.expect_current_user().returning(|| {
        Some(SessionUser {
            id: "u-1".to_string(),
            email: Some("awa@example.com".to_string()),
        })
    });
    let profile = UserProfile {
        full_name: full_name.map(str::to_string),
    };
    session
        .expect_profile()
        .returning(move || Some(profile.clone()));
    session
}

fn router_at(path: &'static str) -> MockNav {
    let mut router = MockNav::new();
    router
        .expect_current_path()
        .returning(move || path.to_string());
    router
}

#[test]
fn test_header_search_submission() {
    let mut router = MockNav::new();
    router
        .expect_navigate()
        .withf(|path: &str| path == "/search?q=t%C3%A9l%C3%A9phone%20samsung")
        .times(1)
        .return_const(());

    let mut header = Header::new();
    header.set_search_query("   ");
    assert!(!header.submit_search(&router));

    header.set_search_query("  téléphone samsung ");
    assert!(header.submit_search(&router));
}

#[test]
fn test_header_account_link_follows_session() {
    let header = Header::new();

    let view = header.view(&signed_in(Some("Awa")), "/profile");
    assert_eq!(view.account_link.path, "/profile");
    assert!(view.account_link.active);

    let mut anonymous = MockSession::new();
    anonymous.expect_current_user().returning(|| None);
    let view = header.view(&anonymous, "/");
    assert_eq!(view.account_link.path, "/login");
    assert_eq!(view.menu_button_label, "Ouvrir le menu");
}

#[test]
fn test_drawer_projection_signed_in() {
    let session = signed_in(Some("awa Koné"));
    let router = router_at("/messages");
    let view = MobileMenu::new(&session, &router).view();

    assert_eq!(view.avatar_initial, "A");
    assert_eq!(view.display_name, "awa Koné");
    assert_eq!(view.email.as_deref(), Some("awa@example.com"));
    let active: Vec<_> = view.items.iter().filter(|i| i.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].path, "/messages");
    assert_eq!(view.account_actions.len(), 2);
}

#[test]
fn test_drawer_projection_signed_out() {
    let mut session = MockSession::new();
    session.expect_current_user().returning(|| None);
    session.expect_profile().returning(|| None);
    let router = router_at("/");
    let view = MobileMenu::new(&session, &router).view();

    assert_eq!(view.avatar_initial, "U");
    assert_eq!(view.display_name, "Utilisateur");
    assert!(view.account_actions.is_empty());
    assert!(view.items[0].active);
}

#[tokio::test]
async fn test_sign_out_then_close_then_home() {
    let mut session = MockSession::new();
    session.expect_sign_out().times(1).returning(|| Ok(()));
    let mut router = MockNav::new();
    router
        .expect_navigate()
        .withf(|path: &str| path == "/")
        .times(1)
        .return_const(());

    let closed = Cell::new(false);
    MobileMenu::new(&session, &router)
        .sign_out(|| closed.set(true))
        .await
        .unwrap();
    assert!(closed.get());
    assert_eq!(SIGN_OUT_LABEL, "Sortir");
}

#[tokio::test]
async fn test_failed_sign_out_keeps_drawer_open() {
    let mut session = MockSession::new();
    session
        .expect_sign_out()
        .times(1)
        .returning(|| Err(BridgeError::OperationFailed("network".to_string())));
    let router = MockNav::new();

    let closed = Cell::new(false);
    let result = MobileMenu::new(&session, &router)
        .sign_out(|| closed.set(true))
        .await;
    assert!(result.is_err());
    assert!(!closed.get());
}

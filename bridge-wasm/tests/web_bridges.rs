#![cfg(target_arch = "wasm32")]

use bridge_traits::{BridgeError, HostProbe, PlatformMode, PreferenceStore};
use bridge_wasm::{
    build_wasm_bridges, BrowserHostProbe, LocalStoragePreferenceStore, WasmBridgeConfig,
    WasmError,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_plain_page_is_web() {
    assert_eq!(BrowserHostProbe.probe(), PlatformMode::Web);
}

#[wasm_bindgen_test]
async fn test_bootstrap_preferences_share_namespace_with_direct_store() {
    let namespace = format!("it-{}", js_sys::Date::now());
    let set = build_wasm_bridges(WasmBridgeConfig::new(namespace.clone())).unwrap();
    let prefs = set.preferences.expect("localStorage preferences");

    prefs.set("theme", "dark").await.unwrap();

    let direct = LocalStoragePreferenceStore::new(&namespace).unwrap();
    assert_eq!(direct.get("theme").await.unwrap().as_deref(), Some("dark"));
    direct.clear().await.unwrap();
}

#[wasm_bindgen_test]
fn test_web_share_detection_matches_navigator() {
    let navigator: JsValue = web_sys::window().unwrap().navigator().into();
    let has_share = js_sys::Reflect::has(&navigator, &JsValue::from_str("share")).unwrap();
    let set = build_wasm_bridges(WasmBridgeConfig::default()).unwrap();

    assert_eq!(set.web_share.is_some(), has_share);
}

#[wasm_bindgen_test]
fn test_rejection_messages_map_to_bridge_errors() {
    let cancelled = WasmError::from_rejection(JsValue::from_str("User cancelled photos app"));
    assert!(matches!(BridgeError::from(cancelled), BridgeError::Cancelled));

    let denied = WasmError::from_rejection(JsValue::from_str("Location permission was denied"));
    assert!(matches!(
        BridgeError::from(denied),
        BridgeError::PermissionDenied(_)
    ));

    let other = WasmError::from_rejection(JsValue::from_str("boom"));
    assert!(matches!(
        BridgeError::from(other),
        BridgeError::OperationFailed(_)
    ));
}

//! Adapters for the native runtime's JavaScript plugins.
//!
//! Inside the native WebView shell the runtime injects a global
//! `Capacitor.Plugins` object. Every call here resolves the plugin at call
//! time, invokes the method with a serialized options object, and awaits the
//! returned promise. A missing runtime or plugin surfaces as
//! [`WasmError::PluginMissing`], which becomes `BridgeError::NotAvailable`.

use async_trait::async_trait;
use bridge_traits::{
    camera::{CaptureOptions, CapturedPhoto, PhotoCapture},
    chrome::{Keyboard, SplashScreen, StatusBar, StatusBarStyle},
    device::{DeviceInfo, DeviceInfoProvider},
    error::Result as BridgeResult,
    haptics::{Haptics, ImpactStyle},
    lifecycle::{AppLifecycle, LifecycleEvent, LifecycleEventStream},
    location::{Geolocation, Position},
    network::{NetworkChangeStream, NetworkMonitor, NetworkStatus},
    share::{NativeShare, ShareRequest},
    storage::PreferenceStore,
    toast::{ToastRequest, Toaster},
};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use js_sys::{Function, Promise, Reflect};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{WasmError, WasmResult};

const APP: &str = "App";
const CAMERA: &str = "Camera";
const DEVICE: &str = "Device";
const GEOLOCATION: &str = "Geolocation";
const HAPTICS: &str = "Haptics";
const KEYBOARD: &str = "Keyboard";
const NETWORK: &str = "Network";
const PREFERENCES: &str = "Preferences";
const SHARE: &str = "Share";
const SPLASH_SCREEN: &str = "SplashScreen";
const STATUS_BAR: &str = "StatusBar";
const TOAST: &str = "Toast";

// ============================================================================
// Runtime access
// ============================================================================

fn capacitor_global() -> Option<JsValue> {
    let capacitor = Reflect::get(&js_sys::global(), &JsValue::from_str("Capacitor")).ok()?;
    (!capacitor.is_undefined() && !capacitor.is_null()).then_some(capacitor)
}

/// Whether the page runs inside the native shell.
pub fn is_native_platform() -> bool {
    let Some(capacitor) = capacitor_global() else {
        return false;
    };

    Reflect::get(&capacitor, &JsValue::from_str("isNativePlatform"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .and_then(|function| function.call0(&capacitor).ok())
        .and_then(|result| result.as_bool())
        .unwrap_or(false)
}

fn plugin(name: &str) -> WasmResult<JsValue> {
    let plugins = capacitor_global()
        .and_then(|capacitor| Reflect::get(&capacitor, &JsValue::from_str("Plugins")).ok())
        .filter(JsValue::is_object)
        .ok_or_else(|| WasmError::PluginMissing(name.to_string()))?;

    let plugin = Reflect::get(&plugins, &JsValue::from_str(name))?;
    if plugin.is_undefined() || plugin.is_null() {
        return Err(WasmError::PluginMissing(name.to_string()));
    }
    Ok(plugin)
}

fn method(target: &JsValue, plugin_name: &str, method_name: &str) -> WasmResult<Function> {
    Reflect::get(target, &JsValue::from_str(method_name))?
        .dyn_into::<Function>()
        .map_err(|_| WasmError::PluginMissing(format!("{plugin_name}.{method_name}")))
}

fn to_js<T: Serialize>(value: &T) -> WasmResult<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    Ok(value.serialize(&serializer)?)
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> WasmResult<T> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

async fn invoke(plugin_name: &str, method_name: &str, options: JsValue) -> WasmResult<JsValue> {
    let target = plugin(plugin_name)?;
    let function = method(&target, plugin_name, method_name)?;
    let returned = function
        .call1(&target, &options)
        .map_err(WasmError::from_rejection)?;

    let resolved = JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(WasmError::from_rejection)?;

    debug!(plugin = plugin_name, method = method_name, "Plugin call resolved");
    Ok(resolved)
}

async fn invoke_unit(plugin_name: &str, method_name: &str, options: JsValue) -> BridgeResult<()> {
    invoke(plugin_name, method_name, options).await?;
    Ok(())
}

// ============================================================================
// Listeners
// ============================================================================

/// A registered plugin listener. Dropping it removes the registration.
struct PluginListener {
    handle: JsValue,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl Drop for PluginListener {
    fn drop(&mut self) {
        let removed = Reflect::get(&self.handle, &JsValue::from_str("remove"))
            .and_then(|value| value.dyn_into::<Function>())
            .and_then(|remove| remove.call0(&self.handle));
        if removed.is_err() {
            warn!("Failed to remove plugin listener");
        }
    }
}

async fn add_listener<T, F>(
    plugin_name: &str,
    event: &str,
    sender: UnboundedSender<T>,
    decode: F,
) -> WasmResult<PluginListener>
where
    T: 'static,
    F: Fn(JsValue) -> Option<T> + 'static,
{
    let target = plugin(plugin_name)?;
    let add = method(&target, plugin_name, "addListener")?;

    let event_name = event.to_string();
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
        match decode(payload) {
            Some(item) => {
                let _ = sender.unbounded_send(item);
            }
            None => warn!(event = %event_name, "Ignoring undecodable listener payload"),
        }
    });

    let returned = add
        .call2(
            &target,
            &JsValue::from_str(event),
            callback.as_ref(),
        )
        .map_err(WasmError::from_rejection)?;
    let handle = JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(WasmError::from_rejection)?;

    debug!(plugin = plugin_name, event, "Listener registered");
    Ok(PluginListener {
        handle,
        _callback: callback,
    })
}

struct PluginNetworkStream {
    receiver: UnboundedReceiver<NetworkStatus>,
    _listener: PluginListener,
}

#[async_trait(?Send)]
impl NetworkChangeStream for PluginNetworkStream {
    async fn next(&mut self) -> Option<NetworkStatus> {
        self.receiver.next().await
    }
}

struct PluginLifecycleStream {
    receiver: UnboundedReceiver<LifecycleEvent>,
    _listeners: [PluginListener; 2],
}

#[async_trait(?Send)]
impl LifecycleEventStream for PluginLifecycleStream {
    async fn next(&mut self) -> Option<LifecycleEvent> {
        self.receiver.next().await
    }
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetPhotoOptions {
    quality: u8,
    allow_editing: bool,
    result_type: &'static str,
    source: bridge_traits::camera::PhotoSource,
}

impl From<CaptureOptions> for GetPhotoOptions {
    fn from(options: CaptureOptions) -> Self {
        Self {
            quality: options.quality,
            allow_editing: options.allow_editing,
            result_type: "uri",
            source: options.source,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhotoPayload {
    path: Option<String>,
    web_path: Option<String>,
    format: Option<String>,
}

impl PhotoPayload {
    fn into_photo(self) -> WasmResult<CapturedPhoto> {
        let reference = self.web_path.or(self.path).ok_or_else(|| {
            WasmError::JavaScript("Camera returned no photo reference".to_string())
        })?;
        Ok(CapturedPhoto {
            local_reference: reference,
            format: self.format,
        })
    }
}

#[derive(Serialize)]
struct StyleOptions {
    style: StatusBarStyle,
}

#[derive(Serialize)]
struct ImpactOptions {
    style: ImpactStyle,
}

#[derive(Serialize)]
struct ColorOptions<'a> {
    color: &'a str,
}

#[derive(Serialize)]
struct KeyOptions<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct KeyValueOptions<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Deserialize)]
struct ValuePayload {
    value: Option<String>,
}

#[derive(Deserialize)]
struct KeysPayload {
    keys: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppStatePayload {
    is_active: bool,
}

#[derive(Deserialize)]
struct UrlOpenPayload {
    url: String,
}

fn empty_options() -> JsValue {
    js_sys::Object::new().into()
}

// ============================================================================
// Bridge
// ============================================================================

/// Every capability backed by the native runtime plugins.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacitorBridge;

impl CapacitorBridge {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl PhotoCapture for CapacitorBridge {
    async fn get_photo(&self, options: CaptureOptions) -> BridgeResult<CapturedPhoto> {
        let options = to_js(&GetPhotoOptions::from(options))?;
        let payload: PhotoPayload = from_js(invoke(CAMERA, "getPhoto", options).await?)?;
        Ok(payload.into_photo()?)
    }
}

#[async_trait(?Send)]
impl Geolocation for CapacitorBridge {
    async fn current_position(&self) -> BridgeResult<Position> {
        let position = invoke(GEOLOCATION, "getCurrentPosition", empty_options()).await?;
        Ok(from_js(position)?)
    }
}

#[async_trait(?Send)]
impl NativeShare for CapacitorBridge {
    async fn share(&self, request: &ShareRequest) -> BridgeResult<()> {
        invoke_unit(SHARE, "share", to_js(request)?).await
    }
}

#[async_trait(?Send)]
impl Haptics for CapacitorBridge {
    async fn impact(&self, style: ImpactStyle) -> BridgeResult<()> {
        invoke_unit(HAPTICS, "impact", to_js(&ImpactOptions { style })?).await
    }
}

#[async_trait(?Send)]
impl Toaster for CapacitorBridge {
    async fn show(&self, request: ToastRequest) -> BridgeResult<()> {
        invoke_unit(TOAST, "show", to_js(&request)?).await
    }
}

#[async_trait(?Send)]
impl StatusBar for CapacitorBridge {
    async fn set_style(&self, style: StatusBarStyle) -> BridgeResult<()> {
        invoke_unit(STATUS_BAR, "setStyle", to_js(&StyleOptions { style })?).await
    }

    async fn set_background_color(&self, color: &str) -> BridgeResult<()> {
        invoke_unit(
            STATUS_BAR,
            "setBackgroundColor",
            to_js(&ColorOptions { color })?,
        )
        .await
    }
}

#[async_trait(?Send)]
impl Keyboard for CapacitorBridge {
    async fn hide(&self) -> BridgeResult<()> {
        invoke_unit(KEYBOARD, "hide", empty_options()).await
    }
}

#[async_trait(?Send)]
impl SplashScreen for CapacitorBridge {
    async fn hide(&self) -> BridgeResult<()> {
        invoke_unit(SPLASH_SCREEN, "hide", empty_options()).await
    }
}

#[async_trait(?Send)]
impl DeviceInfoProvider for CapacitorBridge {
    async fn get_info(&self) -> BridgeResult<DeviceInfo> {
        let info = invoke(DEVICE, "getInfo", empty_options()).await?;
        Ok(from_js(info)?)
    }
}

#[async_trait(?Send)]
impl NetworkMonitor for CapacitorBridge {
    async fn get_status(&self) -> BridgeResult<NetworkStatus> {
        let status = invoke(NETWORK, "getStatus", empty_options()).await?;
        Ok(from_js(status)?)
    }

    async fn subscribe_changes(&self) -> BridgeResult<Box<dyn NetworkChangeStream>> {
        let (sender, receiver) = mpsc::unbounded();
        let listener = add_listener(NETWORK, "networkStatusChange", sender, |payload| {
            serde_wasm_bindgen::from_value::<NetworkStatus>(payload).ok()
        })
        .await?;

        Ok(Box::new(PluginNetworkStream {
            receiver,
            _listener: listener,
        }))
    }
}

#[async_trait(?Send)]
impl AppLifecycle for CapacitorBridge {
    async fn subscribe(&self) -> BridgeResult<Box<dyn LifecycleEventStream>> {
        let (sender, receiver) = mpsc::unbounded();

        let state = add_listener(APP, "appStateChange", sender.clone(), |payload| {
            serde_wasm_bindgen::from_value::<AppStatePayload>(payload)
                .ok()
                .map(|state| LifecycleEvent::StateChanged {
                    is_active: state.is_active,
                })
        })
        .await?;

        let url = add_listener(APP, "appUrlOpen", sender, |payload| {
            serde_wasm_bindgen::from_value::<UrlOpenPayload>(payload)
                .ok()
                .map(|opened| LifecycleEvent::UrlOpened { url: opened.url })
        })
        .await?;

        Ok(Box::new(PluginLifecycleStream {
            receiver,
            _listeners: [state, url],
        }))
    }
}

#[async_trait(?Send)]
impl PreferenceStore for CapacitorBridge {
    async fn set(&self, key: &str, value: &str) -> BridgeResult<()> {
        invoke_unit(PREFERENCES, "set", to_js(&KeyValueOptions { key, value })?).await
    }

    async fn get(&self, key: &str) -> BridgeResult<Option<String>> {
        let payload = invoke(PREFERENCES, "get", to_js(&KeyOptions { key })?).await?;
        let payload: ValuePayload = from_js(payload)?;
        Ok(payload.value)
    }

    async fn remove(&self, key: &str) -> BridgeResult<()> {
        invoke_unit(PREFERENCES, "remove", to_js(&KeyOptions { key })?).await
    }

    async fn keys(&self) -> BridgeResult<Vec<String>> {
        let payload: KeysPayload = from_js(invoke(PREFERENCES, "keys", empty_options()).await?)?;
        Ok(payload.keys)
    }

    async fn clear(&self) -> BridgeResult<()> {
        invoke_unit(PREFERENCES, "clear", empty_options()).await
    }
}

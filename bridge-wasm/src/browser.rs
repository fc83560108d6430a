//! Plain-browser adapters: host detection, Web Share, clipboard and
//! `navigator.onLine`.

use async_trait::async_trait;
use bridge_traits::{
    error::Result as BridgeResult,
    network::{ConnectionType, NetworkChangeStream, NetworkMonitor, NetworkStatus},
    platform::{HostProbe, PlatformMode},
    share::{Clipboard, ShareRequest, WebShare},
};
use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::StreamExt;
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use tracing::debug;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::capacitor::is_native_platform;
use crate::error::{WasmError, WasmResult};

fn window() -> WasmResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| WasmError::ApiMissing("window".to_string()))
}

fn navigator() -> WasmResult<web_sys::Navigator> {
    Ok(window()?.navigator())
}

fn navigator_method(path: &[&str]) -> WasmResult<(JsValue, Function)> {
    let mut owner: JsValue = navigator()?.into();
    let (method_name, parents) = path
        .split_last()
        .ok_or_else(|| WasmError::ApiMissing("navigator".to_string()))?;

    for segment in parents {
        owner = Reflect::get(&owner, &JsValue::from_str(segment))?;
        if owner.is_undefined() || owner.is_null() {
            return Err(WasmError::ApiMissing(format!("navigator.{}", path.join("."))));
        }
    }

    let function = Reflect::get(&owner, &JsValue::from_str(method_name))?
        .dyn_into::<Function>()
        .map_err(|_| WasmError::ApiMissing(format!("navigator.{}", path.join("."))))?;
    Ok((owner, function))
}

async fn await_call(owner: &JsValue, function: &Function, argument: &JsValue) -> WasmResult<()> {
    let returned = function
        .call1(owner, argument)
        .map_err(WasmError::from_rejection)?;
    JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(WasmError::from_rejection)?;
    Ok(())
}

/// Decides the platform from the native runtime global.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHostProbe;

impl HostProbe for BrowserHostProbe {
    fn probe(&self) -> PlatformMode {
        if is_native_platform() {
            PlatformMode::Native
        } else {
            PlatformMode::Web
        }
    }
}

#[derive(Serialize)]
struct WebShareData<'a> {
    title: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

/// `navigator.share`
#[derive(Debug, Clone, Copy)]
pub struct BrowserWebShare;

impl BrowserWebShare {
    /// `Some` only where the browser exposes the Web Share API.
    pub fn detect() -> Option<Self> {
        navigator_method(&["share"]).ok().map(|_| Self)
    }
}

#[async_trait(?Send)]
impl WebShare for BrowserWebShare {
    async fn share(&self, request: &ShareRequest) -> BridgeResult<()> {
        let (owner, share) = navigator_method(&["share"])?;
        let data = serde_wasm_bindgen::to_value(&WebShareData {
            title: &request.title,
            text: &request.text,
            url: request.url.as_deref(),
        })
        .map_err(WasmError::from)?;

        await_call(&owner, &share, &data).await?;
        debug!("Web share completed");
        Ok(())
    }
}

/// `navigator.clipboard.writeText`
#[derive(Debug, Clone, Copy)]
pub struct BrowserClipboard;

impl BrowserClipboard {
    pub fn detect() -> Option<Self> {
        navigator_method(&["clipboard", "writeText"])
            .ok()
            .map(|_| Self)
    }
}

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> BridgeResult<()> {
        let (owner, write_text) = navigator_method(&["clipboard", "writeText"])?;
        await_call(&owner, &write_text, &JsValue::from_str(text)).await?;
        debug!(chars = text.chars().count(), "Copied to clipboard");
        Ok(())
    }
}

fn status_from_online(online: bool) -> NetworkStatus {
    if online {
        NetworkStatus::online(ConnectionType::Unknown)
    } else {
        NetworkStatus::offline()
    }
}

/// `navigator.onLine` plus the window `online`/`offline` events.
///
/// Browsers do not report the medium, so a connected status carries
/// [`ConnectionType::Unknown`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNetworkMonitor;

#[async_trait(?Send)]
impl NetworkMonitor for BrowserNetworkMonitor {
    async fn get_status(&self) -> BridgeResult<NetworkStatus> {
        Ok(status_from_online(navigator()?.on_line()))
    }

    async fn subscribe_changes(&self) -> BridgeResult<Box<dyn NetworkChangeStream>> {
        let window = window()?;
        let (sender, receiver) = mpsc::unbounded();

        let online_sender = sender.clone();
        let on_online = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            let _ = online_sender.unbounded_send(status_from_online(true));
        });
        let on_offline = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            let _ = sender.unbounded_send(status_from_online(false));
        });

        window
            .add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref())
            .map_err(WasmError::from)?;
        window
            .add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref())
            .map_err(WasmError::from)?;

        Ok(Box::new(WindowNetworkStream {
            receiver,
            window,
            on_online,
            on_offline,
        }))
    }
}

struct WindowNetworkStream {
    receiver: UnboundedReceiver<NetworkStatus>,
    window: web_sys::Window,
    on_online: Closure<dyn FnMut(web_sys::Event)>,
    on_offline: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for WindowNetworkStream {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("online", self.on_online.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "offline",
            self.on_offline.as_ref().unchecked_ref(),
        );
    }
}

#[async_trait(?Send)]
impl NetworkChangeStream for WindowNetworkStream {
    async fn next(&mut self) -> Option<NetworkStatus> {
        self.receiver.next().await
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_probe_is_web_without_native_runtime() {
        assert_eq!(BrowserHostProbe.probe(), PlatformMode::Web);
    }

    #[wasm_bindgen_test]
    async fn test_network_status_follows_on_line() {
        let expected = status_from_online(web_sys::window().unwrap().navigator().on_line());
        assert_eq!(BrowserNetworkMonitor.get_status().await.unwrap(), expected);
    }

    #[wasm_bindgen_test]
    async fn test_offline_event_reaches_stream() {
        let mut stream = BrowserNetworkMonitor.subscribe_changes().await.unwrap();
        let event = web_sys::Event::new("offline").unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();

        assert_eq!(stream.next().await, Some(NetworkStatus::offline()));
    }
}

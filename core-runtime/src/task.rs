//! Background listener tasks.
//!
//! Listener pumps forward bridge events (network changes, lifecycle events)
//! into core state for as long as their [`ListenerGuard`] is alive. Dropping
//! the guard aborts the pump, which drops the underlying bridge stream and
//! with it the platform listener registration.

use futures::future::{abortable, AbortHandle};
use std::future::Future;
use tracing::debug;

/// Run a future in the background on the current executor.
///
/// Must be called from within a Tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

/// Run a future on the browser microtask queue.
#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Ownership of a running listener pump.
#[derive(Debug)]
pub struct ListenerGuard {
    name: &'static str,
    handle: AbortHandle,
}

impl ListenerGuard {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_aborted()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(listener = self.name, "Listener detached");
    }
}

/// Spawn `pump` and return the guard that keeps it running.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_listener<F>(name: &'static str, pump: F) -> ListenerGuard
where
    F: Future<Output = ()> + Send + 'static,
{
    let (task, handle) = abortable(pump);
    spawn(async move {
        let _ = task.await;
    });
    debug!(listener = name, "Listener attached");
    ListenerGuard { name, handle }
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_listener<F>(name: &'static str, pump: F) -> ListenerGuard
where
    F: Future<Output = ()> + 'static,
{
    let (task, handle) = abortable(pump);
    spawn(async move {
        let _ = task.await;
    });
    debug!(listener = name, "Listener attached");
    ListenerGuard { name, handle }
}

//! App lifecycle for desktop hosts
//!
//! A desktop window is treated as always in the foreground. The embedding
//! host may still forward focus changes or deep links through
//! [`DesktopLifecycle::notify`].

use async_trait::async_trait;
use bridge_traits::{
    error::Result,
    lifecycle::{AppLifecycle, LifecycleEvent, LifecycleEventStream},
    platform::{HostProbe, PlatformMode},
};
use tokio::sync::broadcast;
use tracing::debug;

const LIFECYCLE_BUFFER: usize = 16;

#[derive(Debug, Clone)]
pub struct DesktopLifecycle {
    sender: broadcast::Sender<LifecycleEvent>,
}

impl DesktopLifecycle {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(LIFECYCLE_BUFFER);
        Self { sender }
    }

    /// Deliver an event to every current subscriber.
    pub fn notify(&self, event: LifecycleEvent) {
        let delivered = self.sender.send(event).unwrap_or(0);
        debug!(delivered, "Lifecycle event forwarded");
    }
}

impl Default for DesktopLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppLifecycle for DesktopLifecycle {
    async fn subscribe(&self) -> Result<Box<dyn LifecycleEventStream>> {
        Ok(Box::new(BroadcastLifecycleStream {
            receiver: self.sender.subscribe(),
        }))
    }
}

struct BroadcastLifecycleStream {
    receiver: broadcast::Receiver<LifecycleEvent>,
}

#[async_trait]
impl LifecycleEventStream for BroadcastLifecycleStream {
    async fn next(&mut self) -> Option<LifecycleEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// The Rust host is the shell, so desktop always runs native.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopHostProbe;

impl HostProbe for DesktopHostProbe {
    fn probe(&self) -> PlatformMode {
        PlatformMode::Native
    }
}

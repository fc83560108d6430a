//! Single-slot observable state owned by the capability bridge.

use bridge_traits::NetworkStatus;
use std::sync::Arc;
use tokio::sync::watch;

/// Latest known connectivity.
///
/// `None` until the first status arrives. Every write replaces the whole
/// value; readers get copies or a [`watch::Receiver`].
#[derive(Debug, Clone)]
pub struct NetworkStatusStore {
    sender: Arc<watch::Sender<Option<NetworkStatus>>>,
}

impl NetworkStatusStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Returns the value that was replaced.
    pub fn replace(&self, status: NetworkStatus) -> Option<NetworkStatus> {
        self.sender.send_replace(Some(status))
    }

    pub fn current(&self) -> Option<NetworkStatus> {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<NetworkStatus>> {
        self.sender.subscribe()
    }
}

impl Default for NetworkStatusStore {
    fn default() -> Self {
        Self::new()
    }
}

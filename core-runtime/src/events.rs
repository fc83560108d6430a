//! # Event Bus System
//!
//! Broadcast channel that carries bridge-originated events to observers in
//! the core and the UI layer.
//!
//! ## Overview
//!
//! - **Event Types**: [`AppEvent`] wraps one enum per source
//! - **EventBus**: cloneable publisher backed by `tokio::sync::broadcast`
//! - **EventStream**: receiver wrapper with an optional filter
//!
//! ```text
//! ┌────────────────┐   emit   ┌───────────┐  subscribe  ┌────────────┐
//! │ network pump   ├─────────>│           ├────────────>│ UI banner  │
//! └────────────────┘          │ EventBus  │             └────────────┘
//! ┌────────────────┐   emit   │           │  subscribe  ┌────────────┐
//! │ lifecycle pump ├─────────>│           ├────────────>│ router     │
//! └────────────────┘          └───────────┘             └────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{AppEvent, EventBus, NetworkEvent};
//! use bridge_traits::ConnectionType;
//!
//! let bus = EventBus::new(16);
//! let mut rx = bus.subscribe();
//!
//! bus.emit(AppEvent::Network(NetworkEvent::StatusChanged {
//!     connected: false,
//!     connection_type: ConnectionType::None,
//! }))
//! .ok();
//! ```
//!
//! ## Error Handling
//!
//! `RecvError::Lagged(n)` means a subscriber fell `n` events behind and may
//! keep reading. `RecvError::Closed` means every bus handle was dropped.
//! Emitting with no subscribers returns `Err`, which publishers ignore.

use bridge_traits::{ConnectionType, LifecycleEvent, NetworkStatus, PlatformMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

// ============================================================================
// Event Types
// ============================================================================

/// Top-level event published on the bus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum AppEvent {
    Network(NetworkEvent),
    Lifecycle(LifecycleEvent),
    Capability(CapabilityEvent),
}

impl AppEvent {
    pub fn description(&self) -> &str {
        match self {
            AppEvent::Network(e) => e.description(),
            AppEvent::Lifecycle(LifecycleEvent::StateChanged { is_active: true }) => {
                "App moved to foreground"
            }
            AppEvent::Lifecycle(LifecycleEvent::StateChanged { is_active: false }) => {
                "App moved to background"
            }
            AppEvent::Lifecycle(LifecycleEvent::UrlOpened { .. }) => "App opened from URL",
            AppEvent::Capability(e) => e.description(),
        }
    }

    pub fn severity(&self) -> EventSeverity {
        match self {
            AppEvent::Capability(CapabilityEvent::Unavailable { .. }) => EventSeverity::Warning,
            AppEvent::Network(NetworkEvent::StatusChanged {
                connected: false, ..
            }) => EventSeverity::Warning,
            AppEvent::Capability(CapabilityEvent::ShellReady { .. }) => EventSeverity::Info,
            _ => EventSeverity::Debug,
        }
    }
}

/// Event severity levels for filtering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventSeverity {
    Debug,
    Info,
    Warning,
    Error,
}

/// Connectivity transitions reported by the shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum NetworkEvent {
    StatusChanged {
        connected: bool,
        connection_type: ConnectionType,
    },
}

impl NetworkEvent {
    pub fn description(&self) -> &str {
        match self {
            NetworkEvent::StatusChanged {
                connected: true, ..
            } => "Network connected",
            NetworkEvent::StatusChanged {
                connected: false, ..
            } => "Network disconnected",
        }
    }
}

impl From<NetworkStatus> for NetworkEvent {
    fn from(status: NetworkStatus) -> Self {
        NetworkEvent::StatusChanged {
            connected: status.connected,
            connection_type: status.connection_type,
        }
    }
}

/// Outcomes of capability use that observers may care about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum CapabilityEvent {
    /// A capability call failed and its neutral value was returned.
    Unavailable { capability: String, message: String },
    /// Native initialization finished.
    ShellReady { platform: PlatformMode },
}

impl CapabilityEvent {
    pub fn description(&self) -> &str {
        match self {
            CapabilityEvent::Unavailable { .. } => "Capability unavailable",
            CapabilityEvent::ShellReady { .. } => "Native shell ready",
        }
    }
}

// ============================================================================
// Event Bus
// ============================================================================

/// Central event bus for publishing and subscribing to app events.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    /// Creates a bus that buffers up to `capacity` events per subscriber.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; configuration validation rejects that
    /// value before a bus is built from it.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns the number of subscribers that received the event.
    pub fn emit(&self, event: AppEvent) -> Result<usize, SendError<AppEvent>> {
        self.sender.send(event)
    }

    /// Each receiver sees events emitted after it subscribed.
    pub fn subscribe(&self) -> Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn stream(&self) -> EventStream {
        EventStream::new(self.subscribe())
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ============================================================================
// Event Stream Wrapper
// ============================================================================

type EventFilter = Box<dyn Fn(&AppEvent) -> bool + Send + Sync>;

/// A `broadcast::Receiver` that can skip events failing a predicate.
///
/// ```rust
/// use core_runtime::events::{AppEvent, EventBus};
///
/// let bus = EventBus::default();
/// let lifecycle_only = bus
///     .stream()
///     .filter(|event| matches!(event, AppEvent::Lifecycle(_)));
/// ```
pub struct EventStream {
    receiver: Receiver<AppEvent>,
    filter: Option<EventFilter>,
}

impl EventStream {
    pub fn new(receiver: Receiver<AppEvent>) -> Self {
        Self {
            receiver,
            filter: None,
        }
    }

    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&AppEvent) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(predicate));
        self
    }

    fn accepts(&self, event: &AppEvent) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(event))
    }

    /// Receives the next event that passes the filter.
    pub async fn recv(&mut self) -> Result<AppEvent, RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            if self.accepts(&event) {
                return Ok(event);
            }
        }
    }

    /// Returns `None` if no matching event is buffered.
    pub fn try_recv(&mut self) -> Option<Result<AppEvent, RecvError>> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.accepts(&event) => return Some(Ok(event)),
                Ok(_) => continue,
                Err(broadcast::error::TryRecvError::Empty) => return None,
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    return Some(Err(RecvError::Lagged(n)))
                }
                Err(broadcast::error::TryRecvError::Closed) => return Some(Err(RecvError::Closed)),
            }
        }
    }
}

impl fmt::Debug for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

//! Network monitoring by TCP reachability

use async_trait::async_trait;
use bridge_traits::{
    error::Result,
    network::{ConnectionType, NetworkChangeStream, NetworkMonitor, NetworkStatus},
};
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

const DEFAULT_PROBE_TARGET: &str = "1.1.1.1:53";
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Desktop network monitor
///
/// Connectivity is a TCP connect to a well-known resolver. Desktop hosts
/// cannot tell Wi-Fi from Ethernet without platform APIs, so a reachable
/// network reports [`ConnectionType::Unknown`].
#[derive(Debug, Clone)]
pub struct DesktopNetworkMonitor {
    probe_target: String,
    probe_timeout: Duration,
    poll_interval: Duration,
}

impl DesktopNetworkMonitor {
    pub fn new() -> Self {
        Self {
            probe_target: DEFAULT_PROBE_TARGET.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// `host:port` to connect to when checking reachability
    pub fn with_probe_target(mut self, target: impl Into<String>) -> Self {
        self.probe_target = target.into();
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    async fn probe(&self) -> NetworkStatus {
        let attempt = tokio::time::timeout(
            self.probe_timeout,
            TcpStream::connect(self.probe_target.as_str()),
        )
        .await;

        match attempt {
            Ok(Ok(_)) => NetworkStatus::online(ConnectionType::Unknown),
            Ok(Err(_)) | Err(_) => NetworkStatus::offline(),
        }
    }
}

impl Default for DesktopNetworkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkMonitor for DesktopNetworkMonitor {
    async fn get_status(&self) -> Result<NetworkStatus> {
        let status = self.probe().await;
        debug!(connected = status.connected, "Network status probed");
        Ok(status)
    }

    async fn subscribe_changes(&self) -> Result<Box<dyn NetworkChangeStream>> {
        Ok(Box::new(PollingChangeStream {
            monitor: self.clone(),
            last: None,
        }))
    }
}

/// Polls the monitor and yields only when the status differs from the last
/// one yielded. The first poll always yields.
struct PollingChangeStream {
    monitor: DesktopNetworkMonitor,
    last: Option<NetworkStatus>,
}

#[async_trait]
impl NetworkChangeStream for PollingChangeStream {
    async fn next(&mut self) -> Option<NetworkStatus> {
        loop {
            if self.last.is_some() {
                tokio::time::sleep(self.monitor.poll_interval).await;
            }

            let status = self.monitor.probe().await;
            if self.last != Some(status) {
                self.last = Some(status);
                return Some(status);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn closed_port() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        addr.to_string()
    }

    #[tokio::test]
    async fn test_reachable_target_is_online() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let monitor =
            DesktopNetworkMonitor::new().with_probe_target(listener.local_addr().unwrap().to_string());

        let status = monitor.get_status().await.unwrap();
        assert_eq!(status, NetworkStatus::online(ConnectionType::Unknown));
        assert!(monitor.is_connected().await);
    }

    #[tokio::test]
    async fn test_unreachable_target_is_offline() {
        let monitor = DesktopNetworkMonitor::new()
            .with_probe_target(closed_port().await)
            .with_probe_timeout(Duration::from_millis(500));

        assert_eq!(monitor.get_status().await.unwrap(), NetworkStatus::offline());
        assert!(!monitor.is_connected().await);
    }

    #[tokio::test]
    async fn test_change_stream_reports_initial_then_changes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let monitor = DesktopNetworkMonitor::new()
            .with_probe_target(addr.to_string())
            .with_poll_interval(Duration::from_millis(10));

        let mut stream = monitor.subscribe_changes().await.unwrap();
        assert_eq!(
            stream.next().await,
            Some(NetworkStatus::online(ConnectionType::Unknown))
        );

        drop(listener);
        let next = tokio::time::timeout(Duration::from_secs(2), stream.next())
            .await
            .unwrap();
        assert_eq!(next, Some(NetworkStatus::offline()));
    }
}

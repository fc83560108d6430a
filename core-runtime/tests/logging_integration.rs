//! Integration tests for the logging system.
//!
//! The global subscriber can be installed once per process, so a single test
//! owns `init_logging`.

use async_trait::async_trait;
use bridge_traits::error::Result as SinkResult;
use bridge_traits::time::{LogEntry, LogLevel, LoggerSink};
use core_runtime::logging::{
    coarse_position, init_logging, redact_if_sensitive, strip_path, LogFormat, LoggingConfig,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct CollectingSink {
    entries: Mutex<Vec<LogEntry>>,
}

#[async_trait]
impl LoggerSink for CollectingSink {
    async fn log(&self, entry: LogEntry) -> SinkResult<()> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

#[test]
fn test_global_init_forwards_to_sink_once() {
    let sink = Arc::new(CollectingSink::default());
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_filter("logging_integration=debug")
        .with_logger_sink(sink.clone());

    init_logging(config.clone()).expect("first init succeeds");

    tracing::info!(target: "logging_integration", listing_id = 42, "listing shared");
    tracing::debug!(target: "other_crate", "filtered out");

    {
        let entries = sink.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "listing shared");
        assert_eq!(entries[0].fields.get("listing_id"), Some(&"42".to_string()));
    }

    assert!(init_logging(config).is_err(), "second init must fail");
}

#[test]
fn test_redaction_helpers() {
    assert_eq!(redact_if_sensitive("refresh_token", "r-1"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("authorization", "Bearer x"), "[REDACTED]");

    let email = redact_if_sensitive("email", "kouassi@example.ci");
    assert!(email.starts_with('k'));
    assert!(!email.contains("example.ci"));

    assert_eq!(redact_if_sensitive("district", "Lobia"), "Lobia");
}

#[test]
fn test_photo_references_reduced_to_file_name() {
    assert_eq!(
        strip_path("file:///storage/emulated/0/DCIM/IMG_0042.jpg"),
        "IMG_0042.jpg"
    );
    assert_eq!(strip_path(""), "");
}

#[test]
fn test_positions_are_coarsened() {
    assert_eq!(coarse_position(6.8774, -6.4502), "6.88,-6.45");
    assert_eq!(coarse_position(0.0, 0.0), "0.00,0.00");
}

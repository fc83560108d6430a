//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the marketplace client core:
//! - Logging and tracing infrastructure
//! - Configuration and capability assembly
//! - Event bus system
//! - Listener task guards
//!
//! ## Overview
//!
//! This crate holds the runtime utilities the service layer builds on. It
//! decides which bridge adapters fill each capability slot, establishes the
//! logging conventions, and carries events from the bridge to observers.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod task;
pub mod unavailable;

pub use error::{Error, Result};

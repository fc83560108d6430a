//! Startup errors for the capability runtime.
//!
//! Nothing here is raised once the app is running: capability calls fail
//! through [`bridge_traits::BridgeError`] and are settled by the façade.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Out-of-range settings or a logging setup that cannot be installed.
    #[error("Invalid app configuration: {0}")]
    Config(String),

    /// A slot that has no unavailable fallback, such as the host probe.
    #[error("No {capability} bridge for this host: {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Preference store could not be opened: {0}")]
    PreferenceStore(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_missing_names_the_slot() {
        let err = Error::CapabilityMissing {
            capability: "HostProbe".to_string(),
            message: "enable desktop-shims or inject a probe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No HostProbe bridge for this host: enable desktop-shims or inject a probe"
        );
    }
}

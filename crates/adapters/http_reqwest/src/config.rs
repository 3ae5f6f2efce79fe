//! Hub client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Connection settings shared by every sensor request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubClientConfig {
    /// Long-lived access token sent as `Authorization: Bearer <token>`.
    pub auth_token: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl HubClientConfig {
    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HubClientConfig {
    fn default() -> Self {
        Self {
            auth_token: String::new(),
            timeout_secs: 10,
        }
    }
}

//! Network configuration.

use std::time::Duration;

use ride_session::POLL_PERIOD;

/// Where the collaborators live and how patiently we talk to them.
#[derive(Clone, Debug)]
pub struct NetConfig {
    /// Base URL of the collaborator API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.  A timed-out call is reported exactly like any
    /// other failed call; the core does not treat it specially.
    pub request_timeout: Duration,
    /// Roster poll cadence handed to the runtime's timer.
    pub poll_period: Duration,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_owned(),
            request_timeout: Duration::from_secs(10),
            poll_period: POLL_PERIOD,
        }
    }
}

impl NetConfig {
    /// Read the base URL from `RIDE_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("RIDE_API_URL") {
            config.base_url = url.trim_end_matches('/').to_owned();
        }
        config
    }
}

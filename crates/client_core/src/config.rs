use std::time::Duration;

/// Backend the stock deployment listens on.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5005/";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    /// Per-request timeout for the underlying HTTP client. `None` leaves the
    /// transport's default (no timeout) in place.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            timeout: None,
        }
    }
}

/// Defaults, then environment overrides. Unparseable values are ignored.
pub fn load_config() -> ClientConfig {
    let mut config = ClientConfig::default();

    if let Ok(v) = std::env::var("SLACKR_SERVER_URL") {
        config.server_url = v;
    }

    if let Ok(v) = std::env::var("SLACKR_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            config.timeout = Some(Duration::from_secs(parsed));
        }
    }

    config
}

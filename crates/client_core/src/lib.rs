use reqwest::Client;
use url::Url;

pub mod auth;
pub mod channels;
pub mod config;
pub mod error;
pub mod history;
pub mod media;
pub mod messages;
pub mod session;
mod transport;
pub mod users;

pub use config::{load_config, ClientConfig, DEFAULT_SERVER_URL};
pub use error::ClientError;
pub use history::{fetch_all_messages, ChannelHistory, MessagePageSource};
pub use media::image_data_url;
pub use messages::Toggle;
pub use session::Session;

/// HTTP client for the chat backend.
///
/// Cheap to clone and free of mutable state; authentication travels in the
/// [`Session`] each call borrows, never in the client.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    server_url: String,
}

impl ChatClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let server_url = normalize_server_url(&config.server_url)?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            server_url,
        })
    }

    /// Default configuration pointed at a specific server.
    pub fn with_server_url(server_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(&ClientConfig {
            server_url: server_url.into(),
            ..ClientConfig::default()
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

fn normalize_server_url(raw: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(raw).map_err(|e| ClientError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::BaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

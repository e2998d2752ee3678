use shared::domain::MessageId;
use thiserror::Error;

/// Everything a client operation can fail with. Backend-reported failures
/// keep the server's message verbatim; nothing here retries.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend rejected the request: {message}")]
    Api { message: String },
    #[error("unexpected status {status} with no error body")]
    UnexpectedStatus { status: reqwest::StatusCode },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid server url '{url}': {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("unsupported image type '{mime}': expected png or jpeg")]
    UnsupportedImageType { mime: String },
    #[error("message {} not found in channel history", message_id.0)]
    MessageNotFound { message_id: MessageId },
    #[error("message body is empty")]
    EmptyMessage,
}

impl ClientError {
    /// The backend's own error message, when this failure carries one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message } => Some(message),
            _ => None,
        }
    }
}

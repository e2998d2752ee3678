use serde::{Deserialize, Serialize};

/// Failure envelope the backend attaches to a response body regardless of the
/// HTTP status: `{"error": "reason"}`. A body that parses as this shape means
/// the operation failed even when the status line says otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

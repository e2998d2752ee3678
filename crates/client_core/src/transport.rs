//! Response handling shared by every operation.
//!
//! The backend reports failures in the body, not the status line: any
//! response whose body parses as `{"error": "..."}` is a failed call even
//! when the status is 200. The helpers here check that envelope before
//! looking at the status or the expected shape.

use reqwest::Response;
use serde::de::DeserializeOwned;
use shared::error::ErrorBody;

use crate::{error::ClientError, ChatClient};

impl ChatClient {
    pub(crate) fn endpoint(&self, path: impl AsRef<str>) -> String {
        format!("{}/{}", self.server_url, path.as_ref())
    }
}

/// Decode a response that carries a payload.
pub(crate) async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = checked_body(response).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Drain a fire-and-forget response, keeping only the envelope check.
pub(crate) async fn unit_body(response: Response) -> Result<(), ClientError> {
    checked_body(response).await.map(|_| ())
}

async fn checked_body(response: Response) -> Result<Vec<u8>, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if let Ok(envelope) = serde_json::from_slice::<ErrorBody>(&body) {
        return Err(ClientError::Api {
            message: envelope.error,
        });
    }
    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus { status });
    }

    Ok(body.to_vec())
}

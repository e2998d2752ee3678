use serde_json::json;
use tracing::{info, warn};

use shared::{
    domain::{ChannelId, MessageId, ReactKind},
    protocol::{EditMessageRequest, ReactRequest, SendMessageRequest, SendMessageResponse},
};

use crate::{
    error::ClientError,
    session::Session,
    transport::{json_body, unit_body},
    ChatClient,
};

/// Error string the backend returns when the caller reacts twice with the
/// same kind. Matched exactly; anything else propagates.
pub(crate) const ALREADY_REACTED: &str =
    "This message already contains a react of this type from this user";
/// Error string the backend returns for pinning an already-pinned message.
pub(crate) const ALREADY_PINNED: &str = "This message is already pinned";

/// What a toggle helper ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

fn is_already_reacted(err: &ClientError) -> bool {
    matches!(err, ClientError::Api { message } if message == ALREADY_REACTED)
}

fn is_already_pinned(err: &ClientError) -> bool {
    matches!(err, ClientError::Api { message } if message == ALREADY_PINNED)
}

impl ChatClient {
    /// Post a text message. Blank input is rejected before any request
    /// goes out.
    pub async fn send_message(
        &self,
        session: &Session,
        channel_id: ChannelId,
        text: &str,
    ) -> Result<MessageId, ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::EmptyMessage);
        }
        self.post_message(
            session,
            channel_id,
            SendMessageRequest {
                message: text.to_string(),
                image: String::new(),
            },
        )
        .await
    }

    /// Post an image message. `data_url` comes from
    /// [`crate::media::image_data_url`]; the body text stays empty, which is
    /// how the backend tells the two kinds apart.
    pub async fn send_image(
        &self,
        session: &Session,
        channel_id: ChannelId,
        data_url: &str,
    ) -> Result<MessageId, ClientError> {
        self.post_message(
            session,
            channel_id,
            SendMessageRequest {
                message: String::new(),
                image: data_url.to_string(),
            },
        )
        .await
    }

    async fn post_message(
        &self,
        session: &Session,
        channel_id: ChannelId,
        request: SendMessageRequest,
    ) -> Result<MessageId, ClientError> {
        let response = self
            .http
            .post(self.endpoint(format!("message/{}", channel_id.0)))
            .bearer_auth(&session.token)
            .json(&request)
            .send()
            .await?;
        let sent: SendMessageResponse = json_body(response).await?;
        info!(
            channel_id = channel_id.0,
            message_id = sent.message_id.0,
            "message: sent"
        );
        Ok(sent.message_id)
    }

    pub async fn edit_message(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
        text: &str,
    ) -> Result<(), ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::EmptyMessage);
        }
        let response = self
            .http
            .put(self.endpoint(format!("message/{}/{}", channel_id.0, message_id.0)))
            .bearer_auth(&session.token)
            .json(&EditMessageRequest {
                message: text.to_string(),
                image: None,
            })
            .send()
            .await?;
        unit_body(response).await
    }

    pub async fn delete_message(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.endpoint(format!("message/{}/{}", channel_id.0, message_id.0)))
            .bearer_auth(&session.token)
            .send()
            .await?;
        unit_body(response).await?;
        info!(
            channel_id = channel_id.0,
            message_id = message_id.0,
            "message: deleted"
        );
        Ok(())
    }

    pub async fn pin_message(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(format!("message/pin/{}/{}", channel_id.0, message_id.0)))
            .bearer_auth(&session.token)
            .json(&json!({}))
            .send()
            .await?;
        unit_body(response).await
    }

    pub async fn unpin_message(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(format!("message/unpin/{}/{}", channel_id.0, message_id.0)))
            .bearer_auth(&session.token)
            .json(&json!({}))
            .send()
            .await?;
        unit_body(response).await
    }

    pub async fn react(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
        kind: ReactKind,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(format!("message/react/{}/{}", channel_id.0, message_id.0)))
            .bearer_auth(&session.token)
            .json(&ReactRequest { react: kind })
            .send()
            .await?;
        unit_body(response).await
    }

    pub async fn unreact(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
        kind: ReactKind,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(format!("message/unreact/{}/{}", channel_id.0, message_id.0)))
            .bearer_auth(&session.token)
            .json(&ReactRequest { react: kind })
            .send()
            .await?;
        unit_body(response).await
    }

    /// React, or withdraw the react if this user already placed one of the
    /// same kind. The backend has no toggle endpoint, so the duplicate is
    /// detected from its error message and turned into an unreact.
    pub async fn toggle_react(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
        kind: ReactKind,
    ) -> Result<Toggle, ClientError> {
        match self.react(session, channel_id, message_id, kind).await {
            Ok(()) => Ok(Toggle::Added),
            Err(err) if is_already_reacted(&err) => {
                warn!(
                    channel_id = channel_id.0,
                    message_id = message_id.0,
                    react = kind.as_str(),
                    "message: react already present, withdrawing instead"
                );
                self.unreact(session, channel_id, message_id, kind).await?;
                Ok(Toggle::Removed)
            }
            Err(err) => Err(err),
        }
    }

    /// Pin, or unpin if the message is already pinned. Same fallback shape
    /// as [`ChatClient::toggle_react`].
    pub async fn toggle_pin(
        &self,
        session: &Session,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Toggle, ClientError> {
        match self.pin_message(session, channel_id, message_id).await {
            Ok(()) => Ok(Toggle::Added),
            Err(err) if is_already_pinned(&err) => {
                warn!(
                    channel_id = channel_id.0,
                    message_id = message_id.0,
                    "message: already pinned, unpinning instead"
                );
                self.unpin_message(session, channel_id, message_id).await?;
                Ok(Toggle::Removed)
            }
            Err(err) => Err(err),
        }
    }
}

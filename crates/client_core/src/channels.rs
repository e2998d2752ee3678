use serde_json::json;
use tracing::info;

use shared::{
    domain::{ChannelId, UserId},
    protocol::{
        ChannelDetail, ChannelListResponse, ChannelSummary, CreateChannelRequest,
        CreateChannelResponse, InviteRequest, UpdateChannelRequest,
    },
};

use crate::{
    error::ClientError,
    session::Session,
    transport::{json_body, unit_body},
    ChatClient,
};

impl ChatClient {
    /// Every channel visible to the caller, public and private alike.
    pub async fn list_channels(
        &self,
        session: &Session,
    ) -> Result<Vec<ChannelSummary>, ClientError> {
        let response = self
            .http
            .get(self.endpoint("channel"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        let list: ChannelListResponse = json_body(response).await?;
        Ok(list.channels)
    }

    pub async fn create_channel(
        &self,
        session: &Session,
        name: &str,
        private: bool,
        description: &str,
    ) -> Result<ChannelId, ClientError> {
        let response = self
            .http
            .post(self.endpoint("channel"))
            .bearer_auth(&session.token)
            .json(&CreateChannelRequest {
                name: name.to_string(),
                private,
                description: description.to_string(),
            })
            .send()
            .await?;
        let created: CreateChannelResponse = json_body(response).await?;
        info!(
            channel_id = created.channel_id.0,
            private, "channel: created"
        );
        Ok(created.channel_id)
    }

    /// Full channel record. The backend refuses this for channels the
    /// caller is not a member of; that surfaces as a backend error.
    pub async fn channel_details(
        &self,
        session: &Session,
        channel_id: ChannelId,
    ) -> Result<ChannelDetail, ClientError> {
        let response = self
            .http
            .get(self.endpoint(format!("channel/{}", channel_id.0)))
            .bearer_auth(&session.token)
            .send()
            .await?;
        json_body(response).await
    }

    pub async fn update_channel(
        &self,
        session: &Session,
        channel_id: ChannelId,
        name: &str,
        description: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.endpoint(format!("channel/{}", channel_id.0)))
            .bearer_auth(&session.token)
            .json(&UpdateChannelRequest {
                name: name.to_string(),
                description: description.to_string(),
            })
            .send()
            .await?;
        unit_body(response).await
    }

    pub async fn join_channel(
        &self,
        session: &Session,
        channel_id: ChannelId,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(format!("channel/{}/join", channel_id.0)))
            .bearer_auth(&session.token)
            .json(&json!({}))
            .send()
            .await?;
        unit_body(response).await?;
        info!(channel_id = channel_id.0, "channel: joined");
        Ok(())
    }

    pub async fn leave_channel(
        &self,
        session: &Session,
        channel_id: ChannelId,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(format!("channel/{}/leave", channel_id.0)))
            .bearer_auth(&session.token)
            .json(&json!({}))
            .send()
            .await?;
        unit_body(response).await?;
        info!(channel_id = channel_id.0, "channel: left");
        Ok(())
    }

    pub async fn invite_to_channel(
        &self,
        session: &Session,
        channel_id: ChannelId,
        user_id: UserId,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(format!("channel/{}/invite", channel_id.0)))
            .bearer_auth(&session.token)
            .json(&InviteRequest { user_id })
            .send()
            .await?;
        unit_body(response).await?;
        info!(
            channel_id = channel_id.0,
            invited_user_id = user_id.0,
            "channel: member invited"
        );
        Ok(())
    }
}

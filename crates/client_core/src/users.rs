use tracing::info;

use shared::{
    domain::UserId,
    protocol::{ProfileUpdate, UserListResponse, UserProfile, UserSummary},
};

use crate::{
    error::ClientError,
    session::Session,
    transport::{json_body, unit_body},
    ChatClient,
};

impl ChatClient {
    pub async fn list_users(&self, session: &Session) -> Result<Vec<UserSummary>, ClientError> {
        let response = self
            .http
            .get(self.endpoint("user"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        let list: UserListResponse = json_body(response).await?;
        Ok(list.users)
    }

    pub async fn user_profile(
        &self,
        session: &Session,
        user_id: UserId,
    ) -> Result<UserProfile, ClientError> {
        let response = self
            .http
            .get(self.endpoint(format!("user/{}", user_id.0)))
            .bearer_auth(&session.token)
            .send()
            .await?;
        json_body(response).await
    }

    /// Edit the caller's own profile. Fields left `None` never reach the
    /// wire, so the backend keeps their current values.
    pub async fn update_profile(
        &self,
        session: &Session,
        update: &ProfileUpdate,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.endpoint("user"))
            .bearer_auth(&session.token)
            .json(update)
            .send()
            .await?;
        unit_body(response).await?;
        info!(user_id = session.user_id.0, "user: profile updated");
        Ok(())
    }
}

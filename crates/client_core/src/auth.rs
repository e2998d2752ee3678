use serde_json::json;
use tracing::info;

use shared::protocol::{AuthResponse, LoginRequest, RegisterRequest};

use crate::{
    error::ClientError,
    session::Session,
    transport::{json_body, unit_body},
    ChatClient,
};

impl ChatClient {
    /// Create an account. The backend mints a session right away, so a
    /// fresh registration can start calling without a separate login.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ClientError> {
        let response = self
            .http
            .post(self.endpoint("auth/register"))
            .json(&RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
                name: name.to_string(),
            })
            .send()
            .await?;
        let auth: AuthResponse = json_body(response).await?;
        info!(user_id = auth.user_id.0, "auth: account registered");
        Ok(auth.into())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let response = self
            .http
            .post(self.endpoint("auth/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let auth: AuthResponse = json_body(response).await?;
        info!(user_id = auth.user_id.0, "auth: session established");
        Ok(auth.into())
    }

    /// Invalidate the token server-side. Takes the session by value: a
    /// logged-out session has no further use.
    pub async fn logout(&self, session: Session) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint("auth/logout"))
            .bearer_auth(&session.token)
            .json(&json!({}))
            .send()
            .await?;
        unit_body(response).await?;
        info!(user_id = session.user_id.0, "auth: logged out");
        Ok(())
    }
}

use shared::{domain::UserId, protocol::AuthResponse};

/// Credentials minted by the backend at login or registration.
///
/// Every authenticated operation borrows one of these; the client itself
/// keeps no logged-in state, so two sessions can drive the same client
/// concurrently without stepping on each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: UserId) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self {
            token: auth.token,
            user_id: auth.user_id,
        }
    }
}

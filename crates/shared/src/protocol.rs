//! Request and response bodies for the chat backend's REST surface.
//!
//! The backend speaks JSON with camelCase keys; structs with multi-word
//! fields carry a `rename_all` so the Rust side stays snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ChannelId, MessageId, ReactKind, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelListResponse {
    pub channels: Vec<ChannelSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub id: ChannelId,
    pub name: String,
    pub creator: UserId,
    pub private: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDetail {
    pub name: String,
    pub creator: UserId,
    pub private: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub members: Vec<UserId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChannelRequest {
    pub name: String,
    pub private: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChannelResponse {
    pub channel_id: ChannelId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChannelRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteRequest {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial profile edit. Only the fields that are `Some` go on the wire;
/// the backend keeps its stored value for anything omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A channel message as the backend returns it. Text messages carry an empty
/// `image`; image messages carry an empty `message` and a data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub sender: UserId,
    pub message: String,
    #[serde(default)]
    pub image: Option<String>,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
    pub pinned: bool,
    #[serde(default)]
    pub reacts: Vec<React>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct React {
    pub user: UserId,
    pub react: ReactKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePage {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub message_id: MessageId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditMessageRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactRequest {
    pub react: ReactKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_decodes_backend_shape() {
        let raw = json!({
            "id": 42,
            "sender": 7,
            "message": "hello",
            "image": "",
            "sentAt": "2024-03-01T09:30:00.000Z",
            "editedAt": null,
            "pinned": false,
            "reacts": [{"user": 9, "react": "thumb-up"}],
        });
        let msg: Message = serde_json::from_value(raw).expect("decode message");
        assert_eq!(msg.id, MessageId(42));
        assert_eq!(msg.sender, UserId(7));
        assert!(msg.edited_at.is_none());
        assert_eq!(msg.reacts[0].react, ReactKind::ThumbUp);
    }

    #[test]
    fn react_kinds_use_kebab_case_wire_names() {
        assert_eq!(
            serde_json::to_value(ReactRequest {
                react: ReactKind::ThumbDown
            })
            .expect("encode react"),
            json!({"react": "thumb-down"})
        );
        assert_eq!(ReactKind::Heart.as_str(), "heart");
    }

    #[test]
    fn profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            name: Some("ada".into()),
            ..ProfileUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(update).expect("encode update"),
            json!({"name": "ada"})
        );
    }

    #[test]
    fn auth_response_maps_camel_case_user_id() {
        let auth: AuthResponse =
            serde_json::from_value(json!({"token": "t0k", "userId": 3})).expect("decode auth");
        assert_eq!(auth.user_id, UserId(3));
    }
}

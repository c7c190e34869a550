use serde::Deserialize;

use crate::domain::conversation::{ConversationEntry, UserProfile};

/// Reply of the direct-authorization token endpoint. Success and failure share
/// one shape; exactly one of `access_token` / `error` is set.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(super) struct TokenResponse {
    pub access_token: Option<String>,
    pub user_id: Option<i64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub validation_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiEnvelope<T> {
    pub response: Option<T>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(super) struct ApiError {
    pub error_code: i64,
    pub error_msg: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ConversationsPage {
    pub items: Vec<ConversationItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ConversationItem {
    pub conversation: ConversationInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ConversationInfo {
    pub peer: Peer,
    pub chat_settings: Option<ChatSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct Peer {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ChatSettings {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<ConversationItem> for ConversationEntry {
    fn from(item: ConversationItem) -> Self {
        let ConversationInfo {
            peer,
            chat_settings,
        } = item.conversation;

        Self {
            peer_id: peer.id,
            peer_type: peer.kind,
            title: chat_settings.map(|settings| settings.title),
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Kind of conversation counterpart supported by the cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerKind {
    /// One-to-one conversation with a single user.
    Direct,
    /// Multi-user chat with its own title.
    Group,
}

impl PeerKind {
    /// Maps the remote peer type tag. Communities, e-mail threads and any
    /// future kinds are unsupported and yield `None`.
    pub fn from_remote(tag: &str) -> Option<Self> {
        match tag {
            "user" => Some(Self::Direct),
            "chat" => Some(Self::Group),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub display_name: String,
    pub peer_id: i64,
    pub peer_kind: PeerKind,
}

/// One conversation as returned by the remote listing, before name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub peer_id: i64,
    pub peer_type: String,
    /// Chat title; only present for group conversations.
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

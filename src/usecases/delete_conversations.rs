use thiserror::Error;

use crate::{
    domain::conversation::Conversation,
    usecases::contracts::{MessagesApi, RemoteError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("deleting conversation {failed_peer_id} failed after {} deletion(s): {source}", .deleted.len())]
pub struct DeleteConversationsError {
    /// Peers already deleted before the failure; these stay deleted.
    pub deleted: Vec<i64>,
    pub failed_peer_id: i64,
    #[source]
    pub source: RemoteError,
}

/// Deletes each conversation in order, stopping at the first failure.
pub fn delete_conversations(
    api: &dyn MessagesApi,
    conversations: &[Conversation],
) -> Result<DeleteReport, DeleteConversationsError> {
    let mut deleted = Vec::with_capacity(conversations.len());

    for conversation in conversations {
        if let Err(source) = api.delete_conversation(conversation.peer_id) {
            tracing::warn!(
                peer_id = conversation.peer_id,
                applied = deleted.len(),
                error = %source,
                "conversation deletion failed"
            );
            return Err(DeleteConversationsError {
                deleted,
                failed_peer_id: conversation.peer_id,
                source,
            });
        }

        tracing::debug!(peer_id = conversation.peer_id, "conversation deleted");
        deleted.push(conversation.peer_id);
    }

    tracing::info!(deleted = deleted.len(), "bulk delete finished");
    Ok(DeleteReport { deleted })
}

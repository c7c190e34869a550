use serde::de::IgnoredAny;

use crate::{
    domain::conversation::{ConversationEntry, UserProfile},
    usecases::contracts::{MessagesApi, RemoteError},
};

use super::{
    client::{VkClient, VkSession},
    models::{ConversationsPage, User},
};

/// Message methods bound to an authorized session.
#[derive(Debug)]
pub struct VkMessages {
    client: VkClient,
    session: VkSession,
}

impl VkMessages {
    pub fn new(client: VkClient, session: VkSession) -> Self {
        tracing::debug!(user_id = session.user_id, "vk session bound");
        Self { client, session }
    }
}

impl MessagesApi for VkMessages {
    fn get_conversations(&self, count: usize) -> Result<Vec<ConversationEntry>, RemoteError> {
        let page: ConversationsPage = self.client.call(
            &self.session,
            "messages.getConversations",
            &[("count", count.to_string())],
        )?;

        Ok(page.items.into_iter().map(Into::into).collect())
    }

    fn get_users(&self, user_ids: &[i64]) -> Result<Vec<UserProfile>, RemoteError> {
        let ids = user_ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let users: Vec<User> =
            self.client
                .call(&self.session, "users.get", &[("user_ids", ids)])?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    fn delete_conversation(&self, peer_id: i64) -> Result<(), RemoteError> {
        let _: IgnoredAny = self.client.call(
            &self.session,
            "messages.deleteConversation",
            &[("peer_id", peer_id.to_string())],
        )?;

        Ok(())
    }
}

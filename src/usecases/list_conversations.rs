use std::collections::HashMap;

use thiserror::Error;

use crate::{
    domain::conversation::{Conversation, PeerKind},
    usecases::contracts::{MessagesApi, RemoteError},
};

const DEFAULT_CONVERSATION_PAGE_SIZE: usize = 200;
const MAX_CONVERSATION_PAGE_SIZE: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConversationsQuery {
    pub limit: usize,
}

impl Default for ListConversationsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CONVERSATION_PAGE_SIZE,
        }
    }
}

impl ListConversationsQuery {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    fn normalized_limit(&self) -> usize {
        match self.limit {
            0 => DEFAULT_CONVERSATION_PAGE_SIZE,
            value if value > MAX_CONVERSATION_PAGE_SIZE => MAX_CONVERSATION_PAGE_SIZE,
            value => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListConversationsError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("user {peer_id} is missing from the profile lookup reply")]
    MissingProfile { peer_id: i64 },
    #[error("group conversation {peer_id} has no title")]
    MissingTitle { peer_id: i64 },
}

/// Fetches the most recent conversations and resolves their display names.
///
/// Direct peers are resolved with one batched profile lookup; groups use their
/// own title. Unsupported peer kinds are dropped. Order follows the remote
/// listing and nothing is cached.
pub fn list_conversations(
    api: &dyn MessagesApi,
    query: &ListConversationsQuery,
) -> Result<Vec<Conversation>, ListConversationsError> {
    let limit = query.normalized_limit();
    let entries = api.get_conversations(limit)?;

    let direct_ids: Vec<i64> = entries
        .iter()
        .filter(|entry| PeerKind::from_remote(&entry.peer_type) == Some(PeerKind::Direct))
        .map(|entry| entry.peer_id)
        .collect();

    let names: HashMap<i64, String> = if direct_ids.is_empty() {
        HashMap::new()
    } else {
        api.get_users(&direct_ids)?
            .into_iter()
            .map(|profile| (profile.id, profile.display_name()))
            .collect()
    };

    let mut conversations = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(peer_kind) = PeerKind::from_remote(&entry.peer_type) else {
            tracing::debug!(
                peer_id = entry.peer_id,
                peer_type = %entry.peer_type,
                "skipping unsupported peer kind"
            );
            continue;
        };

        let display_name = match peer_kind {
            PeerKind::Direct => names
                .get(&entry.peer_id)
                .cloned()
                .ok_or(ListConversationsError::MissingProfile {
                    peer_id: entry.peer_id,
                })?,
            PeerKind::Group => entry.title.ok_or(ListConversationsError::MissingTitle {
                peer_id: entry.peer_id,
            })?,
        };

        conversations.push(Conversation {
            display_name,
            peer_id: entry.peer_id,
            peer_kind,
        });
    }

    tracing::info!(
        requested = limit,
        listed = conversations.len(),
        "conversations fetched"
    );

    Ok(conversations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry, FakeMessagesApi};

    #[test]
    fn uses_default_limit_when_query_limit_is_zero() {
        let api = FakeMessagesApi::default();

        list_conversations(&api, &ListConversationsQuery::with_limit(0)).expect("list");

        assert_eq!(api.requested_counts(), vec![200]);
    }

    #[test]
    fn caps_limit_to_maximum_boundary() {
        let api = FakeMessagesApi::default();

        list_conversations(&api, &ListConversationsQuery::with_limit(999)).expect("list");

        assert_eq!(api.requested_counts(), vec![200]);
    }

    #[test]
    fn passes_smaller_limit_through() {
        let api = FakeMessagesApi::default();

        list_conversations(&api, &ListConversationsQuery::with_limit(20)).expect("list");

        assert_eq!(api.requested_counts(), vec![20]);
    }

    #[test]
    fn resolves_names_with_a_single_batched_lookup() {
        let api = FakeMessagesApi::default()
            .with_entries(vec![
                entry(1, "user", None),
                entry(2_000_000_001, "chat", Some("Team")),
                entry(2, "user", None),
            ])
            .with_user(1, "Ivan", "Petrov")
            .with_user(2, "Anna", "Smirnova");

        let conversations =
            list_conversations(&api, &ListConversationsQuery::default()).expect("list");

        assert_eq!(api.user_lookups(), vec![vec![1, 2]]);
        assert_eq!(
            conversations
                .iter()
                .map(|item| item.display_name.as_str())
                .collect::<Vec<_>>(),
            vec!["Ivan Petrov", "Team", "Anna Smirnova"]
        );
        assert_eq!(conversations[1].peer_kind, PeerKind::Group);
    }

    #[test]
    fn skips_unsupported_peer_kinds() {
        let api = FakeMessagesApi::default()
            .with_entries(vec![
                entry(-100, "group", None),
                entry(5, "user", None),
                entry(7, "email", None),
            ])
            .with_user(5, "Oleg", "Ivanov");

        let conversations =
            list_conversations(&api, &ListConversationsQuery::default()).expect("list");

        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].peer_id, 5);
        assert_eq!(conversations[0].display_name, "Oleg Ivanov");
    }

    #[test]
    fn skips_profile_lookup_without_direct_peers() {
        let api = FakeMessagesApi::default()
            .with_entries(vec![entry(2_000_000_003, "chat", Some("Family"))]);

        list_conversations(&api, &ListConversationsQuery::default()).expect("list");

        assert!(api.user_lookups().is_empty());
    }

    #[test]
    fn missing_profile_is_a_contract_error() {
        let api = FakeMessagesApi::default().with_entries(vec![entry(9, "user", None)]);

        let err = list_conversations(&api, &ListConversationsQuery::default()).expect_err("fail");

        assert_eq!(err, ListConversationsError::MissingProfile { peer_id: 9 });
    }

    #[test]
    fn untitled_group_is_a_contract_error_without_partial_results() {
        let api = FakeMessagesApi::default()
            .with_entries(vec![
                entry(1, "user", None),
                entry(2_000_000_001, "chat", None),
                entry(2, "user", None),
            ])
            .with_user(1, "Ivan", "Petrov")
            .with_user(2, "Anna", "Smirnova");

        let result = list_conversations(&api, &ListConversationsQuery::default());

        assert_eq!(
            result,
            Err(ListConversationsError::MissingTitle {
                peer_id: 2_000_000_001
            })
        );
    }

    #[test]
    fn remote_failure_propagates_without_partial_results() {
        let api = FakeMessagesApi::default().failing_listing(RemoteError::Unavailable {
            message: "timed out".to_owned(),
        });

        let err = list_conversations(&api, &ListConversationsQuery::default()).expect_err("fail");

        assert!(matches!(
            err,
            ListConversationsError::Remote(RemoteError::Unavailable { .. })
        ));
    }
}

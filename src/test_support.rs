use std::{
    cell::RefCell,
    collections::VecDeque,
    io,
    sync::{Mutex, MutexGuard},
};

use crate::{
    domain::conversation::{ConversationEntry, UserProfile},
    usecases::contracts::{MessagesApi, PromptTerminal, RemoteError},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// Scripted terminal: prompts pop queued answers, `None` simulates EOF.
pub struct FakeTerminal {
    inputs: VecDeque<Option<String>>,
    pub output: Vec<String>,
}

impl FakeTerminal {
    pub fn new(inputs: Vec<Option<&str>>) -> Self {
        Self {
            inputs: inputs
                .into_iter()
                .map(|item| item.map(|value| value.to_owned()))
                .collect(),
            output: Vec::new(),
        }
    }
}

impl PromptTerminal for FakeTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }

    fn prompt_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front().flatten())
    }

    fn prompt_secret(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front().flatten())
    }
}

pub fn entry(peer_id: i64, peer_type: &str, title: Option<&str>) -> ConversationEntry {
    ConversationEntry {
        peer_id,
        peer_type: peer_type.to_owned(),
        title: title.map(str::to_owned),
    }
}

/// In-memory remote: deletions remove entries so a refresh sees them gone.
#[derive(Default)]
pub struct FakeMessagesApi {
    entries: RefCell<Vec<ConversationEntry>>,
    users: Vec<UserProfile>,
    listing_error: Option<RemoteError>,
    delete_failure: Option<(i64, RemoteError)>,
    requested_counts: RefCell<Vec<usize>>,
    user_lookups: RefCell<Vec<Vec<i64>>>,
    deleted: RefCell<Vec<i64>>,
}

impl FakeMessagesApi {
    pub fn with_entries(self, entries: Vec<ConversationEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
            ..self
        }
    }

    pub fn with_user(mut self, id: i64, first_name: &str, last_name: &str) -> Self {
        self.users.push(UserProfile {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        });
        self
    }

    /// Direct conversations with users named `User<id> Test`.
    pub fn with_direct_peers(self, ids: &[i64]) -> Self {
        let mut api =
            self.with_entries(ids.iter().map(|id| entry(*id, "user", None)).collect());
        for id in ids {
            api = api.with_user(*id, &format!("User{id}"), "Test");
        }
        api
    }

    pub fn failing_listing(self, error: RemoteError) -> Self {
        Self {
            listing_error: Some(error),
            ..self
        }
    }

    pub fn failing_delete(self, peer_id: i64, error: RemoteError) -> Self {
        Self {
            delete_failure: Some((peer_id, error)),
            ..self
        }
    }

    pub fn requested_counts(&self) -> Vec<usize> {
        self.requested_counts.borrow().clone()
    }

    pub fn user_lookups(&self) -> Vec<Vec<i64>> {
        self.user_lookups.borrow().clone()
    }

    pub fn deleted(&self) -> Vec<i64> {
        self.deleted.borrow().clone()
    }
}

impl MessagesApi for FakeMessagesApi {
    fn get_conversations(&self, count: usize) -> Result<Vec<ConversationEntry>, RemoteError> {
        self.requested_counts.borrow_mut().push(count);
        if let Some(error) = &self.listing_error {
            return Err(error.clone());
        }

        Ok(self.entries.borrow().iter().take(count).cloned().collect())
    }

    fn get_users(&self, user_ids: &[i64]) -> Result<Vec<UserProfile>, RemoteError> {
        self.user_lookups.borrow_mut().push(user_ids.to_vec());
        Ok(self
            .users
            .iter()
            .filter(|user| user_ids.contains(&user.id))
            .cloned()
            .collect())
    }

    fn delete_conversation(&self, peer_id: i64) -> Result<(), RemoteError> {
        if let Some((failing_peer, error)) = &self.delete_failure {
            if *failing_peer == peer_id {
                return Err(error.clone());
            }
        }

        self.deleted.borrow_mut().push(peer_id);
        self.entries
            .borrow_mut()
            .retain(|entry| entry.peer_id != peer_id);
        Ok(())
    }
}

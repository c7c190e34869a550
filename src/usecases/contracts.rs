use std::io;

use anyhow::Result;
use thiserror::Error;

use crate::domain::{
    conversation::{ConversationEntry, UserProfile},
    credentials::Credentials,
    events::AppEvent,
    shell_state::ShellState,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("two-factor confirmation is required")]
    TwoFactorRequired,
    #[error("{code}: {message}")]
    Rejected { code: String, message: String },
    #[error("remote service is unavailable: {message}")]
    Unavailable { message: String },
    #[error("unexpected remote payload: {message}")]
    InvalidData { message: String },
}

/// Exchanges credentials for an authenticated remote session.
pub trait RemoteAuthenticator {
    type Session;

    /// `remember_device` asks the remote side to trust this device after a
    /// successful one-time code.
    fn authenticate(
        &mut self,
        credentials: &Credentials,
        remember_device: bool,
    ) -> Result<Self::Session, RemoteError>;
}

/// Remote message operations consumed by the cleaner.
pub trait MessagesApi {
    fn get_conversations(&self, count: usize) -> Result<Vec<ConversationEntry>, RemoteError>;
    fn get_users(&self, user_ids: &[i64]) -> Result<Vec<UserProfile>, RemoteError>;
    fn delete_conversation(&self, peer_id: i64) -> Result<(), RemoteError>;
}

/// Line-oriented interactive terminal. `None` from a prompt means the user
/// closed the input.
pub trait PromptTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()>;
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

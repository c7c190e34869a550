use std::io;

use thiserror::Error;

use crate::{
    domain::credentials::Credentials,
    infra::{contracts::CredentialStore, error::AppError},
    usecases::contracts::{PromptTerminal, RemoteAuthenticator, RemoteError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    NeedCredentials,
    Authenticating,
    NeedOneTimeCode,
    Authenticated,
    Failed,
}

#[derive(Debug)]
pub enum AuthOutcome<S> {
    Authenticated { session: S, credentials: Credentials },
    Cancelled,
}

#[derive(Debug, Error)]
pub enum AuthFlowError {
    #[error("authentication failed: {0}")]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Store(#[from] AppError),
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),
}

/// Login state machine shared by both front ends.
///
/// Stored credentials skip the prompt. A two-factor challenge asks for one
/// code and retries once with device remembering on. Every success rewrites
/// the store; nothing is retried after a remote rejection.
#[derive(Debug)]
pub struct AuthFlow {
    state: AuthState,
    history: Vec<AuthState>,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlow {
    pub fn new() -> Self {
        Self {
            state: AuthState::NeedCredentials,
            history: vec![AuthState::NeedCredentials],
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Every state visited so far, in order.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn history(&self) -> &[AuthState] {
        &self.history
    }

    pub fn run<A: RemoteAuthenticator>(
        &mut self,
        terminal: &mut dyn PromptTerminal,
        store: &mut dyn CredentialStore,
        authenticator: &mut A,
    ) -> Result<AuthOutcome<A::Session>, AuthFlowError> {
        let stored = self.guard(store.load())?;

        let credentials = match stored {
            Some(credentials) => {
                tracing::info!(login = credentials.login(), "using stored credentials");
                credentials
            }
            None => {
                self.guard(terminal.print_line("No saved login found. Sign in to continue."))?;
                match self.guard(collect_credentials(terminal))? {
                    Some(credentials) => credentials,
                    None => return self.cancel(terminal),
                }
            }
        };

        self.enter(AuthState::Authenticating);
        let session = match authenticator.authenticate(&credentials, false) {
            Ok(session) => session,
            Err(RemoteError::TwoFactorRequired) => {
                self.enter(AuthState::NeedOneTimeCode);
                tracing::info!("remote service requested a one-time code");

                let Some(code) = self.guard(collect_one_time_code(terminal))? else {
                    return self.cancel(terminal);
                };

                self.enter(AuthState::Authenticating);
                let with_code = credentials.with_one_time_code(code);
                self.guard(authenticator.authenticate(&with_code, true))?
            }
            Err(error) => return Err(self.fail(error.into())),
        };

        self.guard(store.save(&credentials))?;
        self.enter(AuthState::Authenticated);
        self.guard(terminal.print_line("Signed in."))?;
        tracing::info!(login = credentials.login(), "authenticated");

        Ok(AuthOutcome::Authenticated {
            session,
            credentials,
        })
    }

    fn enter(&mut self, state: AuthState) {
        tracing::debug!(from = ?self.state, to = ?state, "auth state transition");
        self.state = state;
        self.history.push(state);
    }

    fn fail(&mut self, error: AuthFlowError) -> AuthFlowError {
        self.enter(AuthState::Failed);
        error
    }

    fn guard<T, E>(&mut self, result: Result<T, E>) -> Result<T, AuthFlowError>
    where
        E: Into<AuthFlowError>,
    {
        result.map_err(|error| self.fail(error.into()))
    }

    fn cancel<S>(
        &mut self,
        terminal: &mut dyn PromptTerminal,
    ) -> Result<AuthOutcome<S>, AuthFlowError> {
        self.enter(AuthState::Failed);
        tracing::info!("login cancelled by user");
        terminal.print_line("Input cancelled. Run vk-cleaner again to sign in.")?;
        Ok(AuthOutcome::Cancelled)
    }
}

fn collect_credentials(terminal: &mut dyn PromptTerminal) -> io::Result<Option<Credentials>> {
    let Some(login) = prompt_non_empty(terminal, "Login: ", "Login cannot be empty.")? else {
        return Ok(None);
    };

    let Some(password) = terminal.prompt_secret("Password: ")? else {
        return Ok(None);
    };

    Ok(Some(Credentials::new(login, password)))
}

fn collect_one_time_code(terminal: &mut dyn PromptTerminal) -> io::Result<Option<String>> {
    terminal.print_line("Two-factor authentication is on. Enter the code from SMS or the app.")?;
    prompt_non_empty(terminal, "Code: ", "Code cannot be empty.")
}

fn prompt_non_empty(
    terminal: &mut dyn PromptTerminal,
    prompt: &str,
    complaint: &str,
) -> io::Result<Option<String>> {
    loop {
        let Some(value) = terminal.prompt_line(prompt)? else {
            return Ok(None);
        };

        if !value.trim().is_empty() {
            return Ok(Some(value.trim().to_owned()));
        }

        terminal.print_line(complaint)?;
    }
}

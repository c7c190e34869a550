use crate::infra::{contracts::CredentialStore, error::AppError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub credentials_removed: bool,
}

/// Forgets the stored login. The caller ends the session afterwards.
pub fn logout(store: &mut dyn CredentialStore) -> Result<LogoutOutcome, AppError> {
    let credentials_removed = store.clear()?;
    tracing::info!(credentials_removed, "logged out");

    Ok(LogoutOutcome {
        credentials_removed,
    })
}

use anyhow::Result;

use crate::{
    domain::credentials::Credentials,
    infra::{
        config::AppConfig,
        contracts::{ConfigAdapter, CredentialStore},
        error::AppError,
    },
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Credential store kept in memory; counts saves so tests can assert the
/// idempotent overwrite after every login.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    pub stored: Option<Credentials>,
    pub saves: usize,
}

impl InMemoryCredentialStore {
    pub fn with(credentials: Credentials) -> Self {
        Self {
            stored: Some(credentials),
            saves: 0,
        }
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Result<Option<Credentials>, AppError> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, credentials: &Credentials) -> Result<(), AppError> {
        self.stored = Some(credentials.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<bool, AppError> {
        Ok(self.stored.take().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn in_memory_store_clears_once() {
        let mut store = InMemoryCredentialStore::with(Credentials::new("a", "b"));

        assert!(store.clear().expect("clear"));
        assert!(!store.clear().expect("clear"));
    }
}

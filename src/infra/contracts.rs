use anyhow::Result;

use crate::{
    domain::credentials::Credentials,
    infra::{config::AppConfig, error::AppError},
};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Local persistence of the login/password pair.
pub trait CredentialStore {
    /// Returns `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Credentials>, AppError>;
    /// Replaces whatever was stored before.
    fn save(&mut self, credentials: &Credentials) -> Result<(), AppError>;
    /// Returns whether anything was removed.
    fn clear(&mut self) -> Result<bool, AppError>;
}

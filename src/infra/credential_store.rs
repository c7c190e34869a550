use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    domain::credentials::Credentials,
    infra::{contracts::CredentialStore, error::AppError},
};

#[derive(Debug, Serialize, Deserialize)]
struct StoredCredentials {
    login: String,
    password: String,
}

/// Plain JSON file holding `{"login": ..., "password": ...}`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> AppError {
        AppError::CredentialsWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credentials>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(AppError::CredentialsRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let stored: StoredCredentials =
            serde_json::from_str(&raw).map_err(|source| AppError::CredentialsParse {
                path: self.path.clone(),
                source,
            })?;

        Ok(Some(Credentials::new(stored.login, stored.password)))
    }

    fn save(&mut self, credentials: &Credentials) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }

        let payload = serde_json::to_vec(&StoredCredentials {
            login: credentials.login().to_owned(),
            password: credentials.password().to_owned(),
        })
        .map_err(|source| self.write_error(source.into()))?;

        let tmp_path = self.path.with_extension("tmp");
        let mut file = private_file_options()
            .open(&tmp_path)
            .map_err(|source| self.write_error(source))?;
        file.write_all(&payload)
            .and_then(|()| file.sync_all())
            .map_err(|source| self.write_error(source))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|source| self.write_error(source))?;
        tracing::debug!(path = %self.path.display(), "credentials persisted");

        Ok(())
    }

    fn clear(&mut self) -> Result<bool, AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(AppError::CredentialsRemove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

fn private_file_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options
}

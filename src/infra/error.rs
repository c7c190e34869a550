use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to resolve storage path: {details}")]
    StoragePathResolution { details: String },
    #[error("failed to create storage directory {path}: {source}")]
    StorageDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stored credentials at {path}: {source}")]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored credentials at {path} are malformed: {source}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write stored credentials at {path}: {source}")]
    CredentialsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove stored credentials at {path}: {source}")]
    CredentialsRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("another vk-cleaner instance holds the lock at {path}")]
    InstanceBusy { path: PathBuf },
    #[error("failed to acquire instance lock at {path}: {source}")]
    InstanceLock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`[vk] client_secret` must be set: direct login for app {app_id} needs the app's secret")]
    MissingClientSecret { app_id: u32 },
    #[error("failed to initialize remote client: {details}")]
    RemoteClientInit { details: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

use std::{fs, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Installs the global subscriber writing to `log_file`.
///
/// Output never goes to stdout/stderr: prompts and the full-screen window own
/// the terminal. The returned guard must outlive the program's last event.
pub fn init(config: &LogConfig, log_file: &Path) -> Result<WorkerGuard, AppError> {
    let directory = log_file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(directory).map_err(|source| AppError::StorageDirCreate {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_name = log_file
        .file_name()
        .ok_or_else(|| AppError::StoragePathResolution {
            details: format!("log path {} has no file name", log_file.display()),
        })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

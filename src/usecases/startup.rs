use std::{
    fs::{File, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use fs2::FileExt;

use crate::infra::{error::AppError, storage_layout::StorageLayout};

/// Holds the advisory instance lock; released when dropped.
#[derive(Debug)]
pub struct InstanceLockGuard {
    file: File,
    path: PathBuf,
}

impl Drop for InstanceLockGuard {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

impl InstanceLockGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Makes sure only one vk-cleaner touches the stored login at a time.
pub fn acquire_instance_lock(layout: &StorageLayout) -> Result<InstanceLockGuard, AppError> {
    layout.ensure_dirs()?;
    let path = layout.instance_lock_file();

    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)
        .map_err(|source| AppError::InstanceLock {
            path: path.clone(),
            source,
        })?;

    match file.try_lock_exclusive() {
        Ok(()) => Ok(InstanceLockGuard { file, path }),
        Err(source) if is_contended(&source) => Err(AppError::InstanceBusy { path }),
        Err(source) => Err(AppError::InstanceLock { path, source }),
    }
}

fn is_contended(error: &std::io::Error) -> bool {
    error.kind() == ErrorKind::WouldBlock
        || error.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// TOML file source; a missing file yields defaults.
#[derive(Debug, Clone)]
pub struct FileConfigAdapter {
    path: PathBuf,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        load(&self.path).with_context(|| format!("loading {}", self.path.display()))
    }
}

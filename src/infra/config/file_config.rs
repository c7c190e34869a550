use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, FetchConfig, LogConfig, VkConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub vk: Option<FileVkConfig>,
    pub fetch: Option<FileFetchConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(vk) = self.vk {
            vk.merge_into(&mut config.vk);
        }

        if let Some(fetch) = self.fetch {
            fetch.merge_into(&mut config.fetch);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileVkConfig {
    pub app_id: Option<u32>,
    pub client_secret: Option<String>,
    pub api_version: Option<String>,
    pub api_base_url: Option<String>,
    pub oauth_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl FileVkConfig {
    fn merge_into(self, config: &mut VkConfig) {
        if let Some(app_id) = self.app_id {
            config.app_id = app_id;
        }

        if let Some(client_secret) = self.client_secret {
            config.client_secret = client_secret;
        }

        if let Some(api_version) = self.api_version {
            config.api_version = api_version;
        }

        if let Some(api_base_url) = self.api_base_url {
            config.api_base_url = api_base_url;
        }

        if let Some(oauth_url) = self.oauth_url {
            config.oauth_url = oauth_url;
        }

        if let Some(timeout_ms) = self.request_timeout_ms {
            config.request_timeout_ms = Some(timeout_ms);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileFetchConfig {
    pub conversation_limit: Option<usize>,
}

impl FileFetchConfig {
    fn merge_into(self, config: &mut FetchConfig) {
        if let Some(limit) = self.conversation_limit {
            config.conversation_limit = limit;
        }
    }
}

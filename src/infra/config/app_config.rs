use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub vk: VkConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Defaults to the log file inside the storage layout.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VkConfig {
    pub app_id: u32,
    pub client_secret: String,
    pub api_version: String,
    pub api_base_url: String,
    pub oauth_url: String,
    /// Unset keeps the HTTP client's own behaviour.
    pub request_timeout_ms: Option<u64>,
}

impl Default for VkConfig {
    fn default() -> Self {
        Self {
            app_id: 2_685_278,
            client_secret: String::new(),
            api_version: "5.131".to_owned(),
            api_base_url: "https://api.vk.com/method".to_owned(),
            oauth_url: "https://oauth.vk.com/token".to_owned(),
            request_timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchConfig {
    pub conversation_limit: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            conversation_limit: 200,
        }
    }
}

use std::{fmt, time::Duration};

use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::credentials::Credentials,
    infra::{config::VkConfig, error::AppError, secrets::redact_text},
    usecases::contracts::{RemoteAuthenticator, RemoteError},
};

use super::{
    auth::{session_from_token_response, token_form},
    models::{ApiEnvelope, ApiError, TokenResponse},
};

const USER_AGENT: &str = concat!("vk-cleaner/", env!("CARGO_PKG_VERSION"));

/// Authorized access token for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct VkSession {
    pub access_token: String,
    pub user_id: i64,
}

impl fmt::Debug for VkSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VkSession")
            .field("access_token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Blocking facade over the async HTTP client.
///
/// Every call runs to completion on a private current-thread runtime, so the
/// rest of the program stays synchronous.
pub struct VkClient {
    rt: Runtime,
    http: reqwest::Client,
    config: VkConfig,
}

impl fmt::Debug for VkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VkClient")
            .field("api_base_url", &self.config.api_base_url)
            .field("api_version", &self.config.api_version)
            .finish_non_exhaustive()
    }
}

impl VkClient {
    pub fn new(config: &VkConfig) -> Result<Self, AppError> {
        if config.client_secret.trim().is_empty() {
            return Err(AppError::MissingClientSecret {
                app_id: config.app_id,
            });
        }

        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| AppError::RemoteClientInit {
                details: format!("failed to initialize async runtime: {error}"),
            })?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout_ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let http = builder
            .build()
            .map_err(|error| AppError::RemoteClientInit {
                details: format!("failed to build http client: {error}"),
            })?;

        Ok(Self {
            rt,
            http,
            config: config.clone(),
        })
    }

    /// Calls an API method and unwraps the `response` envelope.
    pub(super) fn call<T: DeserializeOwned>(
        &self,
        session: &VkSession,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<T, RemoteError> {
        let url = format!(
            "{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            method
        );

        let mut form: Vec<(&str, String)> = params.to_vec();
        form.push(("access_token", session.access_token.clone()));
        form.push(("v", self.config.api_version.clone()));

        tracing::debug!(method, "calling vk api");
        let response = self
            .rt
            .block_on(self.http.post(&url).form(&form).send())
            .map_err(map_transport_error)?;
        let envelope = self
            .rt
            .block_on(response.json::<ApiEnvelope<T>>())
            .map_err(map_decode_error)?;

        unwrap_envelope(envelope, method)
    }

    fn request_token(
        &self,
        credentials: &Credentials,
        remember_device: bool,
    ) -> Result<TokenResponse, RemoteError> {
        let form = token_form(&self.config, credentials, remember_device);

        let response = self
            .rt
            .block_on(self.http.post(&self.config.oauth_url).form(&form).send())
            .map_err(map_transport_error)?;

        self.rt
            .block_on(response.json::<TokenResponse>())
            .map_err(map_decode_error)
    }
}

impl RemoteAuthenticator for VkClient {
    type Session = VkSession;

    fn authenticate(
        &mut self,
        credentials: &Credentials,
        remember_device: bool,
    ) -> Result<VkSession, RemoteError> {
        tracing::info!(
            login = credentials.login(),
            with_code = credentials.one_time_code().is_some(),
            "requesting access token"
        );

        let response = self.request_token(credentials, remember_device)?;
        session_from_token_response(response)
    }
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>, method: &str) -> Result<T, RemoteError> {
    if let Some(error) = envelope.error {
        return Err(map_api_error(error));
    }

    envelope.response.ok_or_else(|| RemoteError::InvalidData {
        message: format!("{method} returned neither response nor error"),
    })
}

fn map_api_error(error: ApiError) -> RemoteError {
    RemoteError::Rejected {
        code: format!("VK_API_{}", error.error_code),
        message: redact_text(&error.error_msg),
    }
}

fn map_transport_error(error: reqwest::Error) -> RemoteError {
    let kind = if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };

    RemoteError::Unavailable {
        message: format!("{kind}: {}", redact_text(&error.without_url().to_string())),
    }
}

fn map_decode_error(error: reqwest::Error) -> RemoteError {
    RemoteError::InvalidData {
        message: redact_text(&error.without_url().to_string()),
    }
}

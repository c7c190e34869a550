use crate::{
    domain::credentials::Credentials,
    infra::{
        config::VkConfig,
        secrets::{redact_text, sanitize_error_code},
    },
    usecases::contracts::RemoteError,
};

use super::{client::VkSession, models::TokenResponse};

const TWO_FACTOR_ERROR: &str = "need_validation";
const REQUESTED_SCOPE: &str = "messages";

/// Form body for the direct-authorization token endpoint.
pub(super) fn token_form(
    config: &VkConfig,
    credentials: &Credentials,
    remember_device: bool,
) -> Vec<(&'static str, String)> {
    let mut form = vec![
        ("grant_type", "password".to_owned()),
        ("client_id", config.app_id.to_string()),
        ("client_secret", config.client_secret.clone()),
        ("username", credentials.login().to_owned()),
        ("password", credentials.password().to_owned()),
        ("scope", REQUESTED_SCOPE.to_owned()),
        ("v", config.api_version.clone()),
        ("2fa_supported", "1".to_owned()),
    ];

    if let Some(code) = credentials.one_time_code() {
        form.push(("code", code.to_owned()));
        if remember_device {
            form.push(("remember", "1".to_owned()));
        }
    }

    form
}

pub(super) fn session_from_token_response(
    response: TokenResponse,
) -> Result<VkSession, RemoteError> {
    if let Some(error) = response.error {
        if error == TWO_FACTOR_ERROR {
            tracing::debug!(
                validation_type = response.validation_type.as_deref().unwrap_or("unknown"),
                "two-factor validation requested"
            );
            return Err(RemoteError::TwoFactorRequired);
        }

        return Err(RemoteError::Rejected {
            code: auth_error_code(&error),
            message: redact_text(
                response
                    .error_description
                    .as_deref()
                    .unwrap_or("authorization rejected"),
            ),
        });
    }

    match (response.access_token, response.user_id) {
        (Some(access_token), Some(user_id)) => Ok(VkSession {
            access_token,
            user_id,
        }),
        _ => Err(RemoteError::InvalidData {
            message: "token response has neither a token nor an error".to_owned(),
        }),
    }
}

fn auth_error_code(error: &str) -> String {
    let normalized: String = error
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    sanitize_error_code(&format!("AUTH_{normalized}"))
}

//! Mapping provider failures onto `AuthError`
//!
//! Two places in an authentication flow learn about provider errors:
//! 1. A token endpoint call returns a non-success JSON body
//! 2. The redirect callback URL carries `error` / `error_description`
//!
//! Both are decoded by the caller's HTTP layer; the functions here only
//! pick the right variant. The token endpoint body is looser than
//! `ErrorPayload`: any field may be missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::{MFA_REQUIRED_CODE, MISSING_REFRESH_TOKEN_CODE, REQUEST_ERROR_CODE};
use crate::error::AuthError;

/// Error body returned by the token endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    /// Present only when `error` is `mfa_required`
    #[serde(default)]
    pub mfa_token: Option<String>,
}

/// Query parameters of a redirect callback.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Classify a failed token endpoint response.
///
/// `audience` and `scope` are those of the request that failed; they are
/// only used when the provider reports `missing_refresh_token`.
pub fn classify_token_error(
    body: TokenErrorResponse,
    url: &str,
    audience: &str,
    scope: &str,
) -> AuthError {
    let description = body
        .error_description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("HTTP error. Unable to fetch {url}"));

    match body.error.as_deref() {
        Some(MFA_REQUIRED_CODE) => {
            let mfa_token = body.mfa_token.unwrap_or_else(|| {
                warn!(url, "mfa_required response without mfa_token");
                String::new()
            });
            debug!(url, "token endpoint requires multi-factor step-up");
            AuthError::mfa_required(MFA_REQUIRED_CODE, description, mfa_token)
        }
        Some(MISSING_REFRESH_TOKEN_CODE) => {
            debug!(url, audience, scope, "no refresh token available");
            AuthError::missing_refresh_token(audience, scope)
        }
        Some(code) if !code.is_empty() => {
            debug!(url, error = code, "token endpoint returned error");
            AuthError::generic(code, description)
        }
        _ => {
            warn!(url, "token endpoint error body has no error code");
            AuthError::generic(REQUEST_ERROR_CODE, description)
        }
    }
}

/// Decode and classify a raw token endpoint error body.
///
/// A body that is not a JSON object is treated as having no fields.
pub fn classify_token_error_body(
    body: &str,
    url: &str,
    audience: &str,
    scope: &str,
) -> AuthError {
    let parsed = serde_json::from_str::<TokenErrorResponse>(body).unwrap_or_else(|e| {
        warn!(url, error = %e, "token endpoint error body is not valid JSON");
        TokenErrorResponse::default()
    });
    classify_token_error(parsed, url, audience, scope)
}

/// Extract the error reported by a redirect callback, if any.
///
/// An empty `error` parameter counts as a successful callback.
///
/// `app_state` is the caller state stored when the flow started; it is
/// attached to the error so the caller can still restore its UI.
pub fn callback_error(params: &CallbackParams, app_state: Option<Value>) -> Option<AuthError> {
    let error = params.error.as_deref().filter(|e| !e.is_empty())?;
    let description = params
        .error_description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(error);
    let state = params.state.as_deref().unwrap_or_default();

    debug!(error, state, "redirect callback returned error");
    Some(AuthError::authentication_with_app_state(
        error,
        description,
        state,
        app_state,
    ))
}

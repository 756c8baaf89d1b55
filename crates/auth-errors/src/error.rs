//! Authentication error taxonomy
//!
//! `AuthError` is the single error type handed back by token exchange,
//! redirect callback handling, silent authentication and popup logins.
//! Each variant carries the fields callers need to branch on the failure
//! and to show a diagnostic. Values are immutable once built.

use common::Secret;
use serde_json::Value;

use crate::constants::{
    CANCELLED_CODE, CANCELLED_MESSAGE, MISSING_REFRESH_TOKEN_CODE, TIMEOUT_CODE, TIMEOUT_MESSAGE,
};
use crate::kind::ErrorKind;
use crate::message::missing_refresh_token_message;
use crate::payload::ErrorPayload;
use crate::popup::PopupHandle;

/// Failures reported to callers of the authentication client.
///
/// `Display` renders the human-readable message; `error()` returns the
/// machine-readable code.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// Error response passed through from the identity provider.
    #[error("{error_description}")]
    Generic {
        error: String,
        error_description: String,
    },

    /// The redirect callback reported an error.
    #[error("{error_description}")]
    Authentication {
        error: String,
        error_description: String,
        /// Correlation token echoed from the authorization request
        state: String,
        /// Caller state carried through the redirect round trip
        app_state: Option<Value>,
    },

    /// A provider call or silent authentication exceeded its deadline.
    ///
    /// Silent authentication usually times out because third-party cookies
    /// or iframes are blocked, not because the network is slow.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// The user did not finish a popup login in time.
    #[error("{}", TIMEOUT_MESSAGE)]
    PopupTimeout { popup: PopupHandle },

    /// The popup was closed before the login completed.
    #[error("{}", CANCELLED_MESSAGE)]
    PopupCancelled { popup: PopupHandle },

    /// The primary credential was accepted but a second factor is needed.
    /// Resume the flow by presenting `mfa_token` to the MFA challenge API.
    #[error("{error_description}")]
    MfaRequired {
        error: String,
        error_description: String,
        mfa_token: Secret<String>,
    },

    #[error("{}", missing_refresh_token_message(.audience, .scope))]
    MissingRefreshToken { audience: String, scope: String },
}

/// Result alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

impl AuthError {
    pub fn generic(error: impl Into<String>, error_description: impl Into<String>) -> Self {
        AuthError::Generic {
            error: error.into(),
            error_description: error_description.into(),
        }
    }

    /// Build a `Generic` error from a decoded provider error body.
    pub fn from_payload(payload: ErrorPayload) -> Self {
        AuthError::Generic {
            error: payload.error,
            error_description: payload.error_description,
        }
    }

    /// Callback error without any caller state.
    pub fn authentication(
        error: impl Into<String>,
        error_description: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        AuthError::Authentication {
            error: error.into(),
            error_description: error_description.into(),
            state: state.into(),
            app_state: None,
        }
    }

    pub fn authentication_with_app_state(
        error: impl Into<String>,
        error_description: impl Into<String>,
        state: impl Into<String>,
        app_state: Option<Value>,
    ) -> Self {
        AuthError::Authentication {
            error: error.into(),
            error_description: error_description.into(),
            state: state.into(),
            app_state,
        }
    }

    pub fn timeout() -> Self {
        AuthError::Timeout
    }

    pub fn popup_timeout(popup: PopupHandle) -> Self {
        AuthError::PopupTimeout { popup }
    }

    pub fn popup_cancelled(popup: PopupHandle) -> Self {
        AuthError::PopupCancelled { popup }
    }

    pub fn mfa_required(
        error: impl Into<String>,
        error_description: impl Into<String>,
        mfa_token: impl Into<String>,
    ) -> Self {
        AuthError::MfaRequired {
            error: error.into(),
            error_description: error_description.into(),
            mfa_token: Secret::new(mfa_token.into()),
        }
    }

    pub fn missing_refresh_token(audience: impl Into<String>, scope: impl Into<String>) -> Self {
        AuthError::MissingRefreshToken {
            audience: audience.into(),
            scope: scope.into(),
        }
    }

    /// Machine-readable error code.
    pub fn error(&self) -> &str {
        match self {
            AuthError::Generic { error, .. }
            | AuthError::Authentication { error, .. }
            | AuthError::MfaRequired { error, .. } => error,
            AuthError::Timeout | AuthError::PopupTimeout { .. } => TIMEOUT_CODE,
            AuthError::PopupCancelled { .. } => CANCELLED_CODE,
            AuthError::MissingRefreshToken { .. } => MISSING_REFRESH_TOKEN_CODE,
        }
    }

    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Generic { .. } => ErrorKind::Generic,
            AuthError::Authentication { .. } => ErrorKind::Authentication,
            AuthError::Timeout => ErrorKind::Timeout,
            AuthError::PopupTimeout { .. } => ErrorKind::PopupTimeout,
            AuthError::PopupCancelled { .. } => ErrorKind::PopupCancelled,
            AuthError::MfaRequired { .. } => ErrorKind::MfaRequired,
            AuthError::MissingRefreshToken { .. } => ErrorKind::MissingRefreshToken,
        }
    }

    /// Whether this error is of `kind` or a specialization of it.
    ///
    /// A `PopupTimeout` is a `Timeout`, and every error is a `Generic`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind().is_a(kind)
    }

    pub fn state(&self) -> Option<&str> {
        match self {
            AuthError::Authentication { state, .. } => Some(state.as_str()),
            _ => None,
        }
    }

    pub fn app_state(&self) -> Option<&Value> {
        match self {
            AuthError::Authentication { app_state, .. } => app_state.as_ref(),
            _ => None,
        }
    }

    /// The popup window involved, for popup timeouts and cancellations.
    pub fn popup(&self) -> Option<&PopupHandle> {
        match self {
            AuthError::PopupTimeout { popup } | AuthError::PopupCancelled { popup } => Some(popup),
            _ => None,
        }
    }

    pub fn mfa_token(&self) -> Option<&str> {
        match self {
            AuthError::MfaRequired { mfa_token, .. } => Some(mfa_token.expose().as_str()),
            _ => None,
        }
    }

    pub fn audience(&self) -> Option<&str> {
        match self {
            AuthError::MissingRefreshToken { audience, .. } => Some(audience.as_str()),
            _ => None,
        }
    }

    pub fn scope(&self) -> Option<&str> {
        match self {
            AuthError::MissingRefreshToken { scope, .. } => Some(scope.as_str()),
            _ => None,
        }
    }

    /// Convert back to the `{error, error_description}` body shape.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload::new(self.error(), self.message())
    }
}

impl From<ErrorPayload> for AuthError {
    fn from(payload: ErrorPayload) -> Self {
        AuthError::from_payload(payload)
    }
}

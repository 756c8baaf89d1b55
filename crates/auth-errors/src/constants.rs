//! Fixed error codes and messages
//!
//! Calling code matches on these strings and renders the messages to end
//! users, so they are part of the public contract and must not change.

/// Code carried by `Timeout` and `PopupTimeout`
pub const TIMEOUT_CODE: &str = "timeout";

/// Message carried by `Timeout` and `PopupTimeout`
pub const TIMEOUT_MESSAGE: &str = "Timeout";

/// Code carried by `PopupCancelled`
pub const CANCELLED_CODE: &str = "cancelled";

/// Message carried by `PopupCancelled`
pub const CANCELLED_MESSAGE: &str = "Popup closed";

/// Code returned by the token endpoint when a second factor is needed
pub const MFA_REQUIRED_CODE: &str = "mfa_required";

/// Code carried by `MissingRefreshToken`
pub const MISSING_REFRESH_TOKEN_CODE: &str = "missing_refresh_token";

/// Audience name that never requires an explicit refresh token opt-in.
/// Suppressed in the missing-refresh-token message.
pub const DEFAULT_AUDIENCE: &str = "default";

/// Fallback code when the token endpoint error body has no `error` field
pub const REQUEST_ERROR_CODE: &str = "request_error";

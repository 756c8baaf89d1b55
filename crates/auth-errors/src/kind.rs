//! Error kind discriminant
//!
//! Every `AuthError` variant maps to exactly one `ErrorKind`. Kinds form a
//! shallow tree rooted at `Generic`: a popup timeout is still a timeout,
//! and every kind is a generic provider error. Callers branch with
//! `AuthError::is` instead of inspecting variants one by one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Pass-through provider error response
    #[serde(rename = "generic")]
    Generic,
    /// Redirect callback exchange failed
    #[serde(rename = "authentication")]
    Authentication,
    /// Operation exceeded its deadline
    #[serde(rename = "timeout")]
    Timeout,
    /// Popup-based operation exceeded its deadline
    #[serde(rename = "popup-timeout")]
    PopupTimeout,
    /// User closed the popup before completion
    #[serde(rename = "cancelled")]
    PopupCancelled,
    /// Step-up authentication required
    #[serde(rename = "mfa_required")]
    MfaRequired,
    /// A refresh token was requested but none was issued or stored
    #[serde(rename = "missing_refresh_token")]
    MissingRefreshToken,
}

impl ErrorKind {
    /// Stable string form, as used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Generic => "generic",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Timeout => "timeout",
            ErrorKind::PopupTimeout => "popup-timeout",
            ErrorKind::PopupCancelled => "cancelled",
            ErrorKind::MfaRequired => "mfa_required",
            ErrorKind::MissingRefreshToken => "missing_refresh_token",
        }
    }

    /// The kind this one specializes, `None` for the root.
    pub fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::Generic => None,
            ErrorKind::PopupTimeout => Some(ErrorKind::Timeout),
            ErrorKind::Authentication
            | ErrorKind::Timeout
            | ErrorKind::PopupCancelled
            | ErrorKind::MfaRequired
            | ErrorKind::MissingRefreshToken => Some(ErrorKind::Generic),
        }
    }

    /// Whether `self` equals `ancestor` or specializes it.
    pub fn is_a(self, ancestor: ErrorKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorKind; 7] = [
        ErrorKind::Generic,
        ErrorKind::Authentication,
        ErrorKind::Timeout,
        ErrorKind::PopupTimeout,
        ErrorKind::PopupCancelled,
        ErrorKind::MfaRequired,
        ErrorKind::MissingRefreshToken,
    ];

    #[test]
    fn every_kind_is_generic() {
        for kind in ALL {
            assert!(kind.is_a(ErrorKind::Generic), "{kind} must be generic");
            assert!(kind.is_a(kind), "{kind} must match itself");
        }
    }

    #[test]
    fn popup_timeout_is_a_timeout() {
        assert!(ErrorKind::PopupTimeout.is_a(ErrorKind::Timeout));
        assert!(!ErrorKind::Timeout.is_a(ErrorKind::PopupTimeout));
    }

    #[test]
    fn siblings_do_not_match() {
        assert!(!ErrorKind::PopupCancelled.is_a(ErrorKind::Timeout));
        assert!(!ErrorKind::MfaRequired.is_a(ErrorKind::Authentication));
        assert!(!ErrorKind::Generic.is_a(ErrorKind::Timeout));
    }

    #[test]
    fn serializes_as_stable_string() {
        for kind in ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: ErrorKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}

//! Error values for a browser-flow OAuth client
//!
//! Token exchange, redirect callback handling, silent authentication and
//! popup logins all report failures as an [`AuthError`]. Callers branch on
//! [`AuthError::kind`] / [`AuthError::is`] and show [`AuthError::message`].
//!
//! Typical sources of each variant:
//! 1. Token endpoint error body → `response::classify_token_error()`
//! 2. Redirect callback with `error=` → `response::callback_error()`
//! 3. Deadline expired → `AuthError::timeout()` / `AuthError::popup_timeout()`
//! 4. Popup closed by the user → `AuthError::popup_cancelled()`

pub mod constants;
pub mod error;
pub mod kind;
pub mod message;
pub mod payload;
pub mod popup;
pub mod response;

pub use error::{AuthError, Result};
pub use kind::ErrorKind;
pub use message::value_or_empty_string;
pub use payload::{ErrorPayload, PayloadError};
pub use popup::{PopupHandle, PopupWindow};
pub use response::{
    CallbackParams, TokenErrorResponse, callback_error, classify_token_error,
    classify_token_error_body,
};

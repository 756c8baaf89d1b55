//! Message synthesis helpers

use crate::constants::DEFAULT_AUDIENCE;

/// Returns `value`, or `""` when it is empty or listed in `exclude`.
pub fn value_or_empty_string<'a>(value: &'a str, exclude: &[&str]) -> &'a str {
    if value.is_empty() || exclude.contains(&value) {
        ""
    } else {
        value
    }
}

/// Message for a missing refresh token.
///
/// The default audience is blanked out: no refresh token opt-in is needed
/// for it, so naming it would suggest a misconfiguration.
pub fn missing_refresh_token_message(audience: &str, scope: &str) -> String {
    format!(
        "Missing Refresh Token (audience: '{}', scope: '{}')",
        value_or_empty_string(audience, &[DEFAULT_AUDIENCE]),
        value_or_empty_string(scope, &[])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_becomes_empty_string() {
        assert_eq!(value_or_empty_string("", &[]), "");
        assert_eq!(value_or_empty_string("", &["x"]), "");
    }

    #[test]
    fn excluded_value_becomes_empty_string() {
        assert_eq!(value_or_empty_string("default", &["default"]), "");
        assert_eq!(value_or_empty_string("other", &["default", "other"]), "");
    }

    #[test]
    fn other_values_pass_through() {
        assert_eq!(value_or_empty_string("openid", &[]), "openid");
        assert_eq!(value_or_empty_string("Default", &["default"]), "Default");
    }

    #[test]
    fn default_audience_is_suppressed() {
        assert_eq!(
            missing_refresh_token_message("default", "openid"),
            "Missing Refresh Token (audience: '', scope: 'openid')"
        );
    }

    #[test]
    fn empty_scope_is_suppressed() {
        assert_eq!(
            missing_refresh_token_message("https://api.example.com", ""),
            "Missing Refresh Token (audience: 'https://api.example.com', scope: '')"
        );
    }

    #[test]
    fn scope_named_default_is_kept() {
        // Only the audience excludes "default"
        assert_eq!(
            missing_refresh_token_message("", "default"),
            "Missing Refresh Token (audience: '', scope: 'default')"
        );
    }
}

//! Session cookie handling

use uez_core::domain::SessionToken;

/// Read the access token stored in cookie `name` from a `Cookie` header
/// (`"a=1; uezaccesstoken=abc"`).
///
/// Surrounding quotes are stripped; an empty value counts as no session.
pub fn access_token_from_cookies(header: &str, name: &str) -> Option<SessionToken> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .and_then(|(_, value)| SessionToken::new(value.trim().trim_matches('"')))
}

//! Post-login redirect targets
//!
//! The login flow carries the originally requested path in a `from` query
//! parameter. Only same-origin paths are ever followed.

use crate::config::{MEMBERSHIP_LOGIN_URL, MEMBERSHIP_REDIRECT_USER};

/// A path on this origin: starts with a single `/`, no scheme-relative `//`
/// or `/\` prefix, no control characters.
pub(crate) fn is_local_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.starts_with("/\\")
        && !target.chars().any(|c| c.is_control())
}

fn is_login_page(target: &str, login_url: &str) -> bool {
    let path = target.split(['?', '#']).next().unwrap_or(target);
    path == login_url
}

/// Where to send a visitor after login, given the requested `from` value.
pub(crate) fn post_login_target(from: Option<&str>) -> String {
    resolve_target(from, &MEMBERSHIP_LOGIN_URL, &MEMBERSHIP_REDIRECT_USER)
}

/// Login page URL that returns the visitor to `from` afterwards.
pub(crate) fn login_url_with_from(from: &str) -> String {
    build_login_url(from, &MEMBERSHIP_LOGIN_URL, &MEMBERSHIP_REDIRECT_USER)
}

fn resolve_target(from: Option<&str>, login_url: &str, default_target: &str) -> String {
    match from {
        Some(target) if is_local_path(target) && !is_login_page(target, login_url) => {
            target.to_string()
        }
        _ => default_target.to_string(),
    }
}

// `from` is left out only when login would land there anyway
fn build_login_url(from: &str, login_url: &str, default_target: &str) -> String {
    if from == default_target || !is_local_path(from) || is_login_page(from, login_url) {
        return login_url.to_string();
    }
    format!("{}?from={}", login_url, urlencoding::encode(from))
}

//! Central configuration for the membership_auth_axum crate

use std::sync::LazyLock;

/// Mount point of the JSON authentication API
pub const AUTH_API_PREFIX: &str = "/api/auth";

/// URL of the login page
/// Default: "/login"
pub static MEMBERSHIP_LOGIN_URL: LazyLock<String> = LazyLock::new(|| {
    local_path_or(std::env::var("MEMBERSHIP_LOGIN_URL").ok(), "/login")
});

/// Where an authenticated visitor lands when no `from` target is given
/// Default: "/"
pub static MEMBERSHIP_REDIRECT_USER: LazyLock<String> = LazyLock::new(|| {
    local_path_or(std::env::var("MEMBERSHIP_REDIRECT_USER").ok(), "/")
});

fn local_path_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if crate::redirect::is_local_path(&v) => v,
        Some(v) => {
            tracing::warn!("Ignoring non-local URL {:?}, using {}", v, default);
            default.to_string()
        }
        None => default.to_string(),
    }
}

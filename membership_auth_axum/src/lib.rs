//! membership-auth-axum - Axum integration for membership-auth
//!
//! Provides the login page, the JSON login/logout/session endpoints, an
//! [`AuthSession`] extractor and middleware that redirect anonymous visitors
//! to the login page while remembering where they were going.

mod api;
mod config;
mod error;
mod middleware;
mod pages;
mod redirect;
mod router;
mod session;

#[cfg(test)]
mod test_utils;

pub use config::{AUTH_API_PREFIX, MEMBERSHIP_LOGIN_URL, MEMBERSHIP_REDIRECT_USER};
pub use error::IntoResponseError;
pub use middleware::{is_authenticated_401, is_authenticated_redirect};
pub use router::{membership_auth_router, membership_auth_router_no_trace};
pub use session::{AuthRedirect, AuthSession, SharedAuthenticator};

// Re-export the core types so applications need only one dependency
pub use membership_auth::{
    AUTH_COOKIE_NAME, AuthConfig, ConfigError, HeaderCookies, Session, SessionAuthenticator,
    SessionError,
};

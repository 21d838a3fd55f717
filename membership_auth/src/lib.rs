//! membership-auth - shared-password membership authentication
//!
//! Members log in with a single shared password and stay logged in for 30
//! days through a signed, expiring token kept in an HTTP-only cookie. No
//! server-side session storage is involved.
//!
//! ```no_run
//! use membership_auth::{AuthConfig, HeaderCookies, SessionAuthenticator};
//!
//! let auth = SessionAuthenticator::new(AuthConfig::from_env()?);
//! let mut cookies = HeaderCookies::new();
//! if auth.login(&mut cookies, "submitted password")? {
//!     assert!(auth.get_session(&cookies).is_some());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod authenticator;
mod config;
mod errors;
mod password;
mod session;
mod utils;

#[cfg(test)]
mod test_utils;

pub use authenticator::SessionAuthenticator;
pub use config::{
    APP_ENV_ENV, AuthConfig, MEMBERSHIP_PASSWORD_ENV, MIN_MEMBERSHIP_PASSWORD_LEN,
    MIN_SIGNING_KEY_LEN, SIGNING_KEY_ENV, Secret,
};
pub use errors::ConfigError;
pub use session::{
    AUTH_COOKIE_NAME, CookieContext, CookieOptions, HeaderCookies, SESSION_MAX_AGE_DAYS,
    SESSION_MAX_AGE_SECS, SameSite, Session, SessionError,
};
pub use utils::{UtilError, gen_random_string, generate_signing_secret};

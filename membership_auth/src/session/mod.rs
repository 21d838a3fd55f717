mod config;
mod errors;
mod main;
mod types;

pub use config::{AUTH_COOKIE_NAME, SESSION_MAX_AGE_DAYS, SESSION_MAX_AGE_SECS};
pub use errors::SessionError;
pub use main::{CookieContext, CookieOptions, HeaderCookies, SameSite};
pub use types::Session;

pub(crate) use main::{TokenCodec, clear_session, get_session, set_session_cookie};

#[cfg(test)]
pub(crate) use main::test_utils;

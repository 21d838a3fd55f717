use crate::session::config::AUTH_COOKIE_NAME;
use crate::session::errors::SessionError;
use crate::session::types::Session;

use super::cookie::{CookieContext, CookieOptions};
use super::token::TokenCodec;

/// Read the session cookie and verify its token.
///
/// Any failure, including an unreadable cookie, yields `None`.
pub(crate) fn get_session<C>(codec: &TokenCodec, cookies: &C) -> Option<Session>
where
    C: CookieContext + ?Sized,
{
    let token = match cookies.get_cookie(AUTH_COOKIE_NAME) {
        Ok(Some(token)) if !token.is_empty() => token,
        Ok(_) => {
            tracing::debug!("No session cookie '{}' found", AUTH_COOKIE_NAME);
            return None;
        }
        Err(e) => {
            tracing::warn!("Failed to read session cookie, treating as anonymous: {}", e);
            return None;
        }
    };

    codec.verify_token(&token)
}

pub(crate) fn set_session_cookie<C>(
    cookies: &mut C,
    token: &str,
    options: &CookieOptions,
) -> Result<(), SessionError>
where
    C: CookieContext + ?Sized,
{
    cookies.set_cookie(AUTH_COOKIE_NAME, token, options)?;
    tracing::debug!("Session cookie set (secure: {})", options.secure);
    Ok(())
}

pub(crate) fn clear_session<C>(cookies: &mut C, options: &CookieOptions) -> Result<(), SessionError>
where
    C: CookieContext + ?Sized,
{
    cookies.delete_cookie(AUTH_COOKIE_NAME, options)?;
    tracing::debug!("Session cookie cleared");
    Ok(())
}

use chrono::{DateTime, Utc};

use crate::config::AuthConfig;
use crate::password;
use crate::session::{self, CookieContext, CookieOptions, Session, SessionError, TokenCodec};

/// Shared-password authenticator with stateless, cookie-held sessions.
///
/// Built once from an [`AuthConfig`] and shared between requests, usually as
/// `Arc<SessionAuthenticator>`. It holds no mutable state.
#[derive(Debug)]
pub struct SessionAuthenticator {
    config: AuthConfig,
    codec: TokenCodec,
}

impl SessionAuthenticator {
    pub fn new(config: AuthConfig) -> Self {
        let codec = TokenCodec::new(config.signing_key());
        Self { config, codec }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn secure_cookies(&self) -> bool {
        self.config.secure_cookies()
    }

    /// Effective attributes of the session cookie
    pub fn cookie_options(&self) -> CookieOptions {
        CookieOptions::session(self.config.secure_cookies())
    }

    /// Check a submitted password against the membership password.
    pub fn verify_password(&self, candidate: &str) -> bool {
        password::verify_password(candidate, self.config.membership_password())
    }

    /// Issue a signed token for a login happening now, valid for 30 days.
    pub fn create_token(&self) -> Result<String, SessionError> {
        self.codec.create_token_at(Utc::now())
    }

    /// Issue a token as if the login happened at `issued_at`.
    pub fn create_token_at(&self, issued_at: DateTime<Utc>) -> Result<String, SessionError> {
        self.codec.create_token_at(issued_at)
    }

    /// Verify a token's signature and expiry.
    ///
    /// Returns `None` on any failure without saying why.
    pub fn verify_token(&self, token: &str) -> Option<Session> {
        self.codec.verify_token(token)
    }

    /// Session carried by the request's `auth-token` cookie, if valid
    pub fn get_session<C>(&self, cookies: &C) -> Option<Session>
    where
        C: CookieContext + ?Sized,
    {
        session::get_session(&self.codec, cookies)
    }

    pub fn set_session_cookie<C>(&self, cookies: &mut C, token: &str) -> Result<(), SessionError>
    where
        C: CookieContext + ?Sized,
    {
        session::set_session_cookie(cookies, token, &self.cookie_options())
    }

    pub fn clear_session<C>(&self, cookies: &mut C) -> Result<(), SessionError>
    where
        C: CookieContext + ?Sized,
    {
        session::clear_session(cookies, &self.cookie_options())
    }

    /// Verify the password and, on success, issue a token and set the cookie.
    ///
    /// Returns `Ok(false)` for a wrong password; the cookie is left untouched.
    #[tracing::instrument(skip_all)]
    pub fn login<C>(&self, cookies: &mut C, candidate: &str) -> Result<bool, SessionError>
    where
        C: CookieContext + ?Sized,
    {
        if !self.verify_password(candidate) {
            tracing::warn!("Login rejected: wrong membership password");
            return Ok(false);
        }

        let token = self.create_token()?;
        self.set_session_cookie(cookies, &token)?;
        tracing::info!("Member logged in");
        Ok(true)
    }
}

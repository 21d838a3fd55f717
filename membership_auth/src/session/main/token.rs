//! Signed session tokens
//!
//! Tokens are compact HS256 JWTs carrying a [`Session`] plus `iat`/`exp`
//! claims. Verification collapses every failure into `None` so callers only
//! ever learn "authenticated or not".

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::Secret;
use crate::session::config::SESSION_MAX_AGE_DAYS;
use crate::session::errors::SessionError;
use crate::session::types::{Session, SessionClaims};

pub(crate) struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    pub(crate) fn new(signing_key: &Secret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat"]);

        Self {
            encoding_key: EncodingKey::from_secret(signing_key.expose().as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_key.expose().as_bytes()),
            validation,
        }
    }

    /// Issue a token for a login happening at `now`, valid for 30 days.
    pub(crate) fn create_token_at(&self, now: DateTime<Utc>) -> Result<String, SessionError> {
        let claims = SessionClaims {
            authenticated: true,
            login_date: now,
            iat: now.timestamp(),
            exp: (now + Duration::days(SESSION_MAX_AGE_DAYS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            SessionError::Token("Failed to sign session token".to_string())
        })
    }

    pub(crate) fn verify_token(&self, token: &str) -> Option<Session> {
        let claims = match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!("Session token rejected: {:?}", e.kind());
                return None;
            }
        };

        if !claims.authenticated {
            tracing::debug!("Session token rejected: not marked as authenticated");
            return None;
        }

        Some(Session::from(claims))
    }
}

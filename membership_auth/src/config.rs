//! Secret loading for the membership authenticator
//!
//! Both secrets are read once, validated, and then carried around inside an
//! [`AuthConfig`] that is handed to [`crate::SessionAuthenticator::new`].

use std::env;
use std::fmt;

use crate::errors::ConfigError;

/// Environment variable holding the token signing key
pub const SIGNING_KEY_ENV: &str = "JWT_SECRET";
/// Environment variable holding the shared membership password
pub const MEMBERSHIP_PASSWORD_ENV: &str = "MEMBERSHIP_PASSWORD";
/// Environment variable selecting the runtime environment (`production` enables `Secure` cookies)
pub const APP_ENV_ENV: &str = "APP_ENV";

pub const MIN_SIGNING_KEY_LEN: usize = 32;
pub const MIN_MEMBERSHIP_PASSWORD_LEN: usize = 8;

/// A secret value that never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }

    /// Number of characters, the unit the minimum lengths are expressed in
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Validated secrets plus the cookie policy derived from the runtime environment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    signing_key: Secret,
    membership_password: Secret,
    secure_cookies: bool,
}

impl AuthConfig {
    /// Build a configuration from explicit values, enforcing the minimum lengths.
    pub fn new(
        signing_key: impl Into<String>,
        membership_password: impl Into<String>,
        secure_cookies: bool,
    ) -> Result<Self, ConfigError> {
        let signing_key = validate_secret(SIGNING_KEY_ENV, signing_key.into(), MIN_SIGNING_KEY_LEN)?;
        let membership_password = validate_secret(
            MEMBERSHIP_PASSWORD_ENV,
            membership_password.into(),
            MIN_MEMBERSHIP_PASSWORD_LEN,
        )?;

        Ok(Self {
            signing_key,
            membership_password,
            secure_cookies,
        })
    }

    /// Read `JWT_SECRET`, `MEMBERSHIP_PASSWORD` and `APP_ENV` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let signing_key = read_var(SIGNING_KEY_ENV)?;
        let membership_password = read_var(MEMBERSHIP_PASSWORD_ENV)?;
        let secure_cookies = is_production(env::var(APP_ENV_ENV).ok().as_deref());

        let config = Self::new(signing_key, membership_password, secure_cookies)?;
        tracing::info!(
            secure_cookies = config.secure_cookies,
            "Loaded membership authentication config from environment"
        );
        Ok(config)
    }

    pub fn signing_key(&self) -> &Secret {
        &self.signing_key
    }

    pub fn membership_password(&self) -> &Secret {
        &self.membership_password
    }

    /// Whether session cookies carry the `Secure` attribute
    pub fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }
}

fn read_var(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Err(ConfigError::Missing { var }),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

fn validate_secret(var: &'static str, value: String, min: usize) -> Result<Secret, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Missing { var });
    }
    let secret = Secret(value);
    if secret.char_len() < min {
        return Err(ConfigError::TooShort { var, min });
    }
    Ok(secret)
}

fn is_production(app_env: Option<&str>) -> bool {
    app_env.is_some_and(|v| v.trim().eq_ignore_ascii_case("production"))
}

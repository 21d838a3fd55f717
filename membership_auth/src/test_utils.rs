//! Shared configuration fixtures for unit tests

use crate::authenticator::SessionAuthenticator;
use crate::config::AuthConfig;

pub(crate) const TEST_SIGNING_KEY: &str = "test-signing-key-0123456789abcdef";
pub(crate) const TEST_PASSWORD: &str = "membership-2026-10";

pub(crate) fn test_config() -> AuthConfig {
    AuthConfig::new(TEST_SIGNING_KEY, TEST_PASSWORD, false)
        .expect("test secrets satisfy the length requirements")
}

pub(crate) fn test_authenticator() -> SessionAuthenticator {
    SessionAuthenticator::new(test_config())
}

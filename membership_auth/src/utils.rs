use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use ring::rand::SecureRandom;
use thiserror::Error;

use crate::config::MIN_SIGNING_KEY_LEN;

pub(crate) fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

pub fn gen_random_string(len: usize) -> Result<String, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random string".to_string()))?;
    Ok(base64url_encode(&bytes))
}

/// Generate a fresh signing key suitable for `JWT_SECRET`.
///
/// 32 random bytes, URL-safe base64 without padding (43 characters).
pub fn generate_signing_secret() -> Result<String, UtilError> {
    let secret = gen_random_string(32)?;
    debug_assert!(secret.len() >= MIN_SIGNING_KEY_LEN);
    Ok(secret)
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),
}

use thiserror::Error;

/// Fatal configuration problems detected while loading the secrets.
///
/// None of these can be handled per request: the operator has to fix the
/// environment before the service can authenticate anyone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "SECURITY ERROR: {var} environment variable is not set. Generate a strong secret with: openssl rand -base64 32"
    )]
    Missing { var: &'static str },

    #[error("SECURITY ERROR: {var} is too short. Must be at least {min} characters.")]
    TooShort { var: &'static str, min: usize },

    #[error("SECURITY ERROR: {var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

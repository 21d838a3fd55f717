use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Token could not be signed
    #[error("Token error: {0}")]
    Token(String),

    /// Cookie could not be read from or written to the transport
    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Header error: {0}")]
    HeaderError(String),
}

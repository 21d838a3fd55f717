/// Name of the cookie carrying the signed session token
pub const AUTH_COOKIE_NAME: &str = "auth-token";

/// Validity window of a session token
pub const SESSION_MAX_AGE_DAYS: i64 = 30;

/// `Max-Age` of the session cookie: 30 days in seconds
pub const SESSION_MAX_AGE_SECS: i64 = SESSION_MAX_AGE_DAYS * 24 * 60 * 60;

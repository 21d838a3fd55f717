//! Test utilities shared by the unit tests of this crate

use std::sync::Arc;

use http::{Method, Request, header::COOKIE, request::Parts};
use membership_auth::{AUTH_COOKIE_NAME, AuthConfig, SessionAuthenticator};

use crate::session::SharedAuthenticator;

pub(crate) const TEST_PASSWORD: &str = "membership-2026-10";

pub(crate) fn test_authenticator() -> SharedAuthenticator {
    let config = AuthConfig::new("axum-test-signing-key-0123456789", TEST_PASSWORD, false)
        .expect("test secrets satisfy the length requirements");
    Arc::new(SessionAuthenticator::new(config))
}

/// `auth-token=<fresh token>` as a browser would send it
pub(crate) fn session_cookie(auth: &SessionAuthenticator) -> String {
    format!("{}={}", AUTH_COOKIE_NAME, auth.create_token().unwrap())
}

pub(crate) fn request_parts(method: Method, uri: &str, cookie: Option<&str>) -> Parts {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(()).unwrap().into_parts().0
}

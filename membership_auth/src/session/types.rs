use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated record embedded in a session token.
///
/// Never stored server-side: it only exists inside the signed token the
/// browser holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    #[serde(rename = "loginDate")]
    pub login_date: DateTime<Utc>,
}

/// JWT claims: the session plus issued-at and expiry, in seconds since the epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SessionClaims {
    pub(crate) authenticated: bool,
    #[serde(rename = "loginDate")]
    pub(crate) login_date: DateTime<Utc>,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}

impl From<SessionClaims> for Session {
    fn from(claims: SessionClaims) -> Self {
        Self {
            authenticated: claims.authenticated,
            login_date: claims.login_date,
        }
    }
}

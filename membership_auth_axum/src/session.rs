use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts, OriginalUri},
    response::{IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};
use http::{Extensions, Method, StatusCode, Uri, request::Parts};

use membership_auth::{HeaderCookies, Session, SessionAuthenticator};

use crate::redirect::login_url_with_from;

/// The authenticator as it is shared through axum state
pub type SharedAuthenticator = Arc<SessionAuthenticator>;

/// Rejection for requests without a valid session
///
/// Anonymous `GET`/`HEAD` requests are sent to the login page with the
/// requested path kept in `from`; every other request gets `401`.
pub struct AuthRedirect {
    login_from: Option<String>,
}

impl AuthRedirect {
    pub(crate) fn new(method: &Method, from: String) -> Self {
        let login_from = matches!(*method, Method::GET | Method::HEAD).then_some(from);
        Self { login_from }
    }

    pub(crate) fn unauthorized() -> Self {
        Self { login_from: None }
    }

    fn into_response_with_method(self) -> Response {
        match self.login_from {
            Some(from) => {
                let location = login_url_with_from(&from);
                tracing::debug!("Redirecting anonymous visitor to {}", location);
                Redirect::temporary(&location).into_response()
            }
            None => {
                tracing::debug!("Unauthorized");
                (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.into_response_with_method()
    }
}

/// Authenticated member session, available as an Axum extractor
///
/// Anonymous `GET` requests are redirected to the login page with the
/// requested path preserved in `from`; other methods get `401 Unauthorized`.
/// Use `Option<AuthSession>` to serve anonymous visitors as well.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use axum::{routing::get, Router};
/// use membership_auth::{AuthConfig, SessionAuthenticator};
/// use membership_auth_axum::AuthSession;
///
/// async fn protected_handler(session: AuthSession) -> String {
///     format!("Logged in since {}", session.login_date)
/// }
///
/// let auth = Arc::new(SessionAuthenticator::new(AuthConfig::from_env().unwrap()));
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler))
///     .with_state(auth);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub authenticated: bool,
    /// When the member entered the password
    pub login_date: DateTime<Utc>,
}

impl From<Session> for AuthSession {
    fn from(session: Session) -> Self {
        Self {
            authenticated: session.authenticated,
            login_date: session.login_date,
        }
    }
}

impl From<&AuthSession> for Session {
    fn from(auth_session: &AuthSession) -> Self {
        Session {
            authenticated: auth_session.authenticated,
            login_date: auth_session.login_date,
        }
    }
}

/// Path and query the client asked for, before any router nesting
pub(crate) fn requested_path(extensions: &Extensions, uri: &Uri) -> String {
    extensions
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or(uri)
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string())
}

impl<S> FromRequestParts<S> for AuthSession
where
    SharedAuthenticator: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Already verified by the middleware for this request
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(AuthSession::from(session.clone()));
        }

        let auth = SharedAuthenticator::from_ref(state);
        let cookies = HeaderCookies::from_headers(&parts.headers);

        match auth.get_session(&cookies) {
            Some(session) => Ok(AuthSession::from(session)),
            None => Err(AuthRedirect::new(
                &parts.method,
                requested_path(&parts.extensions, &parts.uri),
            )),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthSession
where
    SharedAuthenticator: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthSession as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}

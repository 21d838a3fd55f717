use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use membership_auth::HeaderCookies;

use crate::session::{AuthRedirect, AuthSession, SharedAuthenticator, requested_path};

// Same rejection as the extractor, so both protection paths answer alike
fn handle_auth_error(req: &Request, redirect_on_error: bool) -> Response {
    if redirect_on_error {
        let from = requested_path(req.extensions(), req.uri());
        AuthRedirect::new(req.method(), from).into_response()
    } else {
        AuthRedirect::unauthorized().into_response()
    }
}

async fn check_session(
    auth: SharedAuthenticator,
    mut req: Request,
    next: Next,
    redirect_on_error: bool,
) -> Response {
    let session = auth.get_session(&HeaderCookies::from_headers(req.headers()));
    match session {
        Some(session) => {
            req.extensions_mut().insert(AuthSession::from(session.clone()));
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        None => handle_auth_error(&req, redirect_on_error),
    }
}

/// Authentication checker with 401 response
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn is_authenticated_401(
    State(auth): State<SharedAuthenticator>,
    req: Request,
    next: Next,
) -> Response {
    check_session(auth, req, next, false).await
}

/// Authentication checker with redirect to the login page for `GET` requests
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn is_authenticated_redirect(
    State(auth): State<SharedAuthenticator>,
    req: Request,
    next: Next,
) -> Response {
    check_session(auth, req, next, true).await
}

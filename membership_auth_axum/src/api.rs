//! JSON authentication endpoints mounted under [`AUTH_API_PREFIX`](crate::AUTH_API_PREFIX)

use axum::{
    Json, Router,
    extract::{FromRef, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use serde_json::json;

use membership_auth::HeaderCookies;

use crate::error::IntoResponseError;
use crate::redirect::is_local_path;
use crate::session::SharedAuthenticator;

/// Shown for a wrong password; never says more than that
pub(crate) const INVALID_PASSWORD_MESSAGE: &str = "パスワードが正しくありません";
pub(crate) const MISSING_PASSWORD_MESSAGE: &str = "パスワードを入力してください";

pub(crate) fn router<S>() -> Router<S>
where
    SharedAuthenticator: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(login))
        .route("/logout", get(logout).post(logout_post))
        .route("/session", get(session_status))
}

#[derive(Deserialize)]
pub(super) struct LoginRequest {
    password: Option<String>,
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub(super) async fn login(
    State(auth): State<SharedAuthenticator>,
    headers: HeaderMap,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let password = match body {
        Ok(Json(LoginRequest {
            password: Some(password),
        })) if !password.is_empty() => password,
        Ok(_) => return json_error(StatusCode::BAD_REQUEST, MISSING_PASSWORD_MESSAGE),
        Err(rejection) => {
            tracing::debug!("Rejected login body: {}", rejection);
            return json_error(StatusCode::BAD_REQUEST, MISSING_PASSWORD_MESSAGE);
        }
    };

    let mut cookies = HeaderCookies::from_headers(&headers);
    match auth.login(&mut cookies, &password).into_response_error() {
        Ok(true) => (
            cookies.into_header_map(),
            Json(json!({ "success": true })),
        )
            .into_response(),
        Ok(false) => json_error(StatusCode::UNAUTHORIZED, INVALID_PASSWORD_MESSAGE),
        Err((status, message)) => json_error(status, &message),
    }
}

#[derive(Deserialize)]
pub(super) struct RedirectQuery {
    redirect: Option<String>,
}

fn clear_cookie_headers(
    auth: &SharedAuthenticator,
    headers: &HeaderMap,
) -> Result<HeaderMap, (StatusCode, String)> {
    let mut cookies = HeaderCookies::from_headers(headers);
    auth.clear_session(&mut cookies).into_response_error()?;
    tracing::info!("Member logged out");
    Ok(cookies.into_header_map())
}

/// Handles logout requests with optional redirection
///
/// Without a `redirect` parameter only the cookie-clearing headers are
/// returned. A local `redirect` target is followed with `303 See Other`.
pub(super) async fn logout(
    State(auth): State<SharedAuthenticator>,
    headers: HeaderMap,
    Query(params): Query<RedirectQuery>,
) -> Response {
    let response_headers = match clear_cookie_headers(&auth, &headers) {
        Ok(h) => h,
        Err((status, message)) => return json_error(status, &message),
    };

    match params.redirect {
        Some(redirect_to) if is_local_path(&redirect_to) => {
            tracing::debug!("Redirecting to {}", redirect_to);
            (response_headers, Redirect::to(&redirect_to)).into_response()
        }
        Some(redirect_to) => {
            tracing::warn!("Ignoring non-local logout redirect {:?}", redirect_to);
            (response_headers, StatusCode::OK).into_response()
        }
        None => (response_headers, StatusCode::OK).into_response(),
    }
}

pub(super) async fn logout_post(
    State(auth): State<SharedAuthenticator>,
    headers: HeaderMap,
) -> Response {
    match clear_cookie_headers(&auth, &headers) {
        Ok(response_headers) => {
            (response_headers, Json(json!({ "success": true }))).into_response()
        }
        Err((status, message)) => json_error(status, &message),
    }
}

pub(super) async fn session_status(
    State(auth): State<SharedAuthenticator>,
    headers: HeaderMap,
) -> Response {
    match auth.get_session(&HeaderCookies::from_headers(&headers)) {
        Some(session) => Json(json!({
            "authenticated": true,
            "loginDate": session.login_date,
        }))
        .into_response(),
        None => Json(json!({ "authenticated": false })).into_response(),
    }
}

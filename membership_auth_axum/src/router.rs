//! Combined router for all authentication endpoints

use axum::{Router, extract::FromRef, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{AUTH_API_PREFIX, MEMBERSHIP_LOGIN_URL};
use crate::session::SharedAuthenticator;

/// Create a combined router for all authentication endpoints
///
/// The endpoints will be available at:
/// - {MEMBERSHIP_LOGIN_URL} (login page, default `/login`)
/// - /api/auth/login (POST, JSON `{"password": "..."}`)
/// - /api/auth/logout (GET with optional `redirect`, or POST)
/// - /api/auth/session (GET)
///
/// The state only needs to provide the shared authenticator through
/// [`FromRef`].
pub fn membership_auth_router<S>() -> Router<S>
where
    SharedAuthenticator: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    membership_auth_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create a combined router for all authentication endpoints without HTTP tracing
///
/// Request headers (including cookies) are never recorded by either variant.
pub fn membership_auth_router_no_trace<S>() -> Router<S>
where
    SharedAuthenticator: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(MEMBERSHIP_LOGIN_URL.as_str(), get(super::pages::login_page))
        .nest(AUTH_API_PREFIX, super::api::router())
}

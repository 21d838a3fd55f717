use askama::Template;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::config::AUTH_API_PREFIX;
use crate::redirect::post_login_target;
use crate::session::AuthSession;

#[derive(Template)]
#[template(path = "login.j2", escape = "html")]
struct LoginTemplate<'a> {
    login_api: &'a str,
    redirect_to: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct LoginQuery {
    from: Option<String>,
}

/// Login page; members who already hold a valid session go straight on.
pub(crate) async fn login_page(
    session: Option<AuthSession>,
    Query(query): Query<LoginQuery>,
) -> Result<Response, (StatusCode, String)> {
    let redirect_to = post_login_target(query.from.as_deref());

    if session.is_some() {
        tracing::debug!("Already authenticated, redirecting to {}", redirect_to);
        return Ok(Redirect::to(&redirect_to).into_response());
    }

    let login_api = format!("{AUTH_API_PREFIX}/login");
    let template = LoginTemplate {
        login_api: &login_api,
        redirect_to: &redirect_to,
    };
    let html = Html(
        template
            .render()
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
    );
    Ok(html.into_response())
}

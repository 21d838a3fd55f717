use askama::Template;
use axum::{
    Extension, Router,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use chrono_tz::Asia::Tokyo;

use membership_auth_axum::{
    AUTH_API_PREFIX, AuthSession, SharedAuthenticator,
    // Middleware, redirects to the login page with `from` set
    is_authenticated_redirect,
};

pub(super) fn router(auth: SharedAuthenticator) -> Router<SharedAuthenticator> {
    Router::new()
        .route(
            "/",
            get(index).route_layer(from_fn_with_state(auth, is_authenticated_redirect)),
        )
        .route("/article", get(article))
}

fn display_date(login_date: DateTime<Utc>) -> String {
    login_date
        .with_timezone(&Tokyo)
        .format("%Y年%m月%d日 %H:%M")
        .to_string()
}

fn render(template: impl Template) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

#[derive(Template)]
#[template(path = "index.j2", escape = "html")]
struct IndexTemplate<'a> {
    login_date: &'a str,
    logout_url: &'a str,
}

// The middleware has already verified the cookie and stored the session
pub(crate) async fn index(Extension(session): Extension<AuthSession>) -> Response {
    let login_date = display_date(session.login_date);
    let logout_url = format!("{AUTH_API_PREFIX}/logout?redirect=%2Flogin");
    render(IndexTemplate {
        login_date: &login_date,
        logout_url: &logout_url,
    })
}

#[derive(Template)]
#[template(path = "article.j2", escape = "html")]
struct ArticleTemplate<'a> {
    login_date: &'a str,
}

// Taking the session as an argument redirects anonymous visitors to the login page
pub(crate) async fn article(session: AuthSession) -> Response {
    let login_date = display_date(session.login_date);
    render(ArticleTemplate {
        login_date: &login_date,
    })
}

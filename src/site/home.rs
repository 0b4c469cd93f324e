use askama::Template;
use axum::{routing::get, Router};
use axum_extra::extract::SignedCookieJar;

use crate::app::{
    session::{self, SessionUser},
    AppState, APP_NAME,
};

/// The home page template.
#[derive(Template)]
#[template(path = "site/home.html")]
pub struct HomeTemplate {
    pub app_name: &'static str,
    pub user: Option<SessionUser>,
}

/// GET /
pub async fn index(jar: SignedCookieJar) -> HomeTemplate {
    HomeTemplate {
        app_name: APP_NAME,
        user: session::current_user(&jar),
    }
}

/// Routes for the home feature slice.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

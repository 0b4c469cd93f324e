use askama::Template;
use axum::{routing::get, Router};
use axum_extra::extract::SignedCookieJar;

use crate::app::{
    session::{self, SessionUser},
    AppState, APP_NAME,
};

/// Post-login confirmation page template.
#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub app_name: &'static str,
    pub user: Option<SessionUser>,
}

/// GET /success — Confirm the login.
/// Nothing is enforced here; without a session the page renders its
/// signed-out branch.
pub async fn show(jar: SignedCookieJar) -> SuccessTemplate {
    SuccessTemplate {
        app_name: APP_NAME,
        user: session::current_user(&jar),
    }
}

/// Success page routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/success", get(show))
}

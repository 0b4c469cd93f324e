use axum::{response::Redirect, routing::get, Router};
use axum_extra::extract::SignedCookieJar;

use crate::app::{session, AppState};

/// GET /logout — Drop the session and return to the landing page.
/// Always succeeds, with or without a session.
pub async fn submit(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    let jar = jar.remove(session::clear_session_cookie());

    (jar, Redirect::to("/"))
}

/// Logout routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/logout", get(submit))
}

use axum::{extract::State, response::Redirect, routing::get, Router};

use crate::app::{error::AppError, workos::PortalIntent, AppState};

/// GET /admin-portal — Redirect to a hosted admin-portal session for the
/// configured organization. No session check on this route: any caller gets
/// a portal link.
pub async fn show(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let portal_link = state
        .workos
        .generate_portal_link(&state.config.org_id, PortalIntent::Sso)
        .await?;

    Ok(Redirect::to(&portal_link.link))
}

/// Admin portal routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/admin-portal", get(show))
}

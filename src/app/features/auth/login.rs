use axum::{extract::State, response::Redirect, routing::get, Router};

use crate::app::{error::AppError, AppState};

/// GET /auth — Begin the SSO handshake.
///
/// Builds the hosted authorization URL for the configured organization and
/// the registered callback address, then sends the browser there.
pub async fn begin(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let authorization_url = state
        .workos
        .authorization_url(&state.config.org_id, &state.config.callback_url())?;

    Ok(Redirect::to(authorization_url.as_str()))
}

/// Login routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth", get(begin))
}

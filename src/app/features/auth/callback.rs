use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get, Router,
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use crate::app::{
    error::AppError,
    session::{self, SessionUser},
    AppState,
};

/// Query parameters the provider appends to the callback redirect.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// GET /callback — Finish the SSO handshake.
///
/// A provider `error` parameter is terminal and surfaced verbatim as a 400.
/// A missing `code` means there is nothing to do and goes back to the
/// landing page. An exchange failure is not handled here; it propagates as a
/// request-level error.
pub async fn finish(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
    jar: SignedCookieJar,
) -> Result<Response, AppError> {
    if query.error.is_some() {
        let description = query.error_description.unwrap_or_default();
        return Ok((StatusCode::BAD_REQUEST, format!("SSO Error: {description}")).into_response());
    }

    let Some(code) = query.code else {
        return Ok(Redirect::to("/").into_response());
    };

    let profile = state.workos.get_profile(&code).await?;

    let user = SessionUser {
        name: profile.display_name(),
        email: profile.email,
        org: profile.organization_id.unwrap_or_default(),
    };
    let jar = jar.add(session::session_cookie(&user));

    Ok((jar, Redirect::to("/success")).into_response())
}

/// Callback routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/callback", get(finish))
}

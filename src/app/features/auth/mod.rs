pub mod callback;
pub mod login;
pub mod logout;

use axum::Router;
use crate::app::AppState;

/// SSO routes: begin the handshake, finish it, end the session.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(login::routes())
        .merge(callback::routes())
        .merge(logout::routes())
}

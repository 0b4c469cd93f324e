use axum::extract::FromRef;
use axum::Router;
use axum_extra::extract::cookie::Key;

use crate::app::workos::WorkOs;

/// Human-readable application name, used in templates and UI.
/// Change this constant to rename the app across all pages.
pub const APP_NAME: &str = "Teamdir";

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub workos: WorkOs,
    pub config: config::Config,
    pub key: Key,
}

/// Lets the signed cookie jar extractor find the signing key in state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// App routes (auth, portal, directory pages). Merged with site routes in lib.rs.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(features::auth::routes())
        .merge(features::success::routes())
        .merge(features::admin_portal::routes())
        .merge(features::directory::routes())
        .merge(features::group_details::routes())
}

pub mod config;
pub mod error;
pub mod features;
pub mod session;
pub mod workos;

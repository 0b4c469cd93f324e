use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get, Router,
};
use axum_extra::extract::SignedCookieJar;

use crate::app::{
    error::AppError,
    session,
    workos::GroupWithMembers,
    AppState, APP_NAME,
};

/// Directory page template: every group in the directory with its members.
#[derive(Template)]
#[template(path = "directory.html")]
pub struct DirectoryTemplate {
    pub app_name: &'static str,
    pub group_list: Vec<GroupWithMembers>,
}

/// Error page template (access denied and friends).
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub app_name: &'static str,
    pub message: String,
}

/// GET /directory — Full directory listing, admins only.
///
/// Rebuilt from the provider on every request; nothing is cached.
pub async fn show(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, AppError> {
    let Some(user) = session::current_user(&jar) else {
        return Ok(Redirect::to("/").into_response());
    };
    let email = user.email.to_lowercase();

    let directory_id = &state.config.directory_id;
    let dir_users = state.workos.list_directory_users(directory_id, None).await?;

    // A session user missing from the directory is a request-level failure
    // on this page; /group_details is the forgiving path.
    let me = dir_users
        .iter()
        .find(|u| u.email_matches(&email))
        .ok_or(AppError::DirectoryLookup(email))?;

    if !me.role.as_ref().is_some_and(|role| role.slug == "admin") {
        let template = ErrorTemplate {
            app_name: APP_NAME,
            message: "Access denied: admins only".to_string(),
        };
        let html = template.render().map_err(AppError::Render)?;
        return Ok((StatusCode::FORBIDDEN, Html(html)).into_response());
    }

    let groups = state.workos.list_directory_groups(directory_id, None).await?;
    let mut group_list = Vec::new();
    for group in groups {
        let members = state
            .workos
            .list_directory_users(directory_id, Some(&group.id))
            .await?;
        group_list.push(GroupWithMembers { group, members });
    }

    let template = DirectoryTemplate {
        app_name: APP_NAME,
        group_list,
    };
    Ok(Html(template.render().map_err(AppError::Render)?).into_response())
}

/// Directory routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/directory", get(show))
}

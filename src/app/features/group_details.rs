use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get, Router,
};
use axum_extra::extract::SignedCookieJar;

use crate::app::{
    error::AppError,
    session,
    workos::GroupWithMembers,
    AppState, APP_NAME,
};

/// Group details page template: the groups the logged-in user belongs to.
#[derive(Template)]
#[template(path = "group_details.html")]
pub struct GroupDetailsTemplate {
    pub app_name: &'static str,
    pub group_list: Vec<GroupWithMembers>,
}

/// GET /group_details — The logged-in user's groups with their members.
///
/// Assumes a session; reaching this page without one is a request-level
/// error. An email with no directory record degrades to a plain 404.
pub async fn show(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, AppError> {
    let user = session::current_user(&jar).ok_or(AppError::SessionMissing)?;
    let email = user.email.to_lowercase();

    let directory_id = &state.config.directory_id;
    let all_users = state.workos.list_directory_users(directory_id, None).await?;

    let Some(directory_user) = all_users.iter().find(|u| u.email_matches(&email)) else {
        return Ok((StatusCode::NOT_FOUND, "User not found in directory").into_response());
    };

    let user_groups = state
        .workos
        .list_directory_groups(directory_id, Some(&directory_user.id))
        .await?;

    let mut group_list = Vec::new();
    for group in user_groups {
        let members = state
            .workos
            .list_directory_users(directory_id, Some(&group.id))
            .await?;
        group_list.push(GroupWithMembers { group, members });
    }

    let template = GroupDetailsTemplate {
        app_name: APP_NAME,
        group_list,
    };
    Ok(Html(template.render().map_err(AppError::Render)?).into_response())
}

/// Group details routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/group_details", get(show))
}

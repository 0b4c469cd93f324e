#![allow(dead_code)]

use axum::body::Body;
use serde_json::{json, Value};
use teamdir::app::{config::Config, session, workos::WorkOs, AppState};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Ids baked into `Config::for_tests`.
pub const TEST_ORG_ID: &str = "org_01TEST";
pub const TEST_DIRECTORY_ID: &str = "directory_01TEST";

/// A mock provider API plus a router wired against it.
pub struct TestApp {
    pub server: MockServer,
    pub router: axum::Router,
}

/// Start a mock provider server and build the app against it.
pub async fn test_app() -> TestApp {
    let server = MockServer::start().await;
    let config = Config::for_tests(&server.uri());
    let workos = WorkOs::new(&config).unwrap();
    let key = session::signing_key(&config).unwrap();
    let state = AppState {
        workos,
        config,
        key,
    };

    TestApp {
        server,
        router: teamdir::create_router(state),
    }
}

/// GET request with an optional Cookie header.
pub fn get_request(uri: &str, cookie: Option<&str>) -> http::Request<Body> {
    let mut builder = http::Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Mount the token-exchange mock returning a profile with the given email.
pub async fn mock_profile_exchange(server: &MockServer, email: &str) {
    Mock::given(method("POST"))
        .and(path("/sso/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token_01TEST",
            "profile": {
                "id": "prof_01TEST",
                "email": email,
                "first_name": "Test",
                "last_name": "User",
                "organization_id": TEST_ORG_ID,
            }
        })))
        .mount(server)
        .await;
}

/// Single-page list envelope the directory endpoints return.
pub fn list_page(data: Value) -> Value {
    json!({ "data": data, "list_metadata": { "before": null, "after": null } })
}

/// Directory user payload; role is the provider's `{ "slug": ... }` object.
pub fn directory_user(id: &str, email: &str, role: Option<&str>) -> Value {
    match role {
        Some(slug) => json!({ "id": id, "email": email, "role": { "slug": slug } }),
        None => json!({ "id": id, "email": email }),
    }
}

pub fn directory_group(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

/// Mount the directory-wide user listing (no group filter).
pub async fn mock_directory_users(server: &MockServer, users: Value) {
    Mock::given(method("GET"))
        .and(path("/directory_sync/users"))
        .and(query_param("directory", TEST_DIRECTORY_ID))
        .and(query_param_is_missing("group"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(users)))
        .mount(server)
        .await;
}

/// Mount the member listing for one group.
pub async fn mock_group_members(server: &MockServer, group_id: &str, users: Value) {
    Mock::given(method("GET"))
        .and(path("/directory_sync/users"))
        .and(query_param("directory", TEST_DIRECTORY_ID))
        .and(query_param("group", group_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(users)))
        .mount(server)
        .await;
}

/// Mount the directory-wide group listing (no user filter).
pub async fn mock_directory_groups(server: &MockServer, groups: Value) {
    Mock::given(method("GET"))
        .and(path("/directory_sync/groups"))
        .and(query_param("directory", TEST_DIRECTORY_ID))
        .and(query_param_is_missing("user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(groups)))
        .mount(server)
        .await;
}

/// Mount the group listing for one user's memberships.
pub async fn mock_user_groups(server: &MockServer, user_id: &str, groups: Value) {
    Mock::given(method("GET"))
        .and(path("/directory_sync/groups"))
        .and(query_param("directory", TEST_DIRECTORY_ID))
        .and(query_param("user", user_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(groups)))
        .mount(server)
        .await;
}

pub fn extract_session_from_cookie(set_cookie_header: &str) -> Option<&str> {
    set_cookie_header.split(';').next()?.strip_prefix("session=")
}

/// Drive the real callback flow against the mock provider and return the
/// Cookie header value for authenticated requests.
pub async fn authenticated_cookie(app: &TestApp, email: &str) -> String {
    mock_profile_exchange(&app.server, email).await;

    let response = app
        .router
        .clone()
        .oneshot(get_request("/callback?code=code_01TEST", None))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::SEE_OTHER);

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    let session_value =
        extract_session_from_cookie(set_cookie).expect("cookie must contain session");
    format!("session={}", session_value)
}

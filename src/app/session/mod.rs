use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

use crate::app::config::Config;

/// Name of the signed session cookie.
pub const SESSION_COOKIE: &str = "session";

/// The logged-in user, as stored in the signed session cookie.
///
/// `name` and `org` come straight from the provider profile; `email` is
/// non-empty whenever a session exists (trusted provider boundary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub org: String,
}

/// Read the current user from the signed jar, if logged in.
/// A cookie that fails signature verification or decoding counts as logged out.
pub fn current_user(jar: &SignedCookieJar) -> Option<SessionUser> {
    let cookie = jar.get(SESSION_COOKIE)?;
    serde_json::from_str(cookie.value()).ok()
}

/// Build the session cookie for a freshly logged-in user. The jar signs it on add.
pub fn session_cookie(user: &SessionUser) -> Cookie<'static> {
    let value = serde_json::to_string(user).unwrap_or_default();
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Cookie matching the session cookie's name and path, for removal.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .removal()
        .into()
}

/// Resolve the cookie-signing key from configuration.
///
/// Without `SESSION_SECRET` a random per-process key is used, so every
/// session is invalidated when the process restarts.
pub fn signing_key(config: &Config) -> Result<Key, String> {
    match &config.session_secret {
        Some(secret) => Key::try_from(secret.as_bytes())
            .map_err(|_| "SESSION_SECRET must be at least 64 bytes".to_string()),
        None => {
            tracing::warn!("SESSION_SECRET not set; sessions will not survive a restart");
            Ok(Key::generate())
        }
    }
}

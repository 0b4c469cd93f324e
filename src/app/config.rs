/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key, used as bearer auth on every provider call. Required.
    pub workos_api_key: String,

    /// Provider client id for the SSO token exchange. Required.
    pub workos_client_id: String,

    /// Organization whose SSO connection and admin portal this app uses. Required.
    pub org_id: String,

    /// Directory whose users and groups the pages list. Required.
    pub directory_id: String,

    /// Cookie-signing secret, at least 64 bytes. Optional; when unset a random
    /// per-process key is generated and every session dies on restart.
    pub session_secret: Option<String>,

    /// Base URL for building the SSO callback address. Must match the redirect
    /// URI registered with the provider.
    /// Default: http://127.0.0.1:5000
    pub app_url: String,

    /// Provider API base URL. Overridable so tests can point the client at a
    /// local mock server.
    /// Default: https://api.workos.com
    pub workos_base_url: String,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if required vars are missing.
    pub fn from_env() -> Result<Self, String> {
        let workos_api_key = std::env::var("WORKOS_API_KEY")
            .map_err(|_| "WORKOS_API_KEY must be set in .env")?;

        let workos_client_id = std::env::var("WORKOS_CLIENT_ID")
            .map_err(|_| "WORKOS_CLIENT_ID must be set in .env")?;

        let org_id = std::env::var("TEST_ORG_ID")
            .map_err(|_| "TEST_ORG_ID must be set in .env")?;

        let directory_id = std::env::var("TEST_DIRECTORY_ID")
            .map_err(|_| "TEST_DIRECTORY_ID must be set in .env")?;

        let session_secret = std::env::var("SESSION_SECRET").ok();

        let app_url = std::env::var("APP_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

        let workos_base_url = std::env::var("WORKOS_BASE_URL")
            .unwrap_or_else(|_| "https://api.workos.com".to_string());

        Ok(Self {
            workos_api_key,
            workos_client_id,
            org_id,
            directory_id,
            session_secret,
            app_url,
            workos_base_url,
        })
    }

    /// Returns the base URL without trailing slash, for building links.
    pub fn app_url_base(&self) -> &str {
        self.app_url.trim_end_matches('/')
    }

    /// The SSO callback address handed to the provider.
    pub fn callback_url(&self) -> String {
        format!("{}/callback", self.app_url_base())
    }

    /// Config for tests. Points the provider client at a mock server and uses
    /// a fixed signing secret so session cookies stay valid across requests.
    pub fn for_tests(workos_base_url: &str) -> Self {
        Self {
            workos_api_key: "sk_test_01TEST".to_string(),
            workos_client_id: "client_01TEST".to_string(),
            org_id: "org_01TEST".to_string(),
            directory_id: "directory_01TEST".to_string(),
            session_secret: Some(
                "an-integration-test-only-signing-secret-that-is-at-least-sixty-four-bytes-long"
                    .to_string(),
            ),
            app_url: "http://127.0.0.1:5000".to_string(),
            workos_base_url: workos_base_url.to_string(),
        }
    }
}

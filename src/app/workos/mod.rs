//! Typed client for the hosted identity platform's HTTP API.
//!
//! Covers the three product surfaces the app touches: SSO, Directory Sync and
//! the hosted admin portal. Every call is bearer-authenticated with the API
//! key and decoded into explicit value records rather than loose JSON.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::app::config::Config;

pub use directory_sync::{DirectoryGroup, DirectoryUser, GroupWithMembers, Role};
pub use portal::{PortalIntent, PortalLink};
pub use sso::Profile;

pub mod directory_sync;
pub mod portal;
pub mod sso;

/// Errors from provider calls.
#[derive(Debug, thiserror::Error)]
pub enum WorkOsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

/// Handle to the provider API. Cheap to clone; constructed once at startup
/// and shared read-only through the application state.
#[derive(Debug, Clone)]
pub struct WorkOs {
    http: Client,
    base_url: String,
    api_key: String,
    client_id: String,
}

impl WorkOs {
    /// Build the client from configuration.
    pub fn new(config: &Config) -> Result<Self, WorkOsError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("teamdir/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WorkOsError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.workos_base_url.trim_end_matches('/').to_string(),
            api_key: config.workos_api_key.clone(),
            client_id: config.workos_client_id.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.endpoint(path)).bearer_auth(&self.api_key)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.endpoint(path)).bearer_auth(&self.api_key)
    }

    /// Decode a response body, mapping non-2xx statuses to [`WorkOsError::Api`].
    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, WorkOsError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(WorkOsError::Api { status, message })
        }
    }
}

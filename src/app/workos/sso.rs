use serde::Deserialize;
use url::Url;

use super::{WorkOs, WorkOsError};

/// Identity attributes returned by the provider after a successful SSO exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization_id: Option<String>,
}

impl Profile {
    /// First and last name joined for display; empty when the provider sent neither.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Token-exchange response envelope; only the profile is kept.
#[derive(Debug, Deserialize)]
struct ProfileAndToken {
    profile: Profile,
}

impl WorkOs {
    /// Hosted authorization URL that starts the SSO handshake for an organization.
    pub fn authorization_url(
        &self,
        organization_id: &str,
        redirect_uri: &str,
    ) -> Result<Url, WorkOsError> {
        let mut url = Url::parse(&self.endpoint("/sso/authorize"))
            .map_err(|e| WorkOsError::Config(format!("invalid provider base URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("organization", organization_id);
        Ok(url)
    }

    /// Exchange a callback authorization code for the user's profile.
    pub async fn get_profile(&self, code: &str) -> Result<Profile, WorkOsError> {
        let response = self
            .post("/sso/token")
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.api_key.as_str()),
                ("grant_type", "authorization_code"),
                ("code", code),
            ])
            .send()
            .await?;

        let exchanged: ProfileAndToken = self.decode(response).await?;
        Ok(exchanged.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn profile(first: Option<&str>, last: Option<&str>) -> Profile {
        Profile {
            id: "prof_01TEST".to_string(),
            email: "test@example.com".to_string(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            organization_id: None,
        }
    }

    #[test]
    fn display_name_joins_first_and_last() {
        assert_eq!(profile(Some("Ada"), Some("Lovelace")).display_name(), "Ada Lovelace");
    }

    #[test]
    fn display_name_handles_missing_parts() {
        assert_eq!(profile(Some("Ada"), None).display_name(), "Ada");
        assert_eq!(profile(None, Some("Lovelace")).display_name(), "Lovelace");
        assert_eq!(profile(None, None).display_name(), "");
    }

    #[test]
    fn authorization_url_carries_the_handshake_parameters() {
        let client = WorkOs::new(&Config::for_tests("https://api.example.test")).unwrap();
        let url = client
            .authorization_url("org_01TEST", "http://127.0.0.1:5000/callback")
            .unwrap();

        assert_eq!(url.path(), "/sso/authorize");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&("client_id".to_string(), "client_01TEST".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "http://127.0.0.1:5000/callback".to_string()
        )));
        assert!(pairs.contains(&("organization".to_string(), "org_01TEST".to_string())));
    }
}

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{WorkOs, WorkOsError};

/// Largest page size the provider accepts; fewer round trips per listing.
const PAGE_LIMIT: u32 = 100;

/// A user record synced from the organization's directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    /// Primary email; directory records are not guaranteed to carry one.
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl DirectoryUser {
    /// Case-insensitive email comparison against an already-lowercased needle.
    pub fn email_matches(&self, lowercased: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|email| email.to_lowercase() == lowercased)
    }

    /// Email for display, with a placeholder for records without one.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("(no email)")
    }
}

/// Role attached to a directory user.
#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub slug: String,
}

/// A group synced from the organization's directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryGroup {
    pub id: String,
    pub name: String,
}

/// A group paired with its fetched member list. Assembled per request by the
/// listing pages; the provider API never returns this shape directly.
#[derive(Debug, Clone)]
pub struct GroupWithMembers {
    pub group: DirectoryGroup,
    pub members: Vec<DirectoryUser>,
}

/// Cursor-paginated list envelope shared by every listing endpoint.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
    list_metadata: ListMetadata,
}

#[derive(Debug, Deserialize)]
struct ListMetadata {
    after: Option<String>,
}

impl WorkOs {
    /// All users in a directory, optionally restricted to one group's members.
    pub async fn list_directory_users(
        &self,
        directory_id: &str,
        group_id: Option<&str>,
    ) -> Result<Vec<DirectoryUser>, WorkOsError> {
        let mut params = vec![("directory", directory_id)];
        if let Some(group_id) = group_id {
            params.push(("group", group_id));
        }
        self.list_all("/directory_sync/users", &params).await
    }

    /// Groups in a directory, optionally only those a given user belongs to.
    pub async fn list_directory_groups(
        &self,
        directory_id: &str,
        user_id: Option<&str>,
    ) -> Result<Vec<DirectoryGroup>, WorkOsError> {
        let mut params = vec![("directory", directory_id)];
        if let Some(user_id) = user_id {
            params.push(("user", user_id));
        }
        self.list_all("/directory_sync/groups", &params).await
    }

    /// Follow the `after` cursor until the listing is exhausted and return
    /// the concatenated pages.
    async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, WorkOsError> {
        let mut items = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let mut request = self.get(path).query(params).query(&[("limit", PAGE_LIMIT)]);
            if let Some(cursor) = &after {
                request = request.query(&[("after", cursor.as_str())]);
            }

            let response = request.send().await?;
            let page: ListResponse<T> = self.decode(response).await?;

            items.extend(page.data);
            after = page.list_metadata.after;
            if after.is_none() {
                break;
            }
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: Option<&str>) -> DirectoryUser {
        DirectoryUser {
            id: "directory_user_01TEST".to_string(),
            email: email.map(String::from),
            role: None,
        }
    }

    #[test]
    fn email_match_is_case_insensitive() {
        assert!(user(Some("Admin@Example.COM")).email_matches("admin@example.com"));
    }

    #[test]
    fn missing_email_never_matches() {
        assert!(!user(None).email_matches("admin@example.com"));
    }

    #[test]
    fn display_email_placeholder_for_missing_email() {
        assert_eq!(user(None).display_email(), "(no email)");
        assert_eq!(user(Some("a@b.io")).display_email(), "a@b.io");
    }
}

use serde::{Deserialize, Serialize};

use super::{WorkOs, WorkOsError};

/// What the generated admin-portal session is scoped to.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalIntent {
    Sso,
}

#[derive(Debug, Serialize)]
struct GenerateLinkRequest<'a> {
    organization: &'a str,
    intent: PortalIntent,
}

/// Single-use link into the provider's hosted admin portal.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalLink {
    pub link: String,
}

impl WorkOs {
    /// Generate a hosted admin-portal link for an organization.
    pub async fn generate_portal_link(
        &self,
        organization_id: &str,
        intent: PortalIntent,
    ) -> Result<PortalLink, WorkOsError> {
        let response = self
            .post("/portal/generate_link")
            .json(&GenerateLinkRequest {
                organization: organization_id,
                intent,
            })
            .send()
            .await?;

        self.decode(response).await
    }
}

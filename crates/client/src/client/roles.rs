//! Security role API methods.
//!
//! # What this module handles:
//! - Creating, replacing, reading, deleting and listing roles
//!
//! # What this module does NOT handle:
//! - Version checks (done when the client is requested)
//! - Low-level role endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::KibanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Role;

#[derive(Debug)]
pub struct RoleClient<'a> {
    client: &'a KibanaClient,
}

impl<'a> RoleClient<'a> {
    pub(crate) fn new(client: &'a KibanaClient) -> Self {
        Self { client }
    }

    /// Create a role. Kibana treats this as create-or-replace.
    pub async fn create(&self, role: &Role) -> Result<()> {
        endpoints::put_role(&self.client.agent, &self.client.config.base_uri, role).await
    }

    pub async fn update(&self, role: &Role) -> Result<()> {
        endpoints::put_role(&self.client.agent, &self.client.config.base_uri, role).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Role> {
        endpoints::get_role(&self.client.agent, &self.client.config.base_uri, name).await
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        endpoints::delete_role(&self.client.agent, &self.client.config.base_uri, name).await
    }

    pub async fn list(&self) -> Result<Vec<Role>> {
        endpoints::list_roles(&self.client.agent, &self.client.config.base_uri).await
    }
}

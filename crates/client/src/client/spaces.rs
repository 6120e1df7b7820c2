//! Space API methods for [`KibanaClient`].

use crate::client::KibanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Space;

#[derive(Debug)]
pub struct SpaceClient<'a> {
    client: &'a KibanaClient,
}

impl<'a> SpaceClient<'a> {
    pub(crate) fn new(client: &'a KibanaClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, space: &Space) -> Result<Space> {
        endpoints::create_space(&self.client.agent, &self.client.config.base_uri, space).await
    }

    pub async fn update(&self, space: &Space) -> Result<Space> {
        endpoints::update_space(&self.client.agent, &self.client.config.base_uri, space).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Space> {
        endpoints::get_space(&self.client.agent, &self.client.config.base_uri, id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        endpoints::delete_space(&self.client.agent, &self.client.config.base_uri, id).await
    }

    pub async fn list(&self) -> Result<Vec<Space>> {
        endpoints::list_spaces(&self.client.agent, &self.client.config.base_uri).await
    }
}

//! Untyped saved object listing across all types.

use crate::client::KibanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{SavedObjectRequest, SavedObjectResponse};

/// Where the listing of a server version is answered.
#[derive(Debug)]
pub(crate) enum ListingTarget {
    /// Kibana 5.x: `_search` below the document prefix.
    Documents(String),
    /// Kibana 6.x and 7.x: the saved objects listing path.
    SavedObjects(&'static str),
}

#[derive(Debug)]
pub struct SavedObjectsClient<'a> {
    client: &'a KibanaClient,
    target: ListingTarget,
}

impl<'a> SavedObjectsClient<'a> {
    pub(crate) fn new(client: &'a KibanaClient, target: ListingTarget) -> Self {
        Self { client, target }
    }

    /// List saved objects matching `request`. `None` applies no filter.
    pub async fn get_by_type(
        &self,
        request: Option<&SavedObjectRequest>,
    ) -> Result<SavedObjectResponse> {
        let config = &self.client.config;
        match &self.target {
            ListingTarget::Documents(prefix) => {
                endpoints::search_documents(
                    &self.client.agent,
                    prefix,
                    &config.server_version,
                    request,
                )
                .await
            }
            ListingTarget::SavedObjects(find_path) => {
                endpoints::find_objects(&self.client.agent, &config.base_uri, find_path, request)
                    .await
            }
        }
    }
}

//! Typed saved object clients.
//!
//! Each saved object type is served by one of two implementations:
//! [`EsProxyApi`] for Kibana 5.x documents and [`SavedObjectsApi`] for the
//! 6.x/7.x saved objects API. Only [`SavedObjectsApi`] has `list`; callers
//! holding a [`DomainClient`] reach it through [`DomainClient::listing`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::client::KibanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{
    CreateRequest, DASHBOARD_TYPE, DashboardAttributes, FindResponse, INDEX_PATTERN_TYPE,
    IndexPatternAttributes, ObjectResponse, SEARCH_TYPE, SavedObjectRequest, SearchAttributes,
    SearchSourceBuilder, VISUALIZATION_TYPE, VisualizationAttributes,
};
use crate::registry::{ApiVariant, Domain};
use crate::version::ServerVersion;

/// Page size used by typed listings.
const LIST_PER_PAGE: u32 = 1000;

/// A saved object type: its wire name, registry domain and attributes.
pub trait SavedObjectKind {
    const TYPE: &'static str;
    const DOMAIN: Domain;
    type Attributes: Serialize + DeserializeOwned + Clone + Send + Sync;
}

#[derive(Debug, Clone, Copy)]
pub struct SearchKind;

impl SavedObjectKind for SearchKind {
    const TYPE: &'static str = SEARCH_TYPE;
    const DOMAIN: Domain = Domain::Search;
    type Attributes = SearchAttributes;
}

#[derive(Debug, Clone, Copy)]
pub struct VisualizationKind;

impl SavedObjectKind for VisualizationKind {
    const TYPE: &'static str = VISUALIZATION_TYPE;
    const DOMAIN: Domain = Domain::Visualization;
    type Attributes = VisualizationAttributes;
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardKind;

impl SavedObjectKind for DashboardKind {
    const TYPE: &'static str = DASHBOARD_TYPE;
    const DOMAIN: Domain = Domain::Dashboard;
    type Attributes = DashboardAttributes;
}

#[derive(Debug, Clone, Copy)]
pub struct IndexPatternKind;

impl SavedObjectKind for IndexPatternKind {
    const TYPE: &'static str = INDEX_PATTERN_TYPE;
    const DOMAIN: Domain = Domain::IndexPattern;
    type Attributes = IndexPatternAttributes;
}

type Response<K> = ObjectResponse<<K as SavedObjectKind>::Attributes>;
type Request<K> = CreateRequest<<K as SavedObjectKind>::Attributes>;

/// Kibana 5.x: saved objects stored as `.kibana` documents.
#[derive(Debug)]
pub struct EsProxyApi<'a, K> {
    client: &'a KibanaClient,
    prefix: String,
    version: ServerVersion,
    kind: PhantomData<K>,
}

impl<'a, K: SavedObjectKind> EsProxyApi<'a, K> {
    pub(crate) fn new(client: &'a KibanaClient, prefix: String, version: ServerVersion) -> Self {
        Self {
            client,
            prefix,
            version,
            kind: PhantomData,
        }
    }

    fn server_version_str(&self) -> &str {
        &self.client.config.server_version
    }

    pub fn server_version(&self) -> ServerVersion {
        self.version
    }

    pub async fn create(&self, request: &Request<K>) -> Result<Response<K>> {
        endpoints::create_document(
            &self.client.agent,
            &self.prefix,
            self.server_version_str(),
            K::TYPE,
            request,
        )
        .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<K>> {
        endpoints::get_document(
            &self.client.agent,
            &self.prefix,
            self.server_version_str(),
            K::TYPE,
            id,
        )
        .await
    }

    pub async fn update(&self, id: &str, request: &Request<K>) -> Result<Response<K>> {
        endpoints::update_document(
            &self.client.agent,
            &self.prefix,
            self.server_version_str(),
            K::TYPE,
            id,
            request,
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        endpoints::delete_document(
            &self.client.agent,
            &self.prefix,
            self.server_version_str(),
            K::TYPE,
            id,
        )
        .await
    }
}

/// Kibana 6.x and 7.x: the saved objects API.
#[derive(Debug)]
pub struct SavedObjectsApi<'a, K> {
    client: &'a KibanaClient,
    variant: ApiVariant,
    find_path: &'static str,
    version: ServerVersion,
    kind: PhantomData<K>,
}

impl<'a, K: SavedObjectKind> SavedObjectsApi<'a, K> {
    pub(crate) fn new(
        client: &'a KibanaClient,
        variant: ApiVariant,
        find_path: &'static str,
        version: ServerVersion,
    ) -> Self {
        Self {
            client,
            variant,
            find_path,
            version,
            kind: PhantomData,
        }
    }

    pub fn server_version(&self) -> ServerVersion {
        self.version
    }

    pub fn variant(&self) -> ApiVariant {
        self.variant
    }

    pub async fn create(&self, request: &Request<K>) -> Result<Response<K>> {
        endpoints::create_object(
            &self.client.agent,
            &self.client.config.base_uri,
            K::TYPE,
            request,
            self.variant.sends_references(),
        )
        .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Response<K>> {
        endpoints::get_object(&self.client.agent, &self.client.config.base_uri, K::TYPE, id)
            .await
    }

    pub async fn update(&self, id: &str, request: &Request<K>) -> Result<Response<K>> {
        endpoints::update_object(
            &self.client.agent,
            &self.client.config.base_uri,
            K::TYPE,
            id,
            request,
            self.variant.sends_references(),
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        endpoints::delete_object(&self.client.agent, &self.client.config.base_uri, K::TYPE, id)
            .await
    }

    /// All objects of this type, fetched page by page until `total` is reached.
    pub async fn list(&self) -> Result<Vec<Response<K>>> {
        let mut objects = Vec::new();
        let mut request = SavedObjectRequest {
            object_type: Some(K::TYPE.to_string()),
            fields: Vec::new(),
            per_page: LIST_PER_PAGE,
            page: Some(1),
        };
        loop {
            let found: FindResponse<K::Attributes> = endpoints::find_objects(
                &self.client.agent,
                &self.client.config.base_uri,
                self.find_path,
                Some(&request),
            )
            .await?;
            let received = found.saved_objects.len();
            objects.extend(found.saved_objects);
            // An empty page ends the listing even if `total` moved underneath.
            if received == 0 || objects.len() as u64 >= found.total {
                break;
            }
            request.page = request.page.map(|page| page + 1);
        }
        Ok(objects)
    }
}

/// The implementation resolved for the configured server version.
#[derive(Debug)]
pub enum DomainClient<'a, K> {
    EsProxy(EsProxyApi<'a, K>),
    SavedObjects(SavedObjectsApi<'a, K>),
}

pub type SearchClient<'a> = DomainClient<'a, SearchKind>;
pub type VisualizationClient<'a> = DomainClient<'a, VisualizationKind>;
pub type DashboardClient<'a> = DomainClient<'a, DashboardKind>;
pub type IndexPatternClient<'a> = DomainClient<'a, IndexPatternKind>;

impl<'a, K: SavedObjectKind> DomainClient<'a, K> {
    pub fn server_version(&self) -> ServerVersion {
        match self {
            Self::EsProxy(api) => api.server_version(),
            Self::SavedObjects(api) => api.server_version(),
        }
    }

    pub async fn create(&self, request: &Request<K>) -> Result<Response<K>> {
        match self {
            Self::EsProxy(api) => api.create(request).await,
            Self::SavedObjects(api) => api.create(request).await,
        }
    }

    /// Fetch by id. A missing object is an HTTP 404 error.
    pub async fn get_by_id(&self, id: &str) -> Result<Response<K>> {
        match self {
            Self::EsProxy(api) => api.get_by_id(id).await,
            Self::SavedObjects(api) => api.get_by_id(id).await,
        }
    }

    pub async fn update(&self, id: &str, request: &Request<K>) -> Result<Response<K>> {
        match self {
            Self::EsProxy(api) => api.update(id, request).await,
            Self::SavedObjects(api) => api.update(id, request).await,
        }
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        match self {
            Self::EsProxy(api) => api.delete(id).await,
            Self::SavedObjects(api) => api.delete(id).await,
        }
    }

    /// The implementation that has a listing endpoint.
    pub fn listing(&self) -> Result<&SavedObjectsApi<'a, K>> {
        match self {
            Self::SavedObjects(api) => Ok(api),
            Self::EsProxy(api) => Err(ClientError::Unsupported {
                operation: "list",
                version: api.server_version().to_string(),
            }),
        }
    }
}

impl DomainClient<'_, SearchKind> {
    /// A search source builder shaped for this server version.
    pub fn new_search_source(&self) -> SearchSourceBuilder {
        SearchSourceBuilder::for_version(self.server_version())
    }
}

impl DomainClient<'_, VisualizationKind> {
    /// A search source builder shaped for this server version.
    pub fn new_search_source(&self) -> SearchSourceBuilder {
        SearchSourceBuilder::for_version(self.server_version())
    }
}

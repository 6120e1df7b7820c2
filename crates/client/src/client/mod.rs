//! Main Kibana client and version dispatch.
//!
//! [`KibanaClient`] owns the resolved [`Config`], the HTTP agent and the
//! version registry. Domain clients are cheap facades borrowed from it and
//! resolved per call.
//!
//! # Submodules
//! - [`builder`]: client construction
//! - `domain`: typed saved object clients (search, visualization, dashboard, index pattern)
//! - `saved_objects`: untyped listing across types
//! - `roles`, `spaces`: security roles and spaces (7.x)
//! - `account`: Logz.io account switching
//!
//! # What this module does NOT handle:
//! - HTTP calls (delegated to [`crate::endpoints`])
//! - Credential handling (delegated to [`crate::auth`])
//!
//! # Invariants
//! - An unregistered version or an unusable deployment type fails when a
//!   domain client is requested, never when the client is built.

pub mod builder;
mod account;
mod domain;
mod roles;
mod saved_objects;
mod spaces;

use kibana_config::Config;
use std::sync::Arc;

use crate::agent::HttpAgent;
use crate::auth::AuthenticationHandler;
use crate::endpoints;
use crate::error::Result;
use crate::registry::{ApiVariant, Domain, VersionRegistry};
use crate::version::ServerVersion;

pub use domain::{
    DashboardClient, DashboardKind, DomainClient, EsProxyApi, IndexPatternClient,
    IndexPatternKind, SavedObjectKind, SavedObjectsApi, SearchClient, SearchKind,
    VisualizationClient, VisualizationKind,
};
pub use roles::RoleClient;
pub use saved_objects::SavedObjectsClient;
use saved_objects::ListingTarget;
pub use spaces::SpaceClient;

/// Kibana REST API client.
///
/// ```rust,ignore
/// use kibana_client::KibanaClient;
/// use kibana_config::Config;
///
/// let client = KibanaClient::new(Config::new("http://localhost:5601", "6.0.0"))?;
/// let search = client.search()?;
/// let found = search.get_by_id("aca8b340-175b-11e8-accb-65182aaf9591").await?;
/// ```
#[derive(Debug, Clone)]
pub struct KibanaClient {
    pub(crate) config: Arc<Config>,
    pub(crate) agent: HttpAgent,
    pub(crate) registry: Arc<VersionRegistry>,
}

impl KibanaClient {
    /// Client for `config` with the default registry and auth from the config.
    pub fn new(config: Config) -> Result<Self> {
        Self::builder().from_config(config).build()
    }

    pub fn builder() -> builder::KibanaClientBuilder {
        builder::KibanaClientBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_uri(&self) -> &str {
        &self.config.base_uri
    }

    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    pub fn auth(&self) -> &AuthenticationHandler {
        self.agent.auth()
    }

    /// Replace the authentication handler for subsequent requests.
    pub fn set_auth(&mut self, auth: AuthenticationHandler) -> &mut Self {
        self.agent.set_auth(auth);
        self
    }

    /// The configured server version, parsed.
    pub fn server_version(&self) -> Result<ServerVersion> {
        self.config.server_version.parse()
    }

    fn resolve(&self, domain: Domain) -> Result<(ApiVariant, ServerVersion)> {
        let variant = self.registry.resolve(domain, &self.config.server_version)?;
        Ok((variant, self.server_version()?))
    }

    fn domain_client<K: SavedObjectKind>(&self) -> Result<DomainClient<'_, K>> {
        let (variant, version) = self.resolve(K::DOMAIN)?;
        Ok(match variant.find_path() {
            Some(find_path) => DomainClient::SavedObjects(SavedObjectsApi::new(
                self, variant, find_path, version,
            )),
            None => DomainClient::EsProxy(EsProxyApi::new(
                self,
                endpoints::document_prefix(&self.config)?,
                version,
            )),
        })
    }

    pub fn search(&self) -> Result<SearchClient<'_>> {
        self.domain_client()
    }

    pub fn visualization(&self) -> Result<VisualizationClient<'_>> {
        self.domain_client()
    }

    pub fn dashboard(&self) -> Result<DashboardClient<'_>> {
        self.domain_client()
    }

    pub fn index_pattern(&self) -> Result<IndexPatternClient<'_>> {
        self.domain_client()
    }

    pub fn saved_objects(&self) -> Result<SavedObjectsClient<'_>> {
        let (variant, _) = self.resolve(Domain::SavedObjects)?;
        let target = match variant.find_path() {
            Some(find_path) => ListingTarget::SavedObjects(find_path),
            None => ListingTarget::Documents(endpoints::document_prefix(&self.config)?),
        };
        Ok(SavedObjectsClient::new(self, target))
    }

    pub fn role(&self) -> Result<RoleClient<'_>> {
        self.require_v7(Domain::Role)?;
        Ok(RoleClient::new(self))
    }

    pub fn space(&self) -> Result<SpaceClient<'_>> {
        self.require_v7(Domain::Space)?;
        Ok(SpaceClient::new(self))
    }

    fn require_v7(&self, domain: Domain) -> Result<()> {
        match self.resolve(domain)? {
            (ApiVariant::SavedObjectsV7, _) => Ok(()),
            _ => Err(crate::error::ClientError::UnsupportedVersion {
                domain,
                version: self.config.server_version.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibana_config::DeploymentType;

    fn client(version: &str) -> KibanaClient {
        KibanaClient::new(Config::new("http://localhost:5601", version)).unwrap()
    }

    #[test]
    fn test_registered_versions_resolve() {
        for version in ["5.5.3", "6.0.0", "7.2.0"] {
            let client = client(version);
            assert!(client.search().is_ok(), "{version}");
            assert!(client.visualization().is_ok(), "{version}");
            assert!(client.dashboard().is_ok(), "{version}");
            assert!(client.index_pattern().is_ok(), "{version}");
            assert!(client.saved_objects().is_ok(), "{version}");
        }
    }

    #[test]
    fn test_unregistered_version_is_configuration_error() {
        let client = client("6.1.0");
        let err = client.search().unwrap_err();
        assert!(err.is_configuration_error());
        assert!(client.saved_objects().unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_legacy_variant_for_five() {
        let client = client("5.5.3");
        let search = client.search().unwrap();
        assert!(matches!(search, DomainClient::EsProxy(_)));
        assert!(search.listing().unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_roles_and_spaces_require_seven() {
        assert!(client("6.0.0").role().unwrap_err().is_configuration_error());
        assert!(client("6.0.0").space().unwrap_err().is_configuration_error());
        assert!(client("7.2.0").role().is_ok());
        assert!(client("7.2.0").space().is_ok());
    }

    #[test]
    fn test_registered_but_unparsable_version_is_validation_error() {
        let mut registry = VersionRegistry::default();
        registry.register(Domain::Search, "latest", ApiVariant::SavedObjectsV7);
        let client = KibanaClient::builder()
            .from_config(Config::new("http://localhost:5601", "latest"))
            .registry(registry)
            .build()
            .unwrap();
        assert!(client.search().unwrap_err().is_validation_error());
    }

    #[test]
    fn test_unknown_deployment_cannot_use_legacy_proxy() {
        let config = Config::new("http://localhost:5601", "5.5.3")
            .with_deployment_type(DeploymentType::Unknown);
        let client = KibanaClient::new(config).unwrap();
        let err = client.search().unwrap_err();
        assert!(matches!(
            err,
            crate::error::ClientError::UnsupportedDeployment { .. }
        ));
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KibanaClient>();
    }
}

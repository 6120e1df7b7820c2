//! Kibana saved objects client.
//!
//! This crate provides a type-safe client for the Kibana REST API across
//! server generations: the `.kibana` document proxy of Kibana 5.x, the
//! saved objects API of 6.x, and the reference-aware saved objects API of
//! 7.x together with security roles and spaces. The implementation used
//! for each call is resolved from the configured server version.
//!
//! Authentication is either none, HTTP basic, or the Logz.io token exchange
//! with account switching.

mod agent;
mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
mod serde_helpers;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use agent::{HttpAgent, XSRF_HEADER};
pub use auth::{AUTH_TOKEN_HEADER, AuthenticationHandler, LogzioAuthentication};
pub use client::KibanaClient;
pub use client::builder::KibanaClientBuilder;
pub use client::{
    DashboardClient, DomainClient, EsProxyApi, IndexPatternClient, RoleClient, SavedObjectKind,
    SavedObjectsApi, SavedObjectsClient, SearchClient, SpaceClient, VisualizationClient,
};
pub use error::{ClientError, HttpError, Result};
pub use kibana_config::{Config, Credentials, DeploymentType, LogzioConfig};
pub use logging::init_logging;
pub use models::{
    CreateDashboardRequest, CreateIndexPatternRequest, CreateRequest, CreateSearchRequest,
    CreateVisualizationRequest, DashboardAttributes, DashboardRequestBuilder, DashboardResponse,
    FindResponse, IndexPatternAttributes, IndexPatternRequestBuilder, IndexPatternResponse,
    ObjectResponse, Reference, Role, SavedObject, SavedObjectRequest, SavedObjectRequestBuilder,
    SavedObjectResponse, SearchAttributes, SearchFilter, SearchRequestBuilder, SearchResponse,
    SearchSource, SearchSourceBuilder, Sort, SortOrder, Space, UpdateDashboardRequest,
    UpdateIndexPatternRequest, UpdateRequest, UpdateSearchRequest, UpdateVisualizationRequest,
    VisualizationAttributes, VisualizationRequestBuilder, VisualizationResponse,
};
pub use registry::{ApiVariant, Domain, VersionRegistry};
pub use version::ServerVersion;

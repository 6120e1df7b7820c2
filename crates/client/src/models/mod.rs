//! Data models for Kibana saved objects, roles and spaces.
//!
//! Types are organized by saved object type in submodules and re-exported
//! here for convenient access.

pub mod common;
pub mod dashboard;
pub mod es_proxy;
pub mod index_pattern;
pub mod roles;
pub mod saved_objects;
pub mod search;
pub mod search_source;
pub mod sort;
pub mod spaces;
pub mod visualization;

pub use common::{
    DASHBOARD_TYPE, INDEX_PATTERN_TYPE, Reference, SEARCH_TYPE, SavedObjectMeta,
    VISUALIZATION_TYPE,
};
pub use dashboard::{
    CreateDashboardRequest, DashboardAttributes, DashboardRequestBuilder, DashboardResponse,
    UpdateDashboardRequest,
};
pub use index_pattern::{
    CreateIndexPatternRequest, IndexPatternAttributes, IndexPatternRequestBuilder,
    IndexPatternResponse, UpdateIndexPatternRequest,
};
pub use roles::{
    ElasticsearchPrivileges, FieldSecurity, IndexPrivilege, KibanaPrivilege, Role,
    TransientMetadata,
};
pub use saved_objects::{
    CreateRequest, FindResponse, ObjectResponse, QueryParams, SavedObject, SavedObjectRequest,
    SavedObjectRequestBuilder, SavedObjectResponse, UpdateRequest,
};
pub use search::{
    CreateSearchRequest, SearchAttributes, SearchRequestBuilder, SearchResponse,
    UpdateSearchRequest,
};
pub use search_source::{
    FilterBody, FilterExists, FilterMeta, FilterParams, FilterQuery, FilterState, MatchQuery,
    SearchFilter, SearchSource, SearchSourceBuilder,
};
pub use sort::{Sort, SortEncoding, SortOrder};
pub use spaces::Space;
pub use visualization::{
    CreateVisualizationRequest, UpdateVisualizationRequest, VisualizationAttributes,
    VisualizationRequestBuilder, VisualizationResponse,
};

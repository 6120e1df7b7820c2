//! Saved search models and request builder.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::common::{ATTRIBUTES_VERSION, Reference, SavedObjectMeta};
use crate::models::saved_objects::{CreateRequest, ObjectResponse, UpdateRequest};
use crate::models::search_source::SearchSource;
use crate::models::sort::{Sort, SortOrder};
use crate::version::ServerVersion;

/// Attributes of a saved search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchAttributes {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub sort: Sort,
    #[serde(default)]
    pub version: u32,
    #[serde(rename = "kibanaSavedObjectMeta", default)]
    pub kibana_saved_object_meta: SavedObjectMeta,
}

impl SearchAttributes {
    /// Decode the embedded search source, resolving references from `references`.
    pub fn search_source(&self, references: &[Reference]) -> Result<SearchSource> {
        SearchSource::decode(&self.kibana_saved_object_meta.search_source_json)
            .map(|source| source.with_references(references.to_vec()))
    }
}

pub type CreateSearchRequest = CreateRequest<SearchAttributes>;
pub type UpdateSearchRequest = UpdateRequest<SearchAttributes>;
pub type SearchResponse = ObjectResponse<SearchAttributes>;

impl SearchResponse {
    /// The embedded search source with this object's references attached.
    pub fn decoded_search_source(&self) -> Result<SearchSource> {
        self.attributes.search_source(&self.references)
    }
}

/// Builder for saved search create and update requests.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    id: Option<String>,
    title: String,
    description: String,
    display_columns: Vec<String>,
    sort_columns: Vec<String>,
    sort_order: SortOrder,
    search_source: Option<SearchSource>,
}

impl SearchRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_display_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.display_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort_columns<I, S>(mut self, columns: I, order: SortOrder) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_columns = columns.into_iter().map(Into::into).collect();
        self.sort_order = order;
        self
    }

    pub fn with_search_source(mut self, search_source: SearchSource) -> Self {
        self.search_source = Some(search_source);
        self
    }

    /// Build the request for a server at `version`.
    ///
    /// Below 7.0 the index id stays inline and no references are sent.
    pub fn build(&self, version: &ServerVersion) -> Result<CreateSearchRequest> {
        let search_source = self
            .search_source
            .as_ref()
            .ok_or_else(|| ClientError::Validation("search requires a search source".to_string()))?
            .retarget(version)?;

        let attributes = SearchAttributes {
            title: self.title.clone(),
            description: self.description.clone(),
            hits: 0,
            columns: self.display_columns.clone(),
            sort: Sort::new(self.sort_columns.iter().cloned(), self.sort_order)
                .encoded_for(version),
            version: ATTRIBUTES_VERSION,
            kibana_saved_object_meta: SavedObjectMeta::new(search_source.encode()?),
        };

        Ok(CreateRequest {
            id: self.id.clone(),
            attributes,
            references: version
                .supports_references()
                .then(|| search_source.references.clone()),
        })
    }
}

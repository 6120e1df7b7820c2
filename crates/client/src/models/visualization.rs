//! Visualization models and request builder.
//!
//! A visualization may be backed by a saved search. Below 7.0 the link is the
//! inline `savedSearchId`; from 7.0 it is `savedSearchRefName` plus a
//! `search` reference.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::common::{
    ATTRIBUTES_VERSION, Reference, SEARCH_TYPE, SavedObjectMeta, find_reference,
};
use crate::models::saved_objects::{CreateRequest, ObjectResponse, UpdateRequest};
use crate::models::search_source::SearchSource;
use crate::version::ServerVersion;

/// Reference name of the backing saved search.
pub const SAVED_SEARCH_REF_NAME: &str = "search_0";

const EMPTY_SEARCH_SOURCE: &str = "{}";
const EMPTY_UI_STATE: &str = "{}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationAttributes {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// JSON document describing the chart, kept as a string.
    #[serde(rename = "visState", default)]
    pub visualization_state: String,
    #[serde(rename = "uiStateJSON", default)]
    pub ui_state_json: String,
    #[serde(default)]
    pub version: u32,
    #[serde(rename = "savedSearchId", default, skip_serializing_if = "Option::is_none")]
    pub saved_search_id: Option<String>,
    #[serde(
        rename = "savedSearchRefName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub saved_search_ref_name: Option<String>,
    #[serde(rename = "kibanaSavedObjectMeta", default)]
    pub kibana_saved_object_meta: SavedObjectMeta,
}

pub type CreateVisualizationRequest = CreateRequest<VisualizationAttributes>;
pub type UpdateVisualizationRequest = UpdateRequest<VisualizationAttributes>;
pub type VisualizationResponse = ObjectResponse<VisualizationAttributes>;

impl VisualizationResponse {
    /// Id of the backing saved search, whichever way it is linked.
    pub fn saved_search_id(&self) -> Option<&str> {
        if let Some(id) = self.attributes.saved_search_id.as_deref() {
            return Some(id);
        }
        let name = self.attributes.saved_search_ref_name.as_deref()?;
        find_reference(&self.references, name)
            .ok()
            .map(|r| r.id.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VisualizationRequestBuilder {
    id: Option<String>,
    title: String,
    description: String,
    visualization_state: String,
    ui_state_json: Option<String>,
    saved_search_id: Option<String>,
    saved_search_ref_name: Option<String>,
    references: Vec<Reference>,
    search_source: Option<SearchSource>,
}

impl VisualizationRequestBuilder {
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

    pub fn with_visualization_state(mut self, state: impl Into<String>) -> Self {
        self.visualization_state = state.into();
        self
    }

    pub fn with_ui_state_json(mut self, ui_state: impl Into<String>) -> Self {
        self.ui_state_json = Some(ui_state.into());
        self
    }

    pub fn with_saved_search_id(mut self, id: impl Into<String>) -> Self {
        self.saved_search_id = Some(id.into());
        self
    }

    /// Link the saved search through a reference name resolved against
    /// [`with_reference`](Self::with_reference).
    pub fn with_saved_search_ref_name(mut self, name: impl Into<String>) -> Self {
        self.saved_search_ref_name = Some(name.into());
        self
    }

    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn with_search_source(mut self, search_source: SearchSource) -> Self {
        self.search_source = Some(search_source);
        self
    }

    fn resolved_saved_search_id(&self) -> Result<Option<String>> {
        if let Some(id) = &self.saved_search_id {
            return Ok(Some(id.clone()));
        }
        match &self.saved_search_ref_name {
            Some(name) => Ok(Some(find_reference(&self.references, name)?.id.clone())),
            None => Ok(None),
        }
    }

    pub fn build(&self, version: &ServerVersion) -> Result<CreateVisualizationRequest> {
        let saved_search_id = self.resolved_saved_search_id()?;
        let search_source = self
            .search_source
            .as_ref()
            .map(|source| source.retarget(version))
            .transpose()?;
        let search_source_json = match &search_source {
            Some(source) => source.encode()?,
            None => EMPTY_SEARCH_SOURCE.to_string(),
        };

        let mut attributes = VisualizationAttributes {
            title: self.title.clone(),
            description: self.description.clone(),
            visualization_state: self.visualization_state.clone(),
            ui_state_json: self
                .ui_state_json
                .clone()
                .unwrap_or_else(|| EMPTY_UI_STATE.to_string()),
            version: ATTRIBUTES_VERSION,
            saved_search_id: None,
            saved_search_ref_name: None,
            kibana_saved_object_meta: SavedObjectMeta::new(search_source_json),
        };

        if !version.supports_references() {
            attributes.saved_search_id = saved_search_id;
            return Ok(CreateRequest {
                id: self.id.clone(),
                attributes,
                references: None,
            });
        }

        let mut references = search_source
            .map(|source| source.references)
            .unwrap_or_default();
        if let Some(id) = saved_search_id {
            attributes.saved_search_ref_name = Some(SAVED_SEARCH_REF_NAME.to_string());
            references.push(Reference::new(SAVED_SEARCH_REF_NAME, SEARCH_TYPE, id));
        }
        Ok(CreateRequest {
            id: self.id.clone(),
            attributes,
            references: Some(references),
        })
    }
}

//! Dashboard models and request builder.
//!
//! Panels stay a JSON string on the wire. From 7.0 each panel's `id` and
//! `type` move into a `panel_{i}` reference; below 7.0 they stay inline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::models::common::{ATTRIBUTES_VERSION, Reference, SavedObjectMeta, find_reference};
use crate::models::saved_objects::{CreateRequest, ObjectResponse, UpdateRequest};
use crate::models::search_source::SearchSource;
use crate::version::ServerVersion;

const DEFAULT_PANELS: &str = "[]";
const DEFAULT_OPTIONS: &str = r#"{"darkTheme":false}"#;
const DEFAULT_UI_STATE: &str = "{}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAttributes {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "panelsJSON", default)]
    pub panels_json: String,
    #[serde(rename = "optionsJSON", default)]
    pub options_json: String,
    #[serde(rename = "uiStateJSON", default)]
    pub ui_state_json: String,
    #[serde(default)]
    pub version: u32,
    #[serde(rename = "timeRestore", default)]
    pub time_restore: bool,
    #[serde(rename = "kibanaSavedObjectMeta", default)]
    pub kibana_saved_object_meta: SavedObjectMeta,
}

pub type CreateDashboardRequest = CreateRequest<DashboardAttributes>;
pub type UpdateDashboardRequest = UpdateRequest<DashboardAttributes>;
pub type DashboardResponse = ObjectResponse<DashboardAttributes>;

impl DashboardResponse {
    /// Panels with `id` and `type` restored from references.
    pub fn panels(&self) -> Result<Vec<Value>> {
        parse_panels(&inline_panels(
            &self.attributes.panels_json,
            &self.references,
        )?)
    }
}

fn default_search_source(version: &ServerVersion) -> String {
    if version.supports_query_language() {
        r#"{"query":{"query":"","language":"lucene"},"filter":[]}"#.to_string()
    } else {
        r#"{"query":{"query_string":{"query":"*","analyze_wildcard":true}},"filter":[]}"#
            .to_string()
    }
}

fn parse_panels(panels_json: &str) -> Result<Vec<Value>> {
    serde_json::from_str(panels_json)
        .map_err(|e| ClientError::Validation(format!("panelsJSON must be a JSON array: {e}")))
}

fn encode_panels(panels: &[Value]) -> Result<String> {
    serde_json::to_string(panels)
        .map_err(|e| ClientError::Validation(format!("Failed to encode panels: {e}")))
}

/// Move panel ids into references. Untouched input is returned verbatim.
fn externalize_panels(panels_json: &str) -> Result<(String, Vec<Reference>)> {
    let mut panels = parse_panels(panels_json)?;
    let mut references = Vec::new();

    for (position, panel) in panels.iter_mut().enumerate() {
        let Some(object) = panel.as_object_mut() else {
            continue;
        };
        let (Some(id), Some(kind)) = (
            object.get("id").and_then(Value::as_str),
            object.get("type").and_then(Value::as_str),
        ) else {
            continue;
        };
        let name = format!("panel_{position}");
        references.push(Reference::new(&name, kind, id));
        object.remove("id");
        object.remove("type");
        object.insert("panelRefName".to_string(), Value::String(name));
    }

    if references.is_empty() {
        return Ok((panels_json.to_string(), references));
    }
    Ok((encode_panels(&panels)?, references))
}

/// Resolve `panelRefName` entries back to inline `id` and `type`.
fn inline_panels(panels_json: &str, references: &[Reference]) -> Result<String> {
    let mut panels = parse_panels(panels_json)?;
    let mut changed = false;

    for panel in panels.iter_mut() {
        let Some(object) = panel.as_object_mut() else {
            continue;
        };
        let Some(name) = object.get("panelRefName").and_then(Value::as_str) else {
            continue;
        };
        let reference = find_reference(references, name)?;
        object.insert("id".to_string(), Value::String(reference.id.clone()));
        object.insert(
            "type".to_string(),
            Value::String(reference.object_type.clone()),
        );
        object.remove("panelRefName");
        changed = true;
    }

    if !changed {
        return Ok(panels_json.to_string());
    }
    encode_panels(&panels)
}

#[derive(Debug, Clone, Default)]
pub struct DashboardRequestBuilder {
    id: Option<String>,
    title: String,
    description: String,
    panels_json: Option<String>,
    options_json: Option<String>,
    ui_state_json: Option<String>,
    time_restore: bool,
    references: Vec<Reference>,
    search_source: Option<SearchSource>,
}

impl DashboardRequestBuilder {
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

    pub fn with_panels_json(mut self, panels_json: impl Into<String>) -> Self {
        self.panels_json = Some(panels_json.into());
        self
    }

    pub fn with_options_json(mut self, options_json: impl Into<String>) -> Self {
        self.options_json = Some(options_json.into());
        self
    }

    pub fn with_ui_state_json(mut self, ui_state_json: impl Into<String>) -> Self {
        self.ui_state_json = Some(ui_state_json.into());
        self
    }

    pub fn with_time_restore(mut self, time_restore: bool) -> Self {
        self.time_restore = time_restore;
        self
    }

    /// Reference used to resolve a `panelRefName` for older servers.
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn with_search_source(mut self, search_source: SearchSource) -> Self {
        self.search_source = Some(search_source);
        self
    }

    pub fn build(&self, version: &ServerVersion) -> Result<CreateDashboardRequest> {
        let panels_json = self.panels_json.as_deref().unwrap_or(DEFAULT_PANELS);
        let (search_source_json, source_references) = match &self.search_source {
            Some(source) => {
                let source = source.retarget(version)?;
                (source.encode()?, source.references)
            }
            None => (default_search_source(version), Vec::new()),
        };

        let (panels_json, references) = if version.supports_references() {
            let inline = inline_panels(panels_json, &self.references)?;
            let (panels_json, mut references) = externalize_panels(&inline)?;
            references.extend(source_references);
            (panels_json, Some(references))
        } else {
            (inline_panels(panels_json, &self.references)?, None)
        };

        Ok(CreateRequest {
            id: self.id.clone(),
            attributes: DashboardAttributes {
                title: self.title.clone(),
                description: self.description.clone(),
                panels_json,
                options_json: self
                    .options_json
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OPTIONS.to_string()),
                ui_state_json: self
                    .ui_state_json
                    .clone()
                    .unwrap_or_else(|| DEFAULT_UI_STATE.to_string()),
                version: ATTRIBUTES_VERSION,
                time_restore: self.time_restore,
                kibana_saved_object_meta: SavedObjectMeta::new(search_source_json),
            },
            references,
        })
    }
}

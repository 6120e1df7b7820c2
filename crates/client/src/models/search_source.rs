//! Search source model and builder.
//!
//! Responsibilities:
//! - Model the `searchSourceJSON` document embedded in searches and visualizations.
//! - Build a search source from an index, a free text query and filters.
//! - Move index links between inline ids and references for a target version.
//!
//! Invariants:
//! - Exactly one of `index` and `indexRefName` is set on a built source.
//! - A filter meta carries `index` or `indexRefName`, never both.
//! - `references` is never serialized; it travels in the enclosing saved object.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

use crate::error::{ClientError, Result};
use crate::models::common::{INDEX_PATTERN_TYPE, Reference, find_reference};
use crate::version::ServerVersion;

/// Reference name used for the source index once externalized.
pub const INDEX_REF_NAME: &str = "kibanaSavedObjectMeta.searchSourceJSON.index";

fn filter_index_ref_name(position: usize) -> String {
    format!("kibanaSavedObjectMeta.searchSourceJSON.filter[{position}].meta.index")
}

/// The embedded search source document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchSource {
    /// Inline index pattern id (below 7.0).
    #[serde(rename = "index", default, skip_serializing_if = "Option::is_none")]
    pub index_id: Option<String>,
    /// Name of the reference holding the index pattern id (7.0 and later).
    #[serde(rename = "indexRefName", default, skip_serializing_if = "Option::is_none")]
    pub index_ref_name: Option<String>,
    #[serde(rename = "highlightAll", default)]
    pub highlight_all: bool,
    #[serde(default)]
    pub version: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    #[serde(default)]
    pub filter: Vec<SearchFilter>,
    #[serde(skip)]
    pub references: Vec<Reference>,
}

impl SearchSource {
    /// Decode an embedded `searchSourceJSON` string.
    pub fn decode(search_source_json: &str) -> Result<Self> {
        serde_json::from_str(search_source_json)
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse search source: {e}")))
    }

    /// Encode into the string stored in `searchSourceJSON`.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ClientError::Validation(format!("Failed to encode search source: {e}")))
    }

    /// Attach the references of the saved object this source was read from.
    pub fn with_references(mut self, references: Vec<Reference>) -> Self {
        self.references = references;
        self
    }

    /// The free text of the query, in either query shape.
    pub fn query_text(&self) -> Option<&str> {
        let query = self.query.as_ref()?;
        query
            .get("query")
            .and_then(|q| q.as_str().or_else(|| q.get("query").and_then(Value::as_str)))
            .or_else(|| query.pointer("/query_string/query").and_then(Value::as_str))
    }

    /// Rewrite index links and the query shape for `version`.
    ///
    /// At 7.0 and later inline ids become references. Below 7.0 reference
    /// names are resolved back to inline ids, which fails when a name has no
    /// matching entry in `references`. Below 6.0 a query carrying a
    /// `language` becomes a `query_string` query, and the reverse from 6.0 on.
    pub fn retarget(&self, version: &ServerVersion) -> Result<Self> {
        let mut source = self.clone();
        if let Some(query) = self.query.as_ref() {
            let legacy_shape = query.get("query_string").is_some();
            if legacy_shape == version.supports_query_language()
                && let Some(text) = self.query_text()
            {
                source.query = Some(query_value(version, text));
            }
        }
        if version.supports_references() {
            let mut references = self.references.clone();
            if let Some(id) = source.index_id.take() {
                upsert(&mut references, Reference::new(INDEX_REF_NAME, INDEX_PATTERN_TYPE, id));
                source.index_ref_name = Some(INDEX_REF_NAME.to_string());
            }
            for (position, filter) in source.filter.iter_mut().enumerate() {
                if let Some(meta) = filter.meta.as_mut()
                    && let Some(id) = meta.index.take()
                {
                    let name = filter_index_ref_name(position);
                    upsert(&mut references, Reference::new(&name, INDEX_PATTERN_TYPE, id));
                    meta.index_ref_name = Some(name);
                }
            }
            source.references = references;
        } else {
            if let Some(name) = source.index_ref_name.take() {
                source.index_id = Some(find_reference(&self.references, &name)?.id.clone());
            }
            for filter in source.filter.iter_mut() {
                if let Some(meta) = filter.meta.as_mut()
                    && let Some(name) = meta.index_ref_name.take()
                {
                    meta.index = Some(find_reference(&self.references, &name)?.id.clone());
                }
            }
            source.references.clear();
        }
        Ok(source)
    }
}

fn upsert(references: &mut Vec<Reference>, reference: Reference) {
    match references.iter_mut().find(|r| r.name == reference.name) {
        Some(existing) => *existing = reference,
        None => references.push(reference),
    }
}

/// One filter of a search source: a body plus optional display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(flatten)]
    pub body: FilterBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FilterMeta>,
    #[serde(rename = "$state", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<FilterState>,
}

impl SearchFilter {
    /// A phrase match filter on `field`.
    pub fn phrase(field: impl Into<String>, value: impl Into<String>) -> Self {
        let field = field.into();
        let value = value.into();
        let meta = FilterMeta {
            key: Some(field.clone()),
            value: Some(value.clone()),
            filter_type: Some("phrase".to_string()),
            params: Some(FilterParams {
                query: value.clone(),
                param_type: "phrase".to_string(),
            }),
            ..FilterMeta::default()
        };
        let mut matches = BTreeMap::new();
        matches.insert(field, MatchQuery::phrase(value));
        Self {
            body: FilterBody::Query(FilterQuery { matches }),
            meta: Some(meta),
            state: Some(FilterState::default()),
        }
    }

    /// A filter on documents where `field` exists.
    pub fn exists(field: impl Into<String>) -> Self {
        let field = field.into();
        let meta = FilterMeta {
            key: Some(field.clone()),
            value: Some("exists".to_string()),
            filter_type: Some("exists".to_string()),
            ..FilterMeta::default()
        };
        Self {
            body: FilterBody::Exists(FilterExists { field }),
            meta: Some(meta),
            state: Some(FilterState::default()),
        }
    }

    pub fn with_meta(mut self, meta: FilterMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Exclude matching documents instead of keeping them.
    pub fn negated(mut self) -> Self {
        self.meta.get_or_insert_with(FilterMeta::default).negate = true;
        self
    }

    pub fn query(&self) -> Option<&FilterQuery> {
        match &self.body {
            FilterBody::Query(query) => Some(query),
            FilterBody::Exists(_) => None,
        }
    }

    pub fn exists_clause(&self) -> Option<&FilterExists> {
        match &self.body {
            FilterBody::Exists(exists) => Some(exists),
            FilterBody::Query(_) => None,
        }
    }
}

/// Filter body: a match query or an exists clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterBody {
    Query(FilterQuery),
    Exists(FilterExists),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(rename = "match")]
    pub matches: BTreeMap<String, MatchQuery>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchQuery {
    pub query: String,
    #[serde(rename = "type")]
    pub match_type: String,
}

impl MatchQuery {
    pub fn phrase(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            match_type: "phrase".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExists {
    pub field: String,
}

/// Display metadata Kibana keeps next to a filter body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub negate: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(rename = "indexRefName", default, skip_serializing_if = "Option::is_none")]
    pub index_ref_name: Option<String>,
    /// Field the filter applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<FilterParams>,
}

/// Mirror of the match body, kept in the meta for the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub query: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub store: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            store: "appState".to_string(),
        }
    }
}

/// Builder for [`SearchSource`].
///
/// Exactly one of [`with_index_id`](Self::with_index_id) and
/// [`with_index_ref_name`](Self::with_index_ref_name) must be called.
#[derive(Debug, Clone, Default)]
pub struct SearchSourceBuilder {
    index_id: Option<String>,
    index_ref_name: Option<String>,
    references: Vec<Reference>,
    query: Option<String>,
    filters: Vec<SearchFilter>,
    highlight_all: Option<bool>,
    version: Option<ServerVersion>,
}

impl SearchSourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder whose output is shaped for `version`.
    pub fn for_version(version: ServerVersion) -> Self {
        Self {
            version: Some(version),
            ..Self::default()
        }
    }

    pub fn with_index_id(mut self, index_id: impl Into<String>) -> Self {
        self.index_id = Some(index_id.into());
        self
    }

    pub fn with_index_ref_name(mut self, ref_name: impl Into<String>) -> Self {
        self.index_ref_name = Some(ref_name.into());
        self
    }

    /// Reference that a reference name given to this builder resolves to.
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_filter(mut self, filter: SearchFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_highlight_all(mut self, highlight_all: bool) -> Self {
        self.highlight_all = Some(highlight_all);
        self
    }

    pub fn build(&self) -> Result<SearchSource> {
        let index_id = match (&self.index_id, &self.index_ref_name) {
            (Some(_), Some(_)) => {
                return Err(ClientError::Validation(
                    "search source takes an index id or an index reference name, not both"
                        .to_string(),
                ));
            }
            (None, None) => {
                return Err(ClientError::Validation(
                    "search source requires an index id or an index reference name".to_string(),
                ));
            }
            (Some(id), None) => Some(id.clone()),
            (None, Some(name)) => find_reference(&self.references, name)
                .ok()
                .map(|r| r.id.clone()),
        };

        let filter = self
            .filters
            .iter()
            .cloned()
            .map(|mut filter| {
                if let Some(meta) = filter.meta.as_mut()
                    && meta.index.is_none()
                    && meta.index_ref_name.is_none()
                {
                    meta.index = index_id.clone();
                }
                filter
            })
            .collect();

        let source = SearchSource {
            index_id: self.index_id.clone(),
            index_ref_name: self.index_ref_name.clone(),
            highlight_all: self.highlight_all.unwrap_or(true),
            version: true,
            query: self.query.as_deref().map(|text| match &self.version {
                Some(version) => query_value(version, text),
                None => query_value(&ServerVersion::QUERY_LANGUAGE, text),
            }),
            filter,
            references: self.references.clone(),
        };

        match &self.version {
            Some(version) => source.retarget(version),
            None => Ok(source),
        }
    }
}

/// Query object understood by `version`.
fn query_value(version: &ServerVersion, text: &str) -> Value {
    if version.supports_query_language() {
        json!({"query": text, "language": "lucene"})
    } else {
        json!({"query_string": {"query": text, "analyze_wildcard": true}})
    }
}

//! Elasticsearch document envelopes seen through Kibana 5.x's proxy.

use serde::Deserialize;

/// Response of `_create`, `_update` and `DELETE` on a document.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentWriteResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default)]
    pub doc_type: String,
    #[serde(rename = "_version", default)]
    pub version: Option<u64>,
}

/// A stored document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<A> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default)]
    pub doc_type: String,
    #[serde(rename = "_version", default)]
    pub version: Option<u64>,
    /// Absent on search hits, which are always found.
    #[serde(default = "found_by_default")]
    pub found: bool,
    #[serde(rename = "_source", default = "Option::default")]
    pub source: Option<A>,
}

fn found_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHits<A> {
    pub hits: HitsEnvelope<A>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HitsEnvelope<A> {
    #[serde(deserialize_with = "crate::serde_helpers::hit_total")]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub hits: Vec<Document<A>>,
}

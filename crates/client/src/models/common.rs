//! Common types shared across saved-object models.
//!
//! This module contains the reference triple and the embedded
//! `kibanaSavedObjectMeta` wrapper. It does NOT contain type-specific models.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Saved object type names as they appear on the wire.
pub const SEARCH_TYPE: &str = "search";
pub const VISUALIZATION_TYPE: &str = "visualization";
pub const DASHBOARD_TYPE: &str = "dashboard";
pub const INDEX_PATTERN_TYPE: &str = "index-pattern";

/// Schema version written into the `version` attribute of new objects.
pub const ATTRIBUTES_VERSION: u32 = 1;

/// A named link from one saved object to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

impl Reference {
    pub fn new(
        name: impl Into<String>,
        object_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            object_type: object_type.into(),
        }
    }
}

/// Find the reference called `name`.
pub(crate) fn find_reference<'a>(references: &'a [Reference], name: &str) -> Result<&'a Reference> {
    references
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| ClientError::Validation(format!("no reference named '{name}'")))
}

/// Wrapper for the double-encoded search source.
///
/// `search_source_json` is a JSON document serialized into a string. The
/// server expects the string form; keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedObjectMeta {
    #[serde(rename = "searchSourceJSON", default)]
    pub search_source_json: String,
}

impl SavedObjectMeta {
    pub fn new(search_source_json: impl Into<String>) -> Self {
        Self {
            search_source_json: search_source_json.into(),
        }
    }
}

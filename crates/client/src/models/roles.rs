//! Kibana security role models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A role, shared by create, update and read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Role {
    /// Role name. Travels in the URL path, never in the request body.
    #[serde(default, skip_serializing)]
    pub name: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub elasticsearch: ElasticsearchPrivileges,
    #[serde(default)]
    pub kibana: Vec<KibanaPrivilege>,
    /// Set by the server only.
    #[serde(default, skip_serializing)]
    pub transient_metadata: Option<TransientMetadata>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElasticsearchPrivileges {
    #[serde(default)]
    pub cluster: Vec<String>,
    #[serde(default)]
    pub indices: Vec<IndexPrivilege>,
    #[serde(default)]
    pub run_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexPrivilege {
    pub names: Vec<String>,
    pub privileges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_security: Option<FieldSecurity>,
    /// Document level security query, as a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSecurity {
    #[serde(default)]
    pub grant: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<String>,
}

/// Kibana application privileges for a set of spaces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KibanaPrivilege {
    #[serde(default)]
    pub base: Vec<String>,
    /// Feature id to granted privileges.
    #[serde(default)]
    pub feature: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub spaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransientMetadata {
    #[serde(default)]
    pub enabled: bool,
}

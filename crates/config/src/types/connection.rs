//! Resolved connection configuration for the Kibana client.
//!
//! Responsibilities:
//! - Define the main `Config` structure shared read-only by all domain clients.
//! - Provide per-deployment default constructors.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env or `.env` files (see `loader` module).
//! - Version dispatch (see the client crate's registry).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `base_uri` never ends with `/`.
//! - `Config::default()` targets a local vanilla Kibana 6.0.0 on port 5601.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_INDEX_ID, DEFAULT_KIBANA_URI, DEFAULT_KIBANA_VERSION, DEFAULT_LOGZIO_INDEX_ID,
    DEFAULT_LOGZIO_KIBANA_URI, DEFAULT_LOGZIO_KIBANA_VERSION, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::{Credentials, LogzioConfig};
use crate::types::deployment::DeploymentType;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection target of a Kibana client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URI of the Kibana server, without a trailing slash.
    pub base_uri: String,
    /// Server version string, e.g. `6.0.0`. Validated lazily by the client.
    pub server_version: String,
    pub deployment_type: DeploymentType,
    /// Index pattern id used when a search source names no index.
    pub default_index_id: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logzio: Option<LogzioConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_deployment(DeploymentType::Vanilla)
    }
}

impl Config {
    /// Default configuration for a deployment type.
    ///
    /// `Unknown` falls back to the vanilla URI, version and index.
    pub fn for_deployment(deployment_type: DeploymentType) -> Self {
        let (base_uri, server_version, default_index_id) = match deployment_type {
            DeploymentType::Logzio => (
                DEFAULT_LOGZIO_KIBANA_URI,
                DEFAULT_LOGZIO_KIBANA_VERSION,
                DEFAULT_LOGZIO_INDEX_ID,
            ),
            DeploymentType::Vanilla | DeploymentType::Unknown => {
                (DEFAULT_KIBANA_URI, DEFAULT_KIBANA_VERSION, DEFAULT_INDEX_ID)
            }
        };

        Self {
            base_uri: base_uri.to_string(),
            server_version: server_version.to_string(),
            deployment_type,
            default_index_id: default_index_id.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            credentials: None,
            logzio: match deployment_type {
                DeploymentType::Logzio => Some(LogzioConfig::default()),
                _ => None,
            },
        }
    }

    /// Default configuration for the Logz.io hosted variant.
    pub fn logzio() -> Self {
        Self::for_deployment(DeploymentType::Logzio)
    }

    /// Create a config for the given base URI and server version.
    pub fn new(base_uri: impl Into<String>, server_version: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into().trim_end_matches('/').to_string(),
            server_version: server_version.into(),
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_deployment_type(mut self, deployment_type: DeploymentType) -> Self {
        self.deployment_type = deployment_type;
        self
    }

    pub fn with_default_index_id(mut self, index_id: impl Into<String>) -> Self {
        self.default_index_id = index_id.into();
        self
    }

    pub fn with_logzio(mut self, logzio: LogzioConfig) -> Self {
        self.logzio = Some(logzio);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

//! Deployment type of the target Kibana server.
//!
//! The deployment type decides the default base URI, default server version,
//! default index identifier, and which authentication flow applies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which server distribution the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentType {
    /// Self-hosted Kibana.
    #[default]
    Vanilla,
    /// Logz.io hosted multi-tenant Kibana.
    Logzio,
    /// Anything the name table does not recognize.
    Unknown,
}

impl DeploymentType {
    /// Map a deployment name to a type.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unrecognized names resolve to [`DeploymentType::Unknown`], never an error.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "vanilla" | "1" => Self::Vanilla,
            "logzio" | "logz.io" | "2" => Self::Logzio,
            _ => Self::Unknown,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vanilla => "vanilla",
            Self::Logzio => "logzio",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

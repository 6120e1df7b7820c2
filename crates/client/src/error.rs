//! Error types for the Kibana client.
//!
//! Responsibilities:
//! - Classify transport failures, HTTP status failures, configuration
//!   failures and builder validation failures into one enum.
//! - Carry the raw status code and body of failed HTTP calls.
//!
//! Invariants:
//! - Any response with status >= 300 becomes `ClientError::Http`.
//! - Configuration errors (unsupported version or deployment) are raised at
//!   first use of a domain client, never while building a `Config`.

use kibana_config::DeploymentType;
use thiserror::Error;

use crate::registry::Domain;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// A response whose status code was 300 or above.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Status: {code}, {body}")]
pub struct HttpError {
    pub code: u16,
    /// Raw response body, verbatim.
    pub body: String,
}

impl HttpError {
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Errors that can occur during Kibana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a status >= 300.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request never produced a response (connection, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid response format from Kibana.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// No implementation registered for this domain and server version.
    #[error("No {domain} client registered for Kibana version {version}")]
    UnsupportedVersion { domain: Domain, version: String },

    /// The operation does not exist for this deployment type.
    #[error("Operation not supported for deployment type {deployment}")]
    UnsupportedDeployment { deployment: DeploymentType },

    /// The resolved implementation lacks the requested capability.
    #[error("{operation} is not supported by Kibana version {version}")]
    Unsupported {
        operation: &'static str,
        version: String,
    },

    /// A request builder or version string failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Credential exchange failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for ClientError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

impl ClientError {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The HTTP error, if this is one.
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }

    /// Check if this error is a 404 from the server.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_not_found())
    }

    /// Check if this error comes from configuration rather than the network.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedVersion { .. }
                | Self::UnsupportedDeployment { .. }
                | Self::Unsupported { .. }
                | Self::InvalidUrl(_)
        )
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthFailed(_) => true,
            Self::Http(e) => e.code == 401 || e.code == 403,
            _ => false,
        }
    }
}

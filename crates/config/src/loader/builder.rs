//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Support loading from environment variables, `.env` files and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, regardless of call order.
//! - Deployment-dependent defaults are applied in `build()`, after the deployment type is known.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;
use tracing::warn;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_LOGZ_AUTH0_URI, DEFAULT_LOGZ_URI, ENV_DOTENV_DISABLED, ENV_KIBANA_PASSWORD,
    MAX_TIMEOUT_SECS,
};
use crate::types::{Config, Credentials, DeploymentType, LogzioConfig};

/// Configuration loader that builds a `Config` from the environment and explicit values.
#[derive(Default)]
pub struct ConfigLoader {
    pub(super) base_uri: Option<String>,
    pub(super) server_version: Option<String>,
    pub(super) deployment_type: Option<DeploymentType>,
    pub(super) default_index_id: Option<String>,
    pub(super) username: Option<String>,
    pub(super) password: Option<SecretString>,
    pub(super) timeout: Option<Duration>,
    pub(super) logz_client_id: Option<String>,
    pub(super) logz_uri: Option<String>,
    pub(super) auth0_uri: Option<String>,
    pub(super) main_account_id: Option<String>,
    pub(super) sub_account_id: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read the `KIBANA_*` and `LOGZ_*` environment variables.
    ///
    /// Values already set through builder methods are kept.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    pub fn with_server_version(mut self, version: impl Into<String>) -> Self {
        self.server_version = Some(version.into());
        self
    }

    pub fn with_deployment_type(mut self, deployment_type: DeploymentType) -> Self {
        self.deployment_type = Some(deployment_type);
        self
    }

    pub fn with_default_index_id(mut self, index_id: impl Into<String>) -> Self {
        self.default_index_id = Some(index_id.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::new(password.into().into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_logz_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.logz_client_id = Some(client_id.into());
        self
    }

    pub fn with_logz_uri(mut self, uri: impl Into<String>) -> Self {
        self.logz_uri = Some(uri.into());
        self
    }

    pub fn with_auth0_uri(mut self, uri: impl Into<String>) -> Self {
        self.auth0_uri = Some(uri.into());
        self
    }

    pub fn with_account_ids(
        mut self,
        main_account_id: impl Into<String>,
        sub_account_id: impl Into<String>,
    ) -> Self {
        self.main_account_id = Some(main_account_id.into());
        self.sub_account_id = Some(sub_account_id.into());
        self
    }

    fn has_logzio_settings(&self) -> bool {
        self.logz_client_id.is_some()
            || self.logz_uri.is_some()
            || self.auth0_uri.is_some()
            || self.main_account_id.is_some()
            || self.sub_account_id.is_some()
    }

    /// Build the final configuration.
    ///
    /// Unset values fall back to the defaults of the resolved deployment
    /// type. The server version is not validated here.
    pub fn build(self) -> Result<Config, ConfigError> {
        let deployment_type = self.deployment_type.unwrap_or_default();
        let mut config = Config::for_deployment(deployment_type);

        if let Some(uri) = self.base_uri.as_deref() {
            config.base_uri = validate_and_normalize_uri("base_uri", uri)?;
        }
        if let Some(version) = self.server_version.as_deref() {
            config.server_version = version.trim().to_string();
        }
        if let Some(index_id) = self.default_index_id.as_deref() {
            config.default_index_id = index_id.to_string();
        }
        if let Some(timeout) = self.timeout {
            validate_timeout(timeout)?;
            config.timeout = timeout;
        }

        config.credentials = match (self.username.as_ref(), self.password.as_ref()) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            (Some(_), None) => {
                return Err(ConfigError::InvalidValue {
                    var: ENV_KIBANA_PASSWORD.to_string(),
                    message: "required when a username is set".to_string(),
                });
            }
            (None, Some(_)) => {
                warn!("Ignoring password: no username configured");
                None
            }
            (None, None) => None,
        };

        if deployment_type == DeploymentType::Logzio {
            let auth0_uri = match self.auth0_uri.as_deref() {
                Some(uri) => validate_and_normalize_uri("auth0_uri", uri)?,
                None => DEFAULT_LOGZ_AUTH0_URI.to_string(),
            };
            let logz_uri = match self.logz_uri.as_deref() {
                Some(uri) => validate_and_normalize_uri("logz_uri", uri)?,
                None => DEFAULT_LOGZ_URI.to_string(),
            };
            config.logzio = Some(LogzioConfig {
                client_id: self.logz_client_id.clone().unwrap_or_default(),
                auth0_uri,
                logz_uri,
                main_account_id: self.main_account_id.clone(),
                sub_account_id: self.sub_account_id.clone(),
            });
        } else if self.has_logzio_settings() {
            warn!(
                deployment = %deployment_type,
                "Ignoring Logz.io settings for a non Logz.io deployment"
            );
        }

        Ok(config)
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    if timeout.is_zero() {
        return Err(ConfigError::InvalidTimeout {
            message: "must be greater than 0 seconds".to_string(),
        });
    }
    if timeout.as_secs() > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "{} seconds exceeds maximum of {} seconds",
                timeout.as_secs(),
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validates and normalizes an http(s) URI.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
///
/// The path is kept verbatim since hosted Kibana URIs carry one.
fn validate_and_normalize_uri(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: "must not be empty".into(),
        });
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: var.into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:5601): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: "host is required (e.g. http://localhost:5601)".into(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

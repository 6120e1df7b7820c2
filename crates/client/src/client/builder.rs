//! Client builder for constructing [`KibanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Choosing the authentication handler from the configuration when none is given
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Version dispatch (done lazily by [`KibanaClient`] accessors)
//!
//! # Invariants
//! - Redirects are never followed; a 3xx answer surfaces as an HTTP error.
//! - Building never contacts the server.

use kibana_config::Config;
use std::sync::Arc;
use std::time::Duration;

use crate::agent::HttpAgent;
use crate::auth::AuthenticationHandler;
use crate::client::KibanaClient;
use crate::error::Result;
use crate::registry::VersionRegistry;

/// Builder for creating a new [`KibanaClient`].
///
/// ```rust,ignore
/// use kibana_client::{AuthenticationHandler, KibanaClient};
/// use kibana_config::Config;
///
/// let client = KibanaClient::builder()
///     .from_config(Config::new("http://localhost:5601", "7.2.0"))
///     .auth(AuthenticationHandler::basic("elastic", "changeme"))
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct KibanaClientBuilder {
    config: Option<Config>,
    auth: Option<AuthenticationHandler>,
    registry: Option<VersionRegistry>,
    timeout: Option<Duration>,
}

impl KibanaClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` as the connection target.
    pub fn from_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the handler otherwise derived from the configuration.
    pub fn auth(mut self, auth: AuthenticationHandler) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Replace the default version registry.
    pub fn registry(mut self, registry: VersionRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Override the configured request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the [`KibanaClient`].
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client fails to build.
    pub fn build(self) -> Result<KibanaClient> {
        let config = self.config.unwrap_or_default();
        let auth = self
            .auth
            .unwrap_or_else(|| AuthenticationHandler::from_config(&config));

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(config.timeout))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(KibanaClient {
            config: Arc::new(config),
            agent: HttpAgent::new(http, auth),
            registry: Arc::new(self.registry.unwrap_or_default()),
        })
    }
}

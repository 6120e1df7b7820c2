//! Authentication handlers applied to every outgoing request.
//!
//! Responsibilities:
//! - Attach no credentials, HTTP basic credentials, or a Logz.io session token.
//! - Perform the Logz.io login on first use and cache the session token.
//! - Replace the cached session when switching accounts.
//!
//! Does NOT handle:
//! - Token refresh. An expired session surfaces as the server's HTTP error.
//!
//! Invariants:
//! - Secrets never appear in `Debug` output or log fields.
//! - Concurrent first requests perform a single login (the session lock is
//!   held across the exchange).

use kibana_config::{Config, Credentials, DeploymentType, LogzioConfig};
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::endpoints;
use crate::error::Result;

/// Header carrying the Logz.io session token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Strategy for authenticating requests to Kibana.
#[derive(Debug, Clone, Default)]
pub enum AuthenticationHandler {
    #[default]
    NoAuth,
    Basic {
        username: String,
        password: SecretString,
    },
    /// Shared so clones of a client see the same session.
    Logzio(Arc<LogzioAuthentication>),
}

impl AuthenticationHandler {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }

    pub fn logzio(config: &LogzioConfig, credentials: &Credentials) -> Self {
        Self::Logzio(Arc::new(LogzioAuthentication::new(config, credentials)))
    }

    /// Pick the handler matching a resolved configuration.
    pub fn from_config(config: &Config) -> Self {
        match (&config.credentials, config.deployment_type, &config.logzio) {
            (Some(credentials), DeploymentType::Logzio, Some(logzio)) => {
                Self::logzio(logzio, credentials)
            }
            (Some(credentials), _, _) => Self::Basic {
                username: credentials.username.clone(),
                password: credentials.password.clone(),
            },
            (None, DeploymentType::Logzio, _) => {
                warn!("Logz.io deployment without credentials; requests are sent unauthenticated");
                Self::NoAuth
            }
            (None, _, _) => Self::NoAuth,
        }
    }

    /// Attach credentials to `builder`, logging in first if needed.
    pub(crate) async fn initialize(
        &self,
        http: &Client,
        builder: RequestBuilder,
    ) -> Result<RequestBuilder> {
        match self {
            Self::NoAuth => Ok(builder),
            Self::Basic { username, password } => {
                Ok(builder.basic_auth(username, Some(password.expose_secret())))
            }
            Self::Logzio(auth) => {
                let token = auth.session_token(http).await?;
                Ok(builder.header(AUTH_TOKEN_HEADER, token.expose_secret()))
            }
        }
    }
}

/// Logz.io token exchange: Auth0 credentials, then a Logz.io session.
pub struct LogzioAuthentication {
    client_id: String,
    auth0_uri: String,
    logz_uri: String,
    username: String,
    password: SecretString,
    session: Mutex<Option<SecretString>>,
}

impl fmt::Debug for LogzioAuthentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogzioAuthentication")
            .field("client_id", &self.client_id)
            .field("auth0_uri", &self.auth0_uri)
            .field("logz_uri", &self.logz_uri)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl LogzioAuthentication {
    pub fn new(config: &LogzioConfig, credentials: &Credentials) -> Self {
        Self {
            client_id: config.client_id.clone(),
            auth0_uri: config.auth0_uri.clone(),
            logz_uri: config.logz_uri.clone(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            session: Mutex::new(None),
        }
    }

    pub fn logz_uri(&self) -> &str {
        &self.logz_uri
    }

    /// The cached session token, logging in on first use.
    pub async fn session_token(&self, http: &Client) -> Result<SecretString> {
        let mut session = self.session.lock().await;
        if let Some(token) = session.as_ref() {
            return Ok(token.clone());
        }

        info!(username = %self.username, "Logging in to Logz.io");
        let id_token = endpoints::exchange_credentials(
            http,
            &self.auth0_uri,
            &self.client_id,
            &self.username,
            &self.password,
        )
        .await?;
        let token = endpoints::login_jwt(http, &self.logz_uri, &id_token).await?;
        *session = Some(token.clone());
        Ok(token)
    }

    /// Swap the session for one scoped to `account_id`.
    pub async fn replace_session(&self, http: &Client, account_id: &str) -> Result<()> {
        let current = self.session_token(http).await?;
        let token = endpoints::replace_session(http, &self.logz_uri, &current, account_id).await?;
        *self.session.lock().await = Some(token);
        info!(account_id, "Switched Logz.io account");
        Ok(())
    }

    /// Forget the cached session so the next request logs in again.
    pub async fn clear_session(&self) {
        *self.session.lock().await = None;
    }

    pub async fn has_session(&self) -> bool {
        self.session.lock().await.is_some()
    }
}

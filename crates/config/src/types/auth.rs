//! Credential types for Kibana configuration.
//!
//! Responsibilities:
//! - Hold username/password credentials for basic auth or the Logz.io login.
//! - Hold the Logz.io identity provider settings and tenant account ids.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - The token exchange itself (see the client crate's `auth` module).
//!
//! Invariants:
//! - Passwords use `secrecy::SecretString`; `Debug` never prints them.
//! - Serialization includes secrets; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOGZ_AUTH0_URI, DEFAULT_LOGZ_URI};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Username and password pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}

/// Logz.io identity provider and tenant settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogzioConfig {
    /// Client id registered with the identity provider.
    pub client_id: String,
    /// Identity provider base URI (token endpoint is `{auth0_uri}/oauth/ro`).
    pub auth0_uri: String,
    /// Logz.io application base URI (session endpoints live here).
    pub logz_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_account_id: Option<String>,
}

impl Default for LogzioConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            auth0_uri: DEFAULT_LOGZ_AUTH0_URI.to_string(),
            logz_uri: DEFAULT_LOGZ_URI.to_string(),
            main_account_id: None,
            sub_account_id: None,
        }
    }
}

//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the `KIBANA_*` and `LOGZ_*` environment variables.
//! - Apply environment values to a `ConfigLoader` without overriding explicit setters.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_KIBANA_INDEX_ID, ENV_KIBANA_PASSWORD, ENV_KIBANA_TIMEOUT, ENV_KIBANA_TYPE,
    ENV_KIBANA_URI, ENV_KIBANA_USERNAME, ENV_KIBANA_VERSION, ENV_LOGZ_AUTH0_URL,
    ENV_LOGZ_CLIENT_ID, ENV_LOGZ_MAIN_ACCOUNT_ID, ENV_LOGZ_SUB_ACCOUNT_ID, ENV_LOGZ_URL,
};
use crate::types::DeploymentType;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn fill(slot: &mut Option<String>, key: &str) {
    if slot.is_none() {
        *slot = env_var_or_none(key);
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    fill(&mut loader.base_uri, ENV_KIBANA_URI);
    fill(&mut loader.server_version, ENV_KIBANA_VERSION);
    fill(&mut loader.default_index_id, ENV_KIBANA_INDEX_ID);
    fill(&mut loader.username, ENV_KIBANA_USERNAME);
    fill(&mut loader.logz_client_id, ENV_LOGZ_CLIENT_ID);
    fill(&mut loader.logz_uri, ENV_LOGZ_URL);
    fill(&mut loader.auth0_uri, ENV_LOGZ_AUTH0_URL);
    fill(&mut loader.main_account_id, ENV_LOGZ_MAIN_ACCOUNT_ID);
    fill(&mut loader.sub_account_id, ENV_LOGZ_SUB_ACCOUNT_ID);

    if loader.deployment_type.is_none() {
        loader.deployment_type = env_var_or_none(ENV_KIBANA_TYPE)
            .as_deref()
            .map(DeploymentType::from_name);
    }
    if loader.password.is_none() {
        loader.password =
            env_var_or_none(ENV_KIBANA_PASSWORD).map(|p| SecretString::new(p.into()));
    }
    if loader.timeout.is_none()
        && let Some(timeout) = env_var_or_none(ENV_KIBANA_TIMEOUT)
    {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_KIBANA_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.timeout = Some(Duration::from_secs(secs));
    }

    Ok(())
}

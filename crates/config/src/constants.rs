//! Centralized constants for the Kibana client workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid magic string duplication.

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Base URI of the Kibana server.
pub const ENV_KIBANA_URI: &str = "KIBANA_URI";

/// Target server version string (e.g. `6.0.0`).
pub const ENV_KIBANA_VERSION: &str = "ELK_VERSION";

/// Default index pattern identifier.
pub const ENV_KIBANA_INDEX_ID: &str = "KIBANA_INDEX_ID";

/// Deployment type name (`vanilla`, `logzio`).
pub const ENV_KIBANA_TYPE: &str = "KIBANA_TYPE";

/// Username used for basic auth (vanilla) or the identity provider (Logz.io).
pub const ENV_KIBANA_USERNAME: &str = "KIBANA_USERNAME";

/// Password paired with [`ENV_KIBANA_USERNAME`].
pub const ENV_KIBANA_PASSWORD: &str = "KIBANA_PASSWORD";

/// HTTP request timeout in seconds.
pub const ENV_KIBANA_TIMEOUT: &str = "KIBANA_TIMEOUT";

/// Identity provider client id for the Logz.io token exchange.
pub const ENV_LOGZ_CLIENT_ID: &str = "LOGZ_CLIENT_ID";

/// Logz.io application URI (session endpoints).
pub const ENV_LOGZ_URL: &str = "LOGZ_URL";

/// Logz.io identity provider URI.
pub const ENV_LOGZ_AUTH0_URL: &str = "LOGZ_AUTH0_URL";

/// Primary Logz.io account id, used by account switching scenarios.
pub const ENV_LOGZ_MAIN_ACCOUNT_ID: &str = "LOGZ_MAIN_ACCOUNT_ID";

/// Secondary Logz.io account id, used by account switching scenarios.
pub const ENV_LOGZ_SUB_ACCOUNT_ID: &str = "LOGZ_SUB_ACCOUNT_ID";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default Kibana URI for a vanilla installation.
pub const DEFAULT_KIBANA_URI: &str = "http://localhost:5601";

/// Default Kibana URI for the Logz.io hosted variant.
pub const DEFAULT_LOGZIO_KIBANA_URI: &str =
    "https://app-eu.logz.io/kibana/elasticsearch/logzioCustomerKibanaIndex";

/// Kibana 5.5.3, the version Logz.io runs.
pub const KIBANA_VERSION_553: &str = "5.5.3";

/// Kibana 6.0.0.
pub const KIBANA_VERSION_600: &str = "6.0.0";

/// Kibana 7.2.0.
pub const KIBANA_VERSION_720: &str = "7.2.0";

/// Default server version for a vanilla installation.
pub const DEFAULT_KIBANA_VERSION: &str = KIBANA_VERSION_600;

/// Default server version for the Logz.io hosted variant.
pub const DEFAULT_LOGZIO_KIBANA_VERSION: &str = KIBANA_VERSION_553;

/// Default index pattern for a vanilla installation.
pub const DEFAULT_INDEX_ID: &str = "logstash-*";

/// Default (templated, per tenant) index pattern for Logz.io.
pub const DEFAULT_LOGZIO_INDEX_ID: &str = "[logzioCustomerIndex]YYMMDD";

/// Default Logz.io identity provider.
pub const DEFAULT_LOGZ_AUTH0_URI: &str = "https://logzio.auth0.com";

/// Default Logz.io application URI.
pub const DEFAULT_LOGZ_URI: &str = "https://app-eu.logz.io";

// =============================================================================
// Timeout Defaults & Bounds
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

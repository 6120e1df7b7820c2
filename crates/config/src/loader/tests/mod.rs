//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and deployment-dependent defaults.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading and validation errors.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, all unset.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    use crate::constants::*;
    vec![
        (ENV_KIBANA_URI, None),
        (ENV_KIBANA_VERSION, None),
        (ENV_KIBANA_INDEX_ID, None),
        (ENV_KIBANA_TYPE, None),
        (ENV_KIBANA_USERNAME, None),
        (ENV_KIBANA_PASSWORD, None),
        (ENV_KIBANA_TIMEOUT, None),
        (ENV_LOGZ_CLIENT_ID, None),
        (ENV_LOGZ_URL, None),
        (ENV_LOGZ_AUTH0_URL, None),
        (ENV_LOGZ_MAIN_ACCOUNT_ID, None),
        (ENV_LOGZ_SUB_ACCOUNT_ID, None),
    ]
}

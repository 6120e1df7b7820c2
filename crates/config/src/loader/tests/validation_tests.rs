//! Validation tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test timeout bounds.
//! - Test base URI scheme and host validation.

use crate::constants::MAX_TIMEOUT_SECS;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

#[test]
fn test_timeout_zero_invalid() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .build();
    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(
                message.contains("must be greater than 0"),
                "Expected message about timeout > 0, got: {}",
                message
            );
        }
        Ok(_) => panic!("Expected InvalidTimeout error for zero timeout, got Ok"),
        Err(ref e) => panic!("Expected InvalidTimeout error, got {:?}", e),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();
    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(message.contains("exceeds maximum"), "got: {}", message);
        }
        Ok(_) => panic!("Expected InvalidTimeout error for timeout exceeding max, got Ok"),
        Err(ref e) => panic!("Expected InvalidTimeout error, got {:?}", e),
    }
}

#[test]
fn test_timeout_at_max_valid() {
    let config = ConfigLoader::new()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build()
        .unwrap();
    assert_eq!(config.timeout, Duration::from_secs(MAX_TIMEOUT_SECS));
}

#[test]
fn test_base_uri_requires_http_scheme() {
    let result = ConfigLoader::new()
        .with_base_uri("ftp://kibana.example.com")
        .build();
    match result {
        Err(ConfigError::InvalidValue { var, message }) => {
            assert_eq!(var, "base_uri");
            assert!(message.contains("scheme"), "got: {}", message);
        }
        other => panic!("Expected InvalidValue, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_base_uri_must_parse() {
    let result = ConfigLoader::new().with_base_uri("not a url").build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_blank_base_uri_rejected() {
    let result = ConfigLoader::new().with_base_uri("  ").build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

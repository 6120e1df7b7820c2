//! Integration tests for configuration loading through the public API.
//!
//! These tests exercise the `ConfigLoader` builder chain the way a consuming
//! application would, without touching process environment variables.

use kibana_config::{
    Config, ConfigError, ConfigLoader, Credentials, DeploymentType, constants, env_var_or_none,
};
use secrecy::ExposeSecret;
use std::time::Duration;

#[test]
fn test_builder_values_produce_config() {
    let config = ConfigLoader::new()
        .with_base_uri("https://kibana.example.com:5601/")
        .with_server_version("7.2.0")
        .with_default_index_id("metrics-*")
        .with_username("elastic")
        .with_password("changeme")
        .with_timeout(Duration::from_secs(45))
        .build()
        .expect("should build with explicit values");

    assert_eq!(config.base_uri, "https://kibana.example.com:5601");
    assert_eq!(config.server_version, "7.2.0");
    assert_eq!(config.default_index_id, "metrics-*");
    assert_eq!(config.timeout, Duration::from_secs(45));
    assert_eq!(config.deployment_type, DeploymentType::Vanilla);

    let credentials = config.credentials.expect("credentials set");
    assert_eq!(credentials.username, "elastic");
    assert_eq!(credentials.password.expose_secret(), "changeme");
}

#[test]
fn test_logzio_loader_fills_hosted_defaults() {
    let config = ConfigLoader::new()
        .with_deployment_type(DeploymentType::Logzio)
        .with_logz_client_id("client-123")
        .with_account_ids("1001", "1002")
        .build()
        .expect("should build Logz.io config");

    assert_eq!(config.base_uri, constants::DEFAULT_LOGZIO_KIBANA_URI);
    assert_eq!(config.server_version, constants::KIBANA_VERSION_553);
    assert_eq!(config.default_index_id, constants::DEFAULT_LOGZIO_INDEX_ID);

    let logzio = config.logzio.expect("Logz.io settings present");
    assert_eq!(logzio.client_id, "client-123");
    assert_eq!(logzio.auth0_uri, constants::DEFAULT_LOGZ_AUTH0_URI);
    assert_eq!(logzio.logz_uri, constants::DEFAULT_LOGZ_URI);
    assert_eq!(logzio.main_account_id.as_deref(), Some("1001"));
    assert_eq!(logzio.sub_account_id.as_deref(), Some("1002"));
}

#[test]
fn test_username_without_password_is_rejected() {
    let err = ConfigLoader::new()
        .with_username("elastic")
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_invalid_base_uri_is_rejected() {
    for uri in ["", "   ", "localhost:5601", "ftp://kibana"] {
        let result = ConfigLoader::new().with_base_uri(uri).build();
        assert!(
            matches!(result, Err(ConfigError::InvalidValue { .. })),
            "{uri:?} should be rejected"
        );
    }
}

#[test]
fn test_config_serializes_without_leaking_password() {
    let config = Config::new("http://localhost:5601", "6.0.0")
        .with_credentials(Credentials::new("elastic", "super-secret"));
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["deployment_type"], "vanilla");
    assert_eq!(json["timeout"], 30);

    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"), "{debug}");
}

#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none(constants::ENV_KIBANA_URI);
}

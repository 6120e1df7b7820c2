//! Configuration type definitions for the Kibana client.
//!
//! Responsibilities:
//! - Define the deployment type and its name table.
//! - Define the resolved `Config` shared by every domain client.
//! - Define credential types for basic auth and the Logz.io token exchange.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Parsing server version strings (see the client crate's version module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
mod connection;
mod deployment;

pub use auth::{Credentials, LogzioConfig};
pub use connection::Config;
pub use deployment::DeploymentType;

//! Configuration management for the Kibana client.
//!
//! This crate provides the resolved connection target (`Config`) and a
//! loader that assembles it from defaults, environment variables and
//! explicit values. It performs no network I/O.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, Credentials, DeploymentType, LogzioConfig};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}

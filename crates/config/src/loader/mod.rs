//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Resolve a `Config` from defaults, environment variables and explicit setters.
//! - Provide a builder-pattern `ConfigLoader`.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Validating server version strings (the client does that at first use).
//! - Any network I/O.
//!
//! Invariants / Assumptions:
//! - Explicit builder setters take precedence over environment variables.
//! - Defaults depend on the resolved deployment type.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;

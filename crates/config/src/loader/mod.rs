//! Configuration loader for environment variables and the `.env` file.
//!
//! Responsibilities:
//! - Populate the process environment from an optional `.env` file.
//! - Read the recognized variables into a builder-pattern `ConfigLoader`.
//! - Produce the immutable `Config` snapshot with `load()`.
//!
//! Does NOT handle:
//! - Holding the configuration in a global; callers own the returned `Config`.
//!
//! Invariants / Assumptions:
//! - Pre-existing process environment variables take precedence over `.env` entries.
//! - A port that fails to parse aborts loading; no `Config` is produced.
//! - The `DOTENV_DISABLED` variable is checked before the `.env` file is read.
//! - Malformed `.env` entries are skipped with a warning; only ports abort loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, default_dotenv_path, deployment_root};
pub use env::{env_var_or_none, recognized_env_vars};
pub use error::ConfigError;

use crate::types::Config;

/// Load the configuration once at process entry.
///
/// Reads the `.env` file at [`default_dotenv_path`] (one directory above the
/// executable's directory), then the process
/// environment, and applies defaults for anything unset.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when a port variable is not a valid
/// integer, or a dotenv error when the `.env` file exists but is unreadable.
pub fn load() -> Result<Config, ConfigError> {
    Ok(ConfigLoader::new().load_dotenv()?.from_env()?.build())
}

//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder methods and default application.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading, precedence against the process environment, and errors.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

use super::env::recognized_env_vars;
use crate::constants::ENV_DOTENV_DISABLED;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every recognized variable unset, plus `overrides` applied.
///
/// Anything `f` writes to those variables (including values injected from a
/// `.env` file) is restored afterwards.
pub fn with_clean_env<F, R>(overrides: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut vars: Vec<(String, Option<String>)> = recognized_env_vars()
        .into_iter()
        .map(|key| {
            let value = overrides
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string());
            (key, value)
        })
        .collect();
    vars.push((ENV_DOTENV_DISABLED.to_string(), None));
    temp_env::with_vars(vars, f)
}

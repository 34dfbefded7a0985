//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the recognized environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty environment variables are treated as unset.
//! - String values are returned verbatim; only port text is trimmed before parsing.
//! - Invalid port values (including non-UTF-8 ones) return ConfigError::InvalidValue;
//!   they never fall back to a default.

use secrecy::SecretString;
use std::env::VarError;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    DB_HOST_SUFFIX, DB_NAME_SUFFIX, DB_PASSWORD_SUFFIX, DB_PORT_SUFFIX, DB_SUFFIXES,
    DB_USER_SUFFIX, ENV_CORS_ORIGIN, ENV_GRAPHQL_INTROSPECTION, ENV_GRAPHQL_PLAYGROUND,
    ENV_GRAPHQL_PORT, ENV_NODE_ENV, ENV_NODEJS_PORT, ENV_PYTHON_PORT, ENV_REST_PORT,
    SERVICE_ENV_VARS,
};
use crate::types::Backend;

/// Every environment variable the loader reads.
pub fn recognized_env_vars() -> Vec<String> {
    Backend::ALL
        .iter()
        .flat_map(|backend| DB_SUFFIXES.iter().map(move |suffix| backend.env_var(suffix)))
        .chain(SERVICE_ENV_VARS.iter().map(|key| key.to_string()))
        .collect()
}

/// Read an environment variable, returning None if unset or empty.
/// Non-empty values are returned verbatim, surrounding whitespace included.
pub fn env_var_or_none(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if value.is_empty() => None,
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(var = key, "Ignoring environment variable that is not valid UTF-8");
            None
        }
    }
}

/// Read a port variable. Unset or empty yields `Ok(None)`; anything that is
/// not a valid `u16` after trimming is an error, as is a non-UTF-8 value.
pub fn env_port(key: &str) -> Result<Option<u16>, ConfigError> {
    let raw = match std::env::var(key) {
        Ok(value) if value.is_empty() => return Ok(None),
        Ok(value) => value,
        Err(VarError::NotPresent) => return Ok(None),
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(var = key, "Port variable is not valid UTF-8");
            return Err(ConfigError::invalid_port(key));
        }
    };

    raw.trim().parse::<u16>().map(Some).map_err(|_| {
        tracing::warn!(var = key, "Port variable is not a valid integer");
        ConfigError::invalid_port(key)
    })
}

/// Read a feature flag. A set variable is enabled only when its value is exactly `true`.
pub fn env_flag(key: &str) -> Option<bool> {
    env_var_or_none(key).map(|value| value == "true")
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over values set on the loader earlier.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    for backend in Backend::ALL {
        if let Some(host) = env_var_or_none(&backend.env_var(DB_HOST_SUFFIX)) {
            loader.set_database_host(backend, Some(host));
        }
        if let Some(port) = env_port(&backend.env_var(DB_PORT_SUFFIX))? {
            loader.set_database_port(backend, Some(port));
        }
        if let Some(user) = env_var_or_none(&backend.env_var(DB_USER_SUFFIX)) {
            loader.set_database_user(backend, Some(user));
        }
        if let Some(password) = env_var_or_none(&backend.env_var(DB_PASSWORD_SUFFIX)) {
            loader.set_database_password(backend, Some(SecretString::new(password.into())));
        }
        if let Some(name) = env_var_or_none(&backend.env_var(DB_NAME_SUFFIX)) {
            loader.set_database_name(backend, Some(name));
        }
    }

    // Server
    if let Some(port) = env_port(ENV_PYTHON_PORT)? {
        loader.set_server_port(Some(port));
    }
    if let Some(port) = env_port(ENV_NODEJS_PORT)? {
        loader.set_nodejs_port(Some(port));
    }
    if let Some(mode) = env_var_or_none(ENV_NODE_ENV) {
        loader.set_node_env(Some(mode));
    }

    // API surfaces
    if let Some(port) = env_port(ENV_GRAPHQL_PORT)? {
        loader.set_graphql_port(Some(port));
    }
    if let Some(enabled) = env_flag(ENV_GRAPHQL_INTROSPECTION) {
        loader.set_graphql_introspection(Some(enabled));
    }
    if let Some(enabled) = env_flag(ENV_GRAPHQL_PLAYGROUND) {
        loader.set_graphql_playground(Some(enabled));
    }
    if let Some(port) = env_port(ENV_REST_PORT)? {
        loader.set_rest_port(Some(port));
    }

    if let Some(origin) = env_var_or_none(ENV_CORS_ORIGIN) {
        loader.set_cors_origin(Some(origin));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_only_empty_strings() {
        // Unset env var returns None
        let key1 = "_PLAYGROUND_TEST_UNSET_VAR";
        let result1 = env_var_or_none(key1);
        assert!(result1.is_none(), "Unset env var should return None");

        // Empty string env var returns None
        temp_env::with_vars([(key1, Some(""))], || {
            let result2 = env_var_or_none(key1);
            assert!(result2.is_none(), "Empty string env var should return None");
        });

        // Whitespace-only is a real value
        temp_env::with_vars([(key1, Some("   "))], || {
            assert_eq!(env_var_or_none(key1), Some("   ".to_string()));
        });

        // Surrounding whitespace is preserved
        let key2 = "_PLAYGROUND_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(
                env_var_or_none(key2),
                Some(" test-value ".to_string()),
                "Non-empty env var should be returned verbatim"
            );
        });
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_utf8_port_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let key = "_PLAYGROUND_TEST_BINARY_PORT";
        let value = OsString::from_vec(b"8\xff".to_vec());
        temp_env::with_vars([(key, Some(value))], || match env_port(key) {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, key),
            other => panic!("expected InvalidValue, got {:?}", other),
        });
    }

    #[test]
    fn test_recognized_env_vars_cover_both_backends() {
        let vars = recognized_env_vars();
        assert_eq!(vars.len(), 18);
        assert!(vars.contains(&"MYSQL_DB_NAME".to_string()));
        assert!(vars.contains(&"POSTGRES_PASSWORD".to_string()));
        assert!(vars.contains(&"BE_PYTHON_PORT".to_string()));
        assert!(vars.contains(&"CORS_ORIGIN".to_string()));
    }

    #[test]
    #[serial]
    fn test_env_port_parses_and_rejects() {
        let key = "_PLAYGROUND_TEST_PORT";

        assert!(matches!(env_port(key), Ok(None)));

        temp_env::with_vars([(key, Some(" 8080 "))], || {
            assert_eq!(env_port(key).unwrap(), Some(8080));
        });

        for bad in ["not-a-number", "-1", "65536", "80.5", "   "] {
            temp_env::with_vars([(key, Some(bad))], || {
                match env_port(key) {
                    Err(ConfigError::InvalidValue { var, message }) => {
                        assert_eq!(var, key);
                        assert!(!message.contains(bad), "value echoed: {}", message);
                    }
                    other => panic!("expected InvalidValue for {:?}, got {:?}", bad, other),
                }
            });
        }
    }

    #[test]
    #[serial]
    fn test_env_flag_requires_exact_true() {
        let key = "_PLAYGROUND_TEST_FLAG";

        assert_eq!(env_flag(key), None);

        temp_env::with_vars([(key, Some("true"))], || {
            assert_eq!(env_flag(key), Some(true));
        });
        for disabled in ["false", "1", "TRUE", "yes"] {
            temp_env::with_vars([(key, Some(disabled))], || {
                assert_eq!(env_flag(key), Some(false), "value {:?}", disabled);
            });
        }
    }
}

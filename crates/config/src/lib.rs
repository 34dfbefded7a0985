//! Environment configuration for the playground services.
//!
//! This crate reads process environment variables, optionally populated from a
//! `.env` file, and exposes typed database credentials and server settings as an
//! immutable [`Config`]. Connection strings are derived on demand with
//! [`connection_string`].
//!
//! ```no_run
//! use playground_config::{Backend, connection_string};
//!
//! let config = playground_config::load().expect("invalid configuration");
//! let url = connection_string(&config, Backend::Postgres);
//! # let _ = url;
//! ```

pub mod connection;
pub mod constants;
mod loader;
pub mod types;

pub use connection::{connection_string, mysql_url, postgres_url};
pub use loader::{
    ConfigError, ConfigLoader, default_dotenv_path, deployment_root, env_var_or_none, load,
    recognized_env_vars,
};
pub use types::{
    Backend, Config, CorsConfig, DatabaseConfig, GraphqlConfig, RestConfig, ServerConfig,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}

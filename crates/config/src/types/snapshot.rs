//! The immutable configuration snapshot.
//!
//! Responsibilities:
//! - Combine both database credential groups with the server, API and CORS groups.
//! - Provide the documented defaults through `Default`.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader` module).
//! - Formatting connection strings for callers (see `connection` module).
//!
//! Invariants:
//! - A `Config` is built once at process entry and only read afterwards.
//! - Consumers receive it by reference or as an owned clone, never through a global.

use super::backend::Backend;
use super::database::DatabaseConfig;
use super::server::{CorsConfig, GraphqlConfig, RestConfig, ServerConfig};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First backend credentials
    pub mysql: DatabaseConfig,
    /// Second backend credentials
    pub postgres: DatabaseConfig,
    /// Hosting server settings
    pub server: ServerConfig,
    pub graphql: GraphqlConfig,
    pub rest: RestConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Credential group for `backend`.
    pub fn database(&self, backend: Backend) -> &DatabaseConfig {
        match backend {
            Backend::MySql => &self.mysql,
            Backend::Postgres => &self.postgres,
        }
    }
}

impl Default for Config {
    /// Every field at its documented default, as if no variable were set.
    fn default() -> Self {
        Self {
            mysql: DatabaseConfig::defaults_for(Backend::MySql),
            postgres: DatabaseConfig::defaults_for(Backend::Postgres),
            server: ServerConfig::default(),
            graphql: GraphqlConfig::default(),
            rest: RestConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_matches_documented_values() {
        let config = Config::default();

        assert_eq!(config.mysql.host, "localhost");
        assert_eq!(config.mysql.port, 3306);
        assert_eq!(config.mysql.user, "root");
        assert_eq!(config.mysql.password.expose_secret(), "");
        assert_eq!(config.mysql.database, "");

        assert_eq!(config.postgres.host, "localhost");
        assert_eq!(config.postgres.port, 5432);
        assert_eq!(config.postgres.user, "postgres");
        assert_eq!(config.postgres.password.expose_secret(), "");
        assert_eq!(config.postgres.database, "");

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.nodejs_port, 3001);
        assert_eq!(config.server.node_env, "development");
        assert_eq!(config.graphql.port, 4000);
        assert!(!config.graphql.introspection);
        assert!(!config.graphql.playground);
        assert_eq!(config.rest.port, 5000);
        assert_eq!(config.cors.origin, "http://localhost:3000");
    }

    #[test]
    fn test_database_selects_group() {
        let config = Config::default();
        assert_eq!(config.database(Backend::MySql).port, 3306);
        assert_eq!(config.database(Backend::Postgres).port, 5432);
    }

    #[test]
    fn test_config_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
    }
}

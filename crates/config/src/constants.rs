//! Centralized constants for the playground configuration crate.
//!
//! This module contains the recognized environment variable names and the
//! default values applied when a variable is unset, so that loader code and
//! tests share a single source of truth.

// =============================================================================
// Database Backends
// =============================================================================

/// Suffix appended to a backend prefix to form its host variable (`MYSQL_HOST`).
pub const DB_HOST_SUFFIX: &str = "HOST";

/// Suffix for the backend port variable (`MYSQL_PORT`).
pub const DB_PORT_SUFFIX: &str = "PORT";

/// Suffix for the backend user variable (`MYSQL_USER`).
pub const DB_USER_SUFFIX: &str = "USER";

/// Suffix for the backend password variable (`MYSQL_PASSWORD`).
pub const DB_PASSWORD_SUFFIX: &str = "PASSWORD";

/// Suffix for the backend database name variable (`MYSQL_DB_NAME`).
pub const DB_NAME_SUFFIX: &str = "DB_NAME";

/// Every per-backend key suffix, in load order.
pub const DB_SUFFIXES: [&str; 5] = [
    DB_HOST_SUFFIX,
    DB_PORT_SUFFIX,
    DB_USER_SUFFIX,
    DB_PASSWORD_SUFFIX,
    DB_NAME_SUFFIX,
];

/// Default host for both database backends.
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default MySQL port.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Default MySQL user.
pub const DEFAULT_MYSQL_USER: &str = "root";

/// Default PostgreSQL port.
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default PostgreSQL user.
pub const DEFAULT_POSTGRES_USER: &str = "postgres";

// =============================================================================
// Server
// =============================================================================

/// Port the Python backend binds.
pub const ENV_PYTHON_PORT: &str = "BE_PYTHON_PORT";

/// Port the Node.js backend binds.
pub const ENV_NODEJS_PORT: &str = "BE_NODEJS_PORT";

/// Free-form environment mode label.
pub const ENV_NODE_ENV: &str = "NODE_ENV";

/// Default Python backend port.
pub const DEFAULT_PYTHON_PORT: u16 = 8000;

/// Default Node.js backend port.
pub const DEFAULT_NODEJS_PORT: u16 = 3001;

/// Default environment mode.
pub const DEFAULT_NODE_ENV: &str = "development";

/// Mode label that marks a production deployment.
pub const PRODUCTION_NODE_ENV: &str = "production";

// =============================================================================
// API Surfaces
// =============================================================================

/// GraphQL API port.
pub const ENV_GRAPHQL_PORT: &str = "API_GRAPHQL_PORT";

/// Enables GraphQL schema introspection when exactly `true`.
pub const ENV_GRAPHQL_INTROSPECTION: &str = "GRAPHQL_INTROSPECTION";

/// Enables the GraphQL playground when exactly `true`.
pub const ENV_GRAPHQL_PLAYGROUND: &str = "GRAPHQL_PLAYGROUND";

/// REST API port.
pub const ENV_REST_PORT: &str = "API_REST_PORT";

/// Default GraphQL API port.
pub const DEFAULT_GRAPHQL_PORT: u16 = 4000;

/// Default REST API port.
pub const DEFAULT_REST_PORT: u16 = 5000;

// =============================================================================
// CORS
// =============================================================================

/// Allowed cross-origin value.
pub const ENV_CORS_ORIGIN: &str = "CORS_ORIGIN";

/// Default allowed origin (the local frontend dev server).
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Recognized keys that are not tied to a database backend.
pub const SERVICE_ENV_VARS: [&str; 8] = [
    ENV_PYTHON_PORT,
    ENV_NODEJS_PORT,
    ENV_NODE_ENV,
    ENV_GRAPHQL_PORT,
    ENV_GRAPHQL_INTROSPECTION,
    ENV_GRAPHQL_PLAYGROUND,
    ENV_REST_PORT,
    ENV_CORS_ORIGIN,
];

// =============================================================================
// Dotenv
// =============================================================================

/// Set to `1` or `true` to skip `.env` loading entirely.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// File name of the environment override file.
pub const DOTENV_FILE_NAME: &str = ".env";

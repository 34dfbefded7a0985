//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that layers explicit values,
//!   environment variables and the `.env` file.
//! - Build the final immutable `Config`, applying documented defaults.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Deriving connection strings (see connection.rs).
//!
//! Invariants / Assumptions:
//! - Variables already present in the process environment win over `.env` entries.
//! - The default `.env` location is derived from the executable, not the working directory.
//! - Unparsable `.env` entries are logged and skipped; they never abort loading.
//! - `from_env()` overwrites values set earlier on the builder; later builder calls win.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before the `.env` file is read.
//! - `build()` cannot fail; all fallible parsing happens in `from_env()`.

use secrecy::SecretString;
use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DB_HOST_SUFFIX, DB_NAME_SUFFIX, DB_PASSWORD_SUFFIX, DB_PORT_SUFFIX, DB_USER_SUFFIX,
    DOTENV_FILE_NAME, ENV_CORS_ORIGIN, ENV_DOTENV_DISABLED, ENV_GRAPHQL_INTROSPECTION,
    ENV_GRAPHQL_PLAYGROUND, ENV_GRAPHQL_PORT, ENV_NODE_ENV, ENV_NODEJS_PORT, ENV_PYTHON_PORT,
    ENV_REST_PORT,
};
use crate::types::{
    Backend, Config, CorsConfig, DatabaseConfig, GraphqlConfig, RestConfig, ServerConfig,
};

/// Directory containing the running executable, with symlinks resolved.
pub fn deployment_root() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
    exe.parent().map(Path::to_path_buf)
}

/// Location of the `.env` file when none is set explicitly: one directory
/// above the deployment root. `None` when the executable cannot be located.
pub fn default_dotenv_path() -> Option<PathBuf> {
    let root = deployment_root()?;
    Some(root.parent().unwrap_or(&root).join(DOTENV_FILE_NAME))
}

/// Values collected for one database backend before defaults are applied.
#[derive(Default)]
struct DatabaseOverrides {
    host: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    password: Option<SecretString>,
    database: Option<String>,
}

impl DatabaseOverrides {
    fn build(self, backend: Backend) -> DatabaseConfig {
        let defaults = DatabaseConfig::defaults_for(backend);
        DatabaseConfig {
            host: or_default(self.host, &backend.env_var(DB_HOST_SUFFIX), defaults.host),
            port: or_default(self.port, &backend.env_var(DB_PORT_SUFFIX), defaults.port),
            user: or_default(self.user, &backend.env_var(DB_USER_SUFFIX), defaults.user),
            password: or_default(
                self.password,
                &backend.env_var(DB_PASSWORD_SUFFIX),
                defaults.password,
            ),
            database: or_default(
                self.database,
                &backend.env_var(DB_NAME_SUFFIX),
                defaults.database,
            ),
        }
    }
}

fn or_default<T>(value: Option<T>, var: &str, default: T) -> T {
    value.unwrap_or_else(|| {
        tracing::debug!(var, "Using default value");
        default
    })
}

/// Configuration loader that builds config from the environment and `.env` file.
#[derive(Default)]
pub struct ConfigLoader {
    dotenv_path: Option<PathBuf>,
    mysql: DatabaseOverrides,
    postgres: DatabaseOverrides,
    server_port: Option<u16>,
    nodejs_port: Option<u16>,
    node_env: Option<String>,
    graphql_port: Option<u16>,
    graphql_introspection: Option<bool>,
    graphql_playground: Option<bool>,
    rest_port: Option<u16>,
    cors_origin: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Set an explicit `.env` location instead of [`default_dotenv_path`].
    pub fn with_dotenv_path(mut self, path: PathBuf) -> Self {
        self.dotenv_path = Some(path);
        self
    }

    /// The `.env` location `load_dotenv()` will read.
    pub fn dotenv_path(&self) -> Option<PathBuf> {
        self.dotenv_path.clone().or_else(default_dotenv_path)
    }

    /// Load environment variables from the `.env` file if present.
    ///
    /// Keys already set in the process environment are left untouched; the
    /// file only fills in missing keys. Entries that cannot be parsed are
    /// logged by position and skipped.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvIo` if the `.env` file exists but cannot be read.
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Neither errors nor logs include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("Skipping .env loading, DOTENV_DISABLED is set");
            return Ok(self);
        }

        let Some(path) = self.dotenv_path() else {
            tracing::warn!("Unable to locate the executable, skipping .env loading");
            return Ok(self);
        };

        let entries = match dotenvy::from_path_iter(&path) {
            Ok(entries) => entries,
            Err(e) if Self::is_not_found(&e) => {
                tracing::debug!(path = %path.display(), "No .env file found");
                return Ok(self);
            }
            Err(dotenvy::Error::Io(io_err)) => {
                return Err(ConfigError::DotenvIo {
                    kind: io_err.kind(),
                });
            }
            Err(_) => return Err(ConfigError::DotenvUnknown),
        };

        let mut applied = 0usize;
        for (entry, item) in entries.enumerate() {
            match item {
                Ok((key, value)) => {
                    if std::env::var_os(&key).is_some() {
                        continue;
                    }
                    // SAFETY: configuration is loaded once at process entry,
                    // before other threads read the environment.
                    unsafe {
                        std::env::set_var(&key, value);
                    }
                    applied += 1;
                }
                Err(dotenvy::Error::LineParse(_, position)) => {
                    tracing::warn!(
                        path = %path.display(),
                        entry,
                        position,
                        "Skipping unparsable .env entry"
                    );
                }
                Err(dotenvy::Error::Io(io_err)) => {
                    return Err(ConfigError::DotenvIo {
                        kind: io_err.kind(),
                    });
                }
                Err(_) => return Err(ConfigError::DotenvUnknown),
            }
        }

        tracing::debug!(path = %path.display(), applied, "Loaded .env file");
        Ok(self)
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_database_host(mut self, backend: Backend, host: String) -> Self {
        self.set_database_host(backend, Some(host));
        self
    }

    pub fn with_database_port(mut self, backend: Backend, port: u16) -> Self {
        self.set_database_port(backend, Some(port));
        self
    }

    pub fn with_database_user(mut self, backend: Backend, user: String) -> Self {
        self.set_database_user(backend, Some(user));
        self
    }

    pub fn with_database_password(mut self, backend: Backend, password: String) -> Self {
        self.set_database_password(backend, Some(SecretString::new(password.into())));
        self
    }

    pub fn with_database_name(mut self, backend: Backend, name: String) -> Self {
        self.set_database_name(backend, Some(name));
        self
    }

    /// Set the Python backend port.
    pub fn with_server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the Node.js backend port.
    pub fn with_nodejs_port(mut self, port: u16) -> Self {
        self.nodejs_port = Some(port);
        self
    }

    pub fn with_node_env(mut self, mode: String) -> Self {
        self.node_env = Some(mode);
        self
    }

    pub fn with_graphql_port(mut self, port: u16) -> Self {
        self.graphql_port = Some(port);
        self
    }

    pub fn with_graphql_introspection(mut self, enabled: bool) -> Self {
        self.graphql_introspection = Some(enabled);
        self
    }

    pub fn with_graphql_playground(mut self, enabled: bool) -> Self {
        self.graphql_playground = Some(enabled);
        self
    }

    pub fn with_rest_port(mut self, port: u16) -> Self {
        self.rest_port = Some(port);
        self
    }

    pub fn with_cors_origin(mut self, origin: String) -> Self {
        self.cors_origin = Some(origin);
        self
    }

    /// Build the final configuration, filling unset values with defaults.
    pub fn build(self) -> Config {
        let server_defaults = ServerConfig::default();
        let graphql_defaults = GraphqlConfig::default();

        let config = Config {
            mysql: self.mysql.build(Backend::MySql),
            postgres: self.postgres.build(Backend::Postgres),
            server: ServerConfig {
                port: or_default(self.server_port, ENV_PYTHON_PORT, server_defaults.port),
                nodejs_port: or_default(
                    self.nodejs_port,
                    ENV_NODEJS_PORT,
                    server_defaults.nodejs_port,
                ),
                node_env: or_default(self.node_env, ENV_NODE_ENV, server_defaults.node_env),
            },
            graphql: GraphqlConfig {
                port: or_default(self.graphql_port, ENV_GRAPHQL_PORT, graphql_defaults.port),
                introspection: or_default(
                    self.graphql_introspection,
                    ENV_GRAPHQL_INTROSPECTION,
                    graphql_defaults.introspection,
                ),
                playground: or_default(
                    self.graphql_playground,
                    ENV_GRAPHQL_PLAYGROUND,
                    graphql_defaults.playground,
                ),
            },
            rest: RestConfig {
                port: or_default(self.rest_port, ENV_REST_PORT, RestConfig::default().port),
            },
            cors: CorsConfig {
                origin: or_default(
                    self.cors_origin,
                    ENV_CORS_ORIGIN,
                    CorsConfig::default().origin,
                ),
            },
        };

        tracing::debug!(
            mysql_host = %config.mysql.host,
            mysql_port = config.mysql.port,
            postgres_host = %config.postgres.host,
            postgres_port = config.postgres.port,
            server_port = config.server.port,
            node_env = %config.server.node_env,
            "Configuration loaded"
        );

        config
    }

    fn database_mut(&mut self, backend: Backend) -> &mut DatabaseOverrides {
        match backend {
            Backend::MySql => &mut self.mysql,
            Backend::Postgres => &mut self.postgres,
        }
    }

    pub(crate) fn set_database_host(&mut self, backend: Backend, host: Option<String>) {
        self.database_mut(backend).host = host;
    }

    pub(crate) fn set_database_port(&mut self, backend: Backend, port: Option<u16>) {
        self.database_mut(backend).port = port;
    }

    pub(crate) fn set_database_user(&mut self, backend: Backend, user: Option<String>) {
        self.database_mut(backend).user = user;
    }

    pub(crate) fn set_database_password(
        &mut self,
        backend: Backend,
        password: Option<SecretString>,
    ) {
        self.database_mut(backend).password = password;
    }

    pub(crate) fn set_database_name(&mut self, backend: Backend, name: Option<String>) {
        self.database_mut(backend).database = name;
    }

    pub(crate) fn set_server_port(&mut self, port: Option<u16>) {
        self.server_port = port;
    }

    pub(crate) fn set_nodejs_port(&mut self, port: Option<u16>) {
        self.nodejs_port = port;
    }

    pub(crate) fn set_node_env(&mut self, mode: Option<String>) {
        self.node_env = mode;
    }

    pub(crate) fn set_graphql_port(&mut self, port: Option<u16>) {
        self.graphql_port = port;
    }

    pub(crate) fn set_graphql_introspection(&mut self, enabled: Option<bool>) {
        self.graphql_introspection = enabled;
    }

    pub(crate) fn set_graphql_playground(&mut self, enabled: Option<bool>) {
        self.graphql_playground = enabled;
    }

    pub(crate) fn set_rest_port(&mut self, port: Option<u16>) {
        self.rest_port = port;
    }

    pub(crate) fn set_cors_origin(&mut self, origin: Option<String>) {
        self.cors_origin = origin;
    }
}

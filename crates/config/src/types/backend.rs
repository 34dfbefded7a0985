//! Supported relational database backends.

use std::fmt;

use crate::constants::{
    DEFAULT_MYSQL_PORT, DEFAULT_MYSQL_USER, DEFAULT_POSTGRES_PORT, DEFAULT_POSTGRES_USER,
};

/// One of the two relational database targets the services connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    MySql,
    Postgres,
}

impl Backend {
    /// Every supported backend, in load order.
    pub const ALL: [Backend; 2] = [Backend::MySql, Backend::Postgres];

    /// URL scheme used in connection strings.
    pub fn scheme(self) -> &'static str {
        match self {
            Backend::MySql => "mysql",
            Backend::Postgres => "postgresql",
        }
    }

    /// Prefix shared by this backend's environment variables.
    pub fn env_prefix(self) -> &'static str {
        match self {
            Backend::MySql => "MYSQL",
            Backend::Postgres => "POSTGRES",
        }
    }

    /// Full environment variable name for a key suffix, e.g. `MYSQL_DB_NAME`.
    pub fn env_var(self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix(), suffix)
    }

    pub fn default_port(self) -> u16 {
        match self {
            Backend::MySql => DEFAULT_MYSQL_PORT,
            Backend::Postgres => DEFAULT_POSTGRES_PORT,
        }
    }

    pub fn default_user(self) -> &'static str {
        match self {
            Backend::MySql => DEFAULT_MYSQL_USER,
            Backend::Postgres => DEFAULT_POSTGRES_USER,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::MySql => write!(f, "mysql"),
            Backend::Postgres => write!(f, "postgres"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DB_NAME_SUFFIX, DB_PORT_SUFFIX};

    #[test]
    fn test_env_var_names() {
        assert_eq!(Backend::MySql.env_var(DB_PORT_SUFFIX), "MYSQL_PORT");
        assert_eq!(Backend::Postgres.env_var(DB_NAME_SUFFIX), "POSTGRES_DB_NAME");
    }

    #[test]
    fn test_display_and_scheme() {
        assert_eq!(Backend::MySql.to_string(), "mysql");
        assert_eq!(Backend::Postgres.to_string(), "postgres");
        assert_eq!(Backend::Postgres.scheme(), "postgresql");
    }
}

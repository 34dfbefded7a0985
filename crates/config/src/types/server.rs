//! Server, API surface and CORS setting groups.

use crate::constants::{
    DEFAULT_CORS_ORIGIN, DEFAULT_GRAPHQL_PORT, DEFAULT_NODE_ENV, DEFAULT_NODEJS_PORT,
    DEFAULT_PYTHON_PORT, DEFAULT_REST_PORT, PRODUCTION_NODE_ENV,
};

/// Ports the hosting backends bind and the environment mode label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port the Python backend binds (`BE_PYTHON_PORT`).
    pub port: u16,
    /// Port the Node.js backend binds (`BE_NODEJS_PORT`).
    pub nodejs_port: u16,
    /// Free-form mode label (`NODE_ENV`). Not validated against an enum.
    pub node_env: String,
}

impl ServerConfig {
    /// True only when the mode label is exactly `production`.
    pub fn is_production(&self) -> bool {
        self.node_env == PRODUCTION_NODE_ENV
    }

    /// Any mode other than `production` counts as development.
    pub fn is_development(&self) -> bool {
        !self.is_production()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PYTHON_PORT,
            nodejs_port: DEFAULT_NODEJS_PORT,
            node_env: DEFAULT_NODE_ENV.to_string(),
        }
    }
}

/// GraphQL API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlConfig {
    pub port: u16,
    pub introspection: bool,
    pub playground: bool,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_GRAPHQL_PORT,
            introspection: false,
            playground: false,
        }
    }
}

/// REST API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    pub port: u16,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_REST_PORT,
        }
    }
}

/// Cross-origin settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origin, passed through unvalidated.
    pub origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

//! Configuration type definitions for the playground services.
//!
//! Responsibilities:
//! - Define the database backend identifiers and per-backend credential groups.
//! - Define the server, API and CORS setting groups.
//! - Define the immutable `Config` snapshot combining all groups.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Opening database connections or binding servers (external consumers do that).
//!
//! Invariants:
//! - Passwords use `secrecy::SecretString` so `Debug` output never reveals them.
//! - `Config::default()` yields exactly the documented defaults for every key.

mod backend;
mod database;
mod server;
mod snapshot;

pub use backend::Backend;
pub use database::DatabaseConfig;
pub use server::{CorsConfig, GraphqlConfig, RestConfig, ServerConfig};
pub use snapshot::Config;

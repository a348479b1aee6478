//! Database module: models, schema and the Postgres-backed todo storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL run at startup
//! - `postgres.rs`: queries over a lazily connected pool

pub mod models;
pub mod postgres;
pub mod schema;

pub use postgres::TodoStorage;

use crate::config::{Config, ConfigError};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Build a pool without opening any connection.
///
/// Fails only on invalid settings; reachability is discovered on first use.
pub fn connect_lazy(cfg: &Config) -> Result<TodoStorage, ConfigError> {
    let options = cfg.database.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(cfg.db_max_connections.max(1))
        .acquire_timeout(Duration::from_secs(cfg.db_connect_timeout_secs.max(1)))
        .connect_lazy_with(options);
    Ok(TodoStorage::new(pool))
}

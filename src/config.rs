//! Runtime configuration.
//!
//! Layering (later wins):
//! - compiled-in defaults
//! - `APP_*` environment variables for service tunables
//! - the libpq-style `PG*` variables, collected into [`DatabaseSettings`]
//!
//! Database settings are only validated when a connection is about to be
//! made, so a broken `PG*` set never keeps the process from starting.

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Serialized},
    value::{Dict, Map, Tag, Value},
};
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use thiserror::Error as ThisError;

/// The only address the HTTP server ever binds.
pub const LISTEN_ADDR: &str = "0.0.0.0:8000";

pub const DEFAULT_PG_PORT: u16 = 5432;

/// `(environment variable, key under `database`)`.
const PG_VARS: [(&str, &str); 6] = [
    ("PGHOST", "host"),
    ("PGPORT", "port"),
    ("PGDATABASE", "dbname"),
    ("PGUSER", "user"),
    ("PGPASSWORD", "password"),
    ("PGSSLMODE", "sslmode"),
];

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub loglevel: String,
    pub db_connect_timeout_secs: u64,
    pub db_max_connections: u32,
    /// Create the `todos` table on startup.
    pub init_schema: bool,
    #[serde(default, skip_serializing)]
    pub database: DatabaseSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            db_connect_timeout_secs: 5,
            db_max_connections: 5,
            init_schema: true,
            database: DatabaseSettings::default(),
        }
    }
}

impl Config {
    /// Figment reading the process environment.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("APP_"))
            .merge(PgEnv::from_env())
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

/// Raw `PG*` values as found in the environment.
#[derive(Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    pub host: Option<String>,
    pub port: Option<String>,
    pub dbname: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub sslmode: Option<String>,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

impl DatabaseSettings {
    /// Validate the settings and turn them into sqlx connect options.
    ///
    /// `PGPORT` falls back to 5432; every other variable must be present and
    /// non-blank.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let host = required(&self.host, "PGHOST")?;
        let port = self.port()?;
        let dbname = required(&self.dbname, "PGDATABASE")?;
        let user = required(&self.user, "PGUSER")?;
        let password = required(&self.password, "PGPASSWORD")?;
        let ssl_mode = self.ssl_mode()?;

        Ok(PgConnectOptions::new()
            .host(host)
            .port(port)
            .database(dbname)
            .username(user)
            .password(password)
            .ssl_mode(ssl_mode))
    }

    pub fn port(&self) -> Result<u16, ConfigError> {
        match non_blank(&self.port) {
            None => Ok(DEFAULT_PG_PORT),
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "PGPORT",
                    value: raw.to_string(),
                }),
        }
    }

    pub fn ssl_mode(&self) -> Result<PgSslMode, ConfigError> {
        let raw = required(&self.sslmode, "PGSSLMODE")?;
        raw.trim()
            .to_ascii_lowercase()
            .parse::<PgSslMode>()
            .map_err(|_| ConfigError::Invalid {
                var: "PGSSLMODE",
                value: raw.to_string(),
            })
    }
}

/// Present and not only whitespace. The value itself is passed through
/// untouched; libpq does not trim credentials either.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn required<'a>(value: &'a Option<String>, var: &'static str) -> Result<&'a str, ConfigError> {
    non_blank(value).ok_or(ConfigError::Missing(var))
}

/// Figment provider for the libpq variables.
///
/// Values are kept verbatim: figment's `Env` would turn a password such as
/// `12345` into a number or `{abc}` into a dict.
#[derive(Debug, Clone, Default)]
pub struct PgEnv {
    vars: Vec<(&'static str, String)>,
}

impl PgEnv {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let vars = PG_VARS
            .iter()
            .filter_map(|(var, key)| lookup(var).map(|value| (*key, value)))
            .collect();
        Self { vars }
    }
}

impl Provider for PgEnv {
    fn metadata(&self) -> Metadata {
        Metadata::named("PG* environment variable(s)")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let inner: Dict = self
            .vars
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    Value::String(Tag::Default, value.clone()),
                )
            })
            .collect();

        let mut dict = Dict::new();
        dict.insert("database".to_string(), Value::Dict(Tag::Default, inner));
        Ok(Profile::Default.collect(dict))
    }
}

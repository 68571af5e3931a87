//! Application settings loaded from environment variables.
//!
//! The bind address is not part of [`Config`]: `serve` reads `SERVER_HOST` and
//! `SERVER_PORT` through its clap arguments.

use std::env;

use url::Url;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD,
    DEFAULT_DB_PORT, DEFAULT_DB_USER, MAINTENANCE_DB_NAME,
};

/// Connection parameters for the PostgreSQL server
#[derive(Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    password: String,
}

impl DatabaseSettings {
    /// URL of the catalog database
    pub fn url(&self) -> String {
        self.url_for(&self.name)
    }

    /// URL of the server's maintenance database (used to create the catalog one)
    pub fn maintenance_url(&self) -> String {
        self.url_for(MAINTENANCE_DB_NAME)
    }

    fn url_for(&self, database: &str) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, database
        )
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database: DatabaseSettings,
    database_url: Option<String>,
    pub db_max_connections: u32,
}

/// Database that `create-db` ensures, and where to connect to create it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapTarget {
    pub name: String,
    pub maintenance_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("db_host", &self.database.host)
            .field("db_port", &self.database.port)
            .field("db_name", &self.database.name)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins over the individual `DB_*`/`POSTGRES_*` parts when set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseSettings {
            host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port: lookup("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_PORT),
            name: lookup("POSTGRES_DB").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            user: lookup("POSTGRES_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: lookup("POSTGRES_PASSWORD")
                .unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string()),
        };

        Self {
            database,
            database_url: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
        }
    }

    /// Connection URL of the catalog database.
    pub fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| self.database.url())
    }

    /// Resolve the database `create-db` must ensure from the effective URL.
    ///
    /// With `DATABASE_URL` set, the name is its path and the maintenance
    /// database lives on the same server with the same credentials.
    pub fn bootstrap_target(&self) -> Result<BootstrapTarget, url::ParseError> {
        let Some(raw) = &self.database_url else {
            return Ok(BootstrapTarget {
                name: self.database.name.clone(),
                maintenance_url: self.database.maintenance_url(),
            });
        };

        let mut url = Url::parse(raw)?;
        let name = match url.path().trim_start_matches('/') {
            "" => self.database.name.clone(),
            path => path.to_string(),
        };
        url.set_path(&format!("/{}", MAINTENANCE_DB_NAME));

        Ok(BootstrapTarget {
            name,
            maintenance_url: url.to_string(),
        })
    }
}
